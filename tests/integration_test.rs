//! Integration tests for csvlite

use csvlite::types::{Document, Field, Record};
use csvlite::{parse, parse_bytes, CsvError, CsvReader, ParseConfig};
use std::io::Write;
use tempfile::NamedTempFile;

type Table<'a> = Vec<Vec<Option<&'a str>>>;

fn configs() -> Vec<ParseConfig> {
    vec![
        ParseConfig::default(),
        ParseConfig::with_col_sep(';').unwrap(),
        ParseConfig::with_col_sep('\t').unwrap(),
    ]
}

/// Substitute `,` in a template with the config's separator
fn with_sep(template: &str, config: ParseConfig) -> String {
    template.replace(',', &config.col_sep().to_string())
}

fn check(template: &str, expected: Table<'_>) {
    for config in configs() {
        let input = with_sep(template, config);
        assert_eq!(
            parse(&input, config).to_options(),
            expected,
            "input {:?} with col_sep {:?}",
            input,
            config.col_sep()
        );
    }
}

#[test]
fn test_empty_input_has_no_records() {
    check("", vec![]);
}

#[test]
fn test_lone_newline_is_one_empty_record() {
    check("\n", vec![vec![]]);
}

#[test]
fn test_single_field() {
    check("foo", vec![vec![Some("foo")]]);
}

#[test]
fn test_three_fields() {
    check("foo,bar,baz", vec![vec![Some("foo"), Some("bar"), Some("baz")]]);
}

#[test]
fn test_consecutive_separators_give_null() {
    check("foo,,baz", vec![vec![Some("foo"), None, Some("baz")]]);
}

#[test]
fn test_leading_newline() {
    check("\nfoo", vec![vec![], vec![Some("foo")]]);
}

#[test]
fn test_trailing_newline_adds_no_record() {
    check("foo\n", vec![vec![Some("foo")]]);
}

#[test]
fn test_two_lines() {
    check("foo\nbar", vec![vec![Some("foo")], vec![Some("bar")]]);
}

#[test]
fn test_two_lines_two_fields() {
    check(
        "foo,bar\nbaz,quz",
        vec![vec![Some("foo"), Some("bar")], vec![Some("baz"), Some("quz")]],
    );
}

#[test]
fn test_ragged_lines() {
    check(
        "foo,bar\nbaz",
        vec![vec![Some("foo"), Some("bar")], vec![Some("baz")]],
    );
    check(
        "foo\nbar,baz",
        vec![vec![Some("foo")], vec![Some("bar"), Some("baz")]],
    );
}

#[test]
fn test_blank_lines_before_data() {
    check("\n\nbar", vec![vec![], vec![], vec![Some("bar")]]);
}

#[test]
fn test_lone_separator_is_two_nulls() {
    check(",", vec![vec![None, None]]);
    check("a\n,\nb", vec![vec![Some("a")], vec![None, None], vec![Some("b")]]);
}

#[test]
fn test_trailing_separator_is_null() {
    check("foo,", vec![vec![Some("foo"), None]]);
}

#[test]
fn test_semicolon_separator() {
    let config = ParseConfig::with_col_sep(';').unwrap();

    assert_eq!(parse("foo", config).to_options(), vec![vec![Some("foo")]]);
    assert_eq!(
        parse("foo;bar", config).to_options(),
        vec![vec![Some("foo"), Some("bar")]]
    );
    assert_eq!(
        parse("foo;bar\nbaz;quz", config).to_options(),
        vec![vec![Some("foo"), Some("bar")], vec![Some("baz"), Some("quz")]]
    );
    // commas are plain content under a different separator
    assert_eq!(
        parse("a,b;c", config).to_options(),
        vec![vec![Some("a,b"), Some("c")]]
    );
}

#[test]
fn test_null_is_not_empty_text() {
    let doc = parse("foo,,baz", ParseConfig::default());
    let record = doc.get(0).unwrap();
    assert_eq!(record.get(1), Some(&Field::Null));
    assert_ne!(record.get(1), Some(&Field::Text(String::new())));
}

#[test]
fn test_rejoin_and_reparse() {
    for config in configs() {
        let sep = config.col_sep().to_string();
        let original = Document::new(vec![
            Record::new(vec!["id".into(), "name".into()]),
            Record::new(vec![]),
            Record::new(vec!["1".into(), "Alice Smith".into(), "x".into()]),
            Record::new(vec!["2".into()]),
        ]);

        let text = original
            .iter()
            .map(|record| {
                record
                    .iter()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>()
                    .join(&sep)
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(parse(&text, config), original);
        assert_eq!(parse(&(text + "\n"), config), original);
    }
}

#[test]
fn test_parse_bytes_rejects_invalid_utf8() {
    let result = parse_bytes(&[b'f', b'o', b'o', b',', 0x80], ParseConfig::default());
    match result {
        Err(CsvError::EncodingError { valid_up_to, .. }) => assert_eq!(valid_up_to, 4),
        other => panic!("expected encoding error, got {:?}", other),
    }
}

#[test]
fn test_reader_roundtrip_from_file() {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(b"foo;bar\n\nbaz;;\n").unwrap();

    let reader = CsvReader::open(temp.path())
        .unwrap()
        .config(ParseConfig::with_col_sep(';').unwrap());
    let doc = reader.read_document().unwrap();

    let expected: Table<'_> = vec![
        vec![Some("foo"), Some("bar")],
        vec![],
        vec![Some("baz"), None, None],
    ];
    assert_eq!(doc.to_options(), expected);
}

#[test]
fn test_concurrent_parses() {
    let inputs: Vec<String> = (0..8).map(|i| format!("{i},a\n{i},b\n")).collect();
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| std::thread::spawn(move || parse(&input, ParseConfig::default())))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let doc = handle.join().unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(1).unwrap().get(0), Some(&Field::from(i.to_string())));
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_nested_arrays() {
    let doc = parse("foo,,baz\n\n", ParseConfig::default());
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"[["foo",null,"baz"],[]]"#);

    let back: Document = serde_json::from_str(r#"[["foo",null,"baz"],[]]"#).unwrap();
    assert_eq!(back, parse("foo,,baz\n\n", ParseConfig::default()));
}
