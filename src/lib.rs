//! # csvlite
//!
//! Small CSV parser with a configurable column separator.
//!
//! Input is a complete text buffer. Lines end at `\n`, fields are split on
//! the separator, and zero-length fields come back as [`Field::Null`].
//! There is no quoting, escaping, or header handling.
//!
//! ## Quick Start
//!
//! ```
//! use csvlite::{parse, ParseConfig};
//!
//! let doc = parse("foo,bar\nbaz,,quz\n", ParseConfig::default());
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.to_options()[1], vec![Some("baz"), None, Some("quz")]);
//! ```
//!
//! ## Custom separator
//!
//! ```
//! use csvlite::{parse, ParseConfig};
//!
//! let config = ParseConfig::with_col_sep(';')?;
//! let doc = parse("foo;bar\nbaz;quz", config);
//! assert_eq!(doc.to_options(), vec![vec![Some("foo"), Some("bar")], vec![Some("baz"), Some("quz")]]);
//! # Ok::<(), csvlite::CsvError>(())
//! ```
//!
//! ## Reading files
//!
//! ```no_run
//! use csvlite::csv_reader::CsvReader;
//!
//! // Plain or compressed (.csv.zst, .csv.zip, .csv.gz)
//! let doc = CsvReader::open("data.csv.zst")?.read_document()?;
//! for record in &doc {
//!     println!("{:?}", record.to_options());
//! }
//! # Ok::<(), csvlite::CsvError>(())
//! ```

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod types;

pub use csv::{CsvParser, ParseConfig};
pub use csv_reader::CsvReader;
pub use error::{CsvError, Result};
pub use types::{Document, Field, Record};

/// Parse a complete text buffer
pub fn parse(input: &str, config: ParseConfig) -> Document {
    CsvParser::new(config).parse(input)
}

/// Decode UTF-8 bytes and parse them
///
/// Invalid input fails with [`CsvError::EncodingError`] before any record is
/// produced.
pub fn parse_bytes(input: &[u8], config: ParseConfig) -> Result<Document> {
    let text = std::str::from_utf8(input)?;
    Ok(parse(text, config))
}
