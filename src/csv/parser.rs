//! Line-oriented CSV parsing without quoting

use crate::csv::ParseConfig;
use crate::types::{Document, Field, Record};
use log::debug;

const RECORD_TERMINATOR: char = '\n';

/// CSV parser for complete in-memory buffers
///
/// Stateless between calls: one parser can be shared across threads and
/// reused for any number of inputs.
///
/// # Examples
///
/// ```
/// use csvlite::csv::{CsvParser, ParseConfig};
///
/// let parser = CsvParser::new(ParseConfig::default());
/// let doc = parser.parse("foo,,baz\nqux");
/// assert_eq!(doc.to_options(), vec![vec![Some("foo"), None, Some("baz")], vec![Some("qux")]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    config: ParseConfig,
}

impl CsvParser {
    /// Create a new CSV parser with the given options
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse a complete buffer into records
    ///
    /// Empty input yields no records. A single trailing `\n` ends the last
    /// line without starting another one.
    pub fn parse(&self, input: &str) -> Document {
        if input.is_empty() {
            return Document::default();
        }

        let body = input.strip_suffix(RECORD_TERMINATOR).unwrap_or(input);
        let doc: Document = body
            .split(RECORD_TERMINATOR)
            .map(|line| self.parse_line(line))
            .collect();

        debug!(
            "Parsed {} records from {} bytes (col_sep {:?})",
            doc.len(),
            input.len(),
            self.config.col_sep()
        );
        doc
    }

    /// Parse one line (without its terminator) into fields
    ///
    /// An empty line has no fields at all; every other line has one more
    /// field than it has separators.
    pub fn parse_line(&self, line: &str) -> Record {
        if line.is_empty() {
            return Record::default();
        }

        line.split(self.config.col_sep())
            .map(Field::from_raw)
            .collect()
    }
}
