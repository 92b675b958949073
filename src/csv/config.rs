//! Parse options

use crate::error::{CsvError, Result};

/// Options for a single parse call
///
/// Immutable once built: the only way to change the separator is to build
/// a new config.
///
/// # Examples
///
/// ```
/// use csvlite::csv::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert_eq!(config.col_sep(), ',');
///
/// let config = ParseConfig::with_col_sep(';').unwrap();
/// assert_eq!(config.col_sep(), ';');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseConfig {
    col_sep: char,
}

impl ParseConfig {
    /// Default separator
    pub const DEFAULT_COL_SEP: char = ',';

    /// Create a config with the default separator (`,`)
    pub fn new() -> Self {
        Self {
            col_sep: Self::DEFAULT_COL_SEP,
        }
    }

    /// Create a config with a custom separator
    ///
    /// `'\n'` is rejected because it already terminates records.
    pub fn with_col_sep(col_sep: char) -> Result<Self> {
        if col_sep == '\n' {
            return Err(CsvError::InvalidSeparator(col_sep));
        }
        Ok(Self { col_sep })
    }

    pub fn col_sep(&self) -> char {
        self.col_sep
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
