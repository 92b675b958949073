//! Error types for CSV parsing

use std::str::Utf8Error;
use thiserror::Error;

/// Errors surfaced by the parser and the file reader
#[derive(Error, Debug)]
pub enum CsvError {
    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 in input after {valid_up_to} bytes")]
    EncodingError {
        /// Length of the valid prefix
        valid_up_to: usize,
        #[source]
        source: Utf8Error,
    },

    /// Separator cannot be used to split fields
    #[error("Invalid column separator: {0:?}")]
    InvalidSeparator(char),

    /// Input could not be loaded
    #[error("Read error: {0}")]
    ReadError(String),
}

impl From<Utf8Error> for CsvError {
    fn from(source: Utf8Error) -> Self {
        CsvError::EncodingError {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, CsvError>;
