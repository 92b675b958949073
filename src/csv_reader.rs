//! CSV file loading with decompression
//!
//! The reader loads the whole input first and parses it in one call. It does
//! not stream rows.

use crate::csv::{CsvParser, ParseConfig};
use crate::error::{CsvError, Result};
use crate::types::Document;
use flate2::read::GzDecoder;
use log::debug;
use s_zip::StreamingZipReader;
use std::io::Read;
use std::path::Path;

/// CSV input loaded fully into memory
///
/// Automatically handles compressed files (.csv.zst, .csv.zip, .csv.gz).
///
/// # Examples
///
/// ```no_run
/// use csvlite::csv_reader::CsvReader;
/// use csvlite::csv::ParseConfig;
///
/// let reader = CsvReader::open("data.csv")
///     .unwrap()
///     .config(ParseConfig::with_col_sep(';').unwrap());
///
/// let doc = reader.read_document().unwrap();
/// println!("{} records", doc.len());
/// ```
pub struct CsvReader {
    data: Vec<u8>,
    config: ParseConfig,
}

impl CsvReader {
    /// Open CSV file - auto-detects compression from file extension
    ///
    /// # File Extensions
    /// - `.csv` (or anything else) → read as-is
    /// - `.csv.zst`, `.csv.zip` → ZIP archive; the first `.csv` entry is used,
    ///   or the first entry if none ends in `.csv`
    /// - `.csv.gz` → gzip stream
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_str().unwrap_or("");

        let data = if path_str.ends_with(".csv.zst") || path_str.ends_with(".csv.zip") {
            Self::read_archive(path_ref)?
        } else if path_str.ends_with(".csv.gz") {
            Self::read_gzip(path_ref)?
        } else {
            std::fs::read(path_ref)
                .map_err(|e| CsvError::ReadError(format!("Failed to open CSV file: {}", e)))?
        };

        debug!("Loaded {} bytes from {}", data.len(), path_ref.display());
        Ok(Self::from_bytes(data))
    }

    /// Wrap an in-memory buffer
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        CsvReader {
            data: data.into(),
            config: ParseConfig::default(),
        }
    }

    /// Set parse options (builder pattern)
    pub fn config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    /// Size of the loaded buffer in bytes
    pub fn len_bytes(&self) -> usize {
        self.data.len()
    }

    /// Decode and parse the whole buffer
    ///
    /// Can be called repeatedly; the buffer is kept.
    pub fn read_document(&self) -> Result<Document> {
        let text = std::str::from_utf8(&self.data)?;
        Ok(CsvParser::new(self.config).parse(text))
    }

    fn read_gzip(path: &Path) -> Result<Vec<u8>> {
        let compressed = std::fs::read(path)
            .map_err(|e| CsvError::ReadError(format!("Failed to open gzip file: {}", e)))?;

        let mut decoder = GzDecoder::new(&compressed[..]);
        let mut data = Vec::with_capacity(compressed.len() * 4);
        decoder
            .read_to_end(&mut data)
            .map_err(|e| CsvError::ReadError(format!("Failed to decompress gzip: {}", e)))?;
        Ok(data)
    }

    fn read_archive(path: &Path) -> Result<Vec<u8>> {
        let mut zip = StreamingZipReader::open(path)
            .map_err(|e| CsvError::ReadError(format!("Failed to open ZIP: {}", e)))?;

        let entry_name = zip
            .entries()
            .iter()
            .find(|e| e.name.ends_with(".csv"))
            .or_else(|| zip.entries().first())
            .ok_or_else(|| CsvError::ReadError("No CSV entry found in archive".to_string()))?
            .name
            .clone();

        debug!("Reading archive entry {}", entry_name);
        zip.read_entry_by_name(&entry_name)
            .map_err(|e| CsvError::ReadError(format!("Failed to read ZIP entry: {}", e)))
    }
}
