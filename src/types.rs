//! Type definitions for parsed CSV data

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single field within a record
///
/// `Null` marks a zero-length position between separators (`foo,,baz`).
/// `Text("")` is a distinct value: the parser never produces it, but callers
/// may build one and it compares unequal to `Null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Field {
    /// Text content, kept exactly as it appeared in the input
    Text(String),
    /// No content between two separators
    Null,
}

impl Field {
    /// Interpret a raw field slice: empty becomes `Null`, anything else is text
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Field::Null
        } else {
            Field::Text(raw.to_string())
        }
    }

    /// Borrow the text, `None` for null fields
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            Field::Null => None,
        }
    }

    /// Check if field is null
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Convert into an owned optional string
    pub fn into_option(self) -> Option<String> {
        match self {
            Field::Text(s) => Some(s),
            Field::Null => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or(""))
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Null, Into::into)
    }
}

/// One line of input split into fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Record {
    /// Fields in column order
    pub fields: Vec<Field>,
}

impl Record {
    /// Create a new record
    pub fn new(fields: Vec<Field>) -> Self {
        Record { fields }
    }

    /// Get field at column index
    pub fn get(&self, col: usize) -> Option<&Field> {
        self.fields.get(col)
    }

    /// Get number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if record has no fields (parsed from an empty line)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    /// Borrowed view with nulls as `None`
    pub fn to_options(&self) -> Vec<Option<&str>> {
        self.fields.iter().map(Field::as_str).collect()
    }
}

impl From<Vec<Field>> for Record {
    fn from(fields: Vec<Field>) -> Self {
        Record { fields }
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Complete result of one parse call
///
/// Owned entirely by the caller; nothing in it borrows from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Document {
    /// Records in input order
    pub records: Vec<Record>,
}

impl Document {
    /// Create a new document
    pub fn new(records: Vec<Record>) -> Self {
        Document { records }
    }

    /// Get record at line index
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Get number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if document has no records (parsed from empty input)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Nested borrowed view, handy for comparing against literal tables
    pub fn to_options(&self) -> Vec<Vec<Option<&str>>> {
        self.records.iter().map(Record::to_options).collect()
    }
}

impl From<Vec<Record>> for Document {
    fn from(records: Vec<Record>) -> Self {
        Document { records }
    }
}

impl FromIterator<Record> for Document {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Document {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
