//! CSV parsing with a configurable column separator

mod config;
mod parser;

pub use config::ParseConfig;
pub use parser::CsvParser;
