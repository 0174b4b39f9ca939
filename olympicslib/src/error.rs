//! Error types for olympicslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading results or building reports
#[derive(Error, Debug)]
pub enum OlympicsError {
    /// A query filter matched no records
    #[error("No entries found")]
    EmptyResult,

    /// Failed to open or read the results file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The delimited reader rejected the input (e.g. a non-rectangular row)
    #[error("malformed results table: {0}")]
    Csv(#[from] csv::Error),

    /// A column every report depends on is absent from the header
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A field could not be converted to its typed representation
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OlympicsError {
    /// Whether this error only means "nothing matched" rather than a broken source.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, OlympicsError::EmptyResult)
    }
}
