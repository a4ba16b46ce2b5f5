//! Error types for the bivar library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bivar operations.
#[derive(Debug, Error)]
pub enum BivarError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no header to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A source's header does not match the first source.
    #[error("Schema mismatch in '{source_name}': expected columns {expected:?}, found {found:?}")]
    SchemaMismatch {
        source_name: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Referenced variable is not a column of the table.
    #[error("Unknown column: '{0}'")]
    InvalidColumn(String),

    /// An inferential test cannot be computed on the given input.
    #[error("{test} is undefined: {reason}")]
    DegenerateStatistic { test: &'static str, reason: String },

    /// Failure inside a statistical routine.
    #[error("Statistics error: {0}")]
    Statistics(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BivarError {
    pub(crate) fn degenerate(test: &'static str, reason: impl Into<String>) -> Self {
        BivarError::DegenerateStatistic {
            test,
            reason: reason.into(),
        }
    }
}

/// Result type alias for bivar operations.
pub type Result<T> = std::result::Result<T, BivarError>;
