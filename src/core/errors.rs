//! Shared error types for the scoring pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scriptsent operations
///
/// Every variant is fatal for an analysis run. Nothing in the pipeline
/// retries or degrades; the variants only exist so the failure point can
/// be reported clearly.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line carries more fields than the header names
    #[error(
        "{}:{line}: expected at most {expected} fields, found {found}",
        path.display()
    )]
    ColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field value could not be converted by its cast
    #[error("line {line}: cannot read field `{field}` as {cast}: {value:?}")]
    Cast {
        field: String,
        value: String,
        cast: &'static str,
        line: usize,
    },

    /// A record lacks a field the script layout requires
    #[error("line {line}: missing field `{field}`")]
    MissingField { field: String, line: usize },

    /// Stats or scores were requested for a character that never speaks
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    /// Stats were requested over an empty score list
    #[error("No scores recorded for {0}")]
    EmptyScores(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a read error with path context
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
