//! Error types for league data loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for league data operations
pub type Result<T> = std::result::Result<T, LeagueDataError>;

/// Errors that can occur while reading upstream league records
#[derive(Error, Debug)]
pub enum LeagueDataError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Required record missing: {0}")]
    MissingRecord(String),

    #[error("Data source error: {0}")]
    Source(String),
}

impl From<String> for LeagueDataError {
    fn from(err: String) -> Self {
        LeagueDataError::Source(err)
    }
}

impl From<&str> for LeagueDataError {
    fn from(err: &str) -> Self {
        LeagueDataError::Source(err.to_string())
    }
}
