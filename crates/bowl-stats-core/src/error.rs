//! Error types for bowl-stats-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bowl-stats operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unparseable date '{value}' in {path} at line {line}")]
    InvalidDate {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Month column '{0}' collides with a fixed summary field")]
    ColumnCollision(String),
}

/// Result type alias for bowl-stats operations
pub type Result<T> = std::result::Result<T, Error>;
