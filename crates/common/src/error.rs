//! Error types for wgconsole

use thiserror::Error;

/// Result type alias using wgconsole Error
pub type Result<T> = std::result::Result<T, Error>;

/// wgconsole error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Mesh tool not found: {path}")]
    ToolNotFound { path: String },

    #[error("Mesh tool timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
