//! Error types for fallible setup paths (shapes, catalogs, configuration).
//!
//! Placement itself never errors: an illegal placement is an ordinary `false`.

use thiserror::Error;

/// Errors raised while building shapes, catalogs or engine configuration.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Catalog error: {0}")]
    Catalog(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible grid setup.
pub type GridResult<T> = Result<T, GridError>;
