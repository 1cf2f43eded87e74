//! # Order Store Errors
//!
//! Only dataset loading can fail. Lookups against a loaded store never do.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Order numbers are the lookup key and must be unique
    #[error("Duplicate order number: {0}")]
    DuplicateOrder(String),
}
