//! # Record Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on collection '{collection}': {source}")]
    Io {
        collection: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed collection '{collection}': {source}")]
    Malformed {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Collection '{0}' is not a JSON array")]
    NotAnArray(String),

    #[error("Failed to encode collection '{collection}': {source}")]
    Encode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid collection name: {0}")]
    InvalidName(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn io(collection: &str, source: std::io::Error) -> Self {
        StoreError::Io {
            collection: collection.to_string(),
            source,
        }
    }
}
