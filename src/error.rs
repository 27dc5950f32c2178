//! Error types for inbox-pilot.
//!
//! The pipeline itself (classify / extract / draft) is infallible by
//! design; errors only arise at the persistence boundary.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Document store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize document {name}: {source}")]
    Serialize {
        name: String,
        source: serde_json::Error,
    },

    #[error("Failed to parse document {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
