use wn_content::{ClassificationError, ContentType};
use wn_types::TypeError;

/// Errors from lexical store operations.
///
/// Ordinary absence (no entry for a key) is never an error; lookups return
/// `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lookup was classified with a content type of the wrong kind or
    /// part of speech.
    #[error("content type mismatch: expected {expected}, got {actual}")]
    ContentTypeMismatch { expected: String, actual: ContentType },

    /// The store has no table for a content type.
    #[error("no resource for {0}")]
    MissingResource(ContentType),

    /// Snapshot serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading or writing a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
