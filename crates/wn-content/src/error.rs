use thiserror::Error;

use crate::kind::DataKind;

/// Errors from classifying resources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// A content type was described without a data kind.
    #[error("invalid classification: content type has no data kind")]
    InvalidClassification,

    /// A part-of-speech qualified kind was resolved without a part of speech.
    #[error("{0} content types require a part of speech")]
    UnsupportedPos(DataKind),

    /// A charset label was not recognised.
    #[error("unknown charset: {0:?}")]
    UnknownCharset(String),
}

/// Convenience alias for classification results.
pub type ClassificationResult<T> = Result<T, ClassificationError>;
