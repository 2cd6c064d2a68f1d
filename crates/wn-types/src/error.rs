use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid part of speech: {0}")]
    InvalidPos(String),

    #[error("invalid sense key {key:?}: {reason}")]
    InvalidSenseKey { key: String, reason: String },

    #[error("unknown relation symbol: {0:?}")]
    UnknownRelation(String),

    #[error("unknown adjective marker: {0:?}")]
    UnknownAdjMarker(String),

    #[error("verb frame number out of range: {0}")]
    InvalidVerbFrame(u8),

    #[error("synset offset {0} exceeds 8 digits")]
    OffsetOutOfRange(u32),
}
