//! Error types for semantic-graph traversal.

use wn_store::StoreError;
use wn_types::{Pos, SenseKey, SynsetId, WordId};

/// Errors that can occur while walking the relation graph.
///
/// A lemma with no index entry for some part of speech, or a relation with
/// no targets, is not an error; it simply ends that branch.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// A sense has no sense-entry record. Sense records and sense entries
    /// are expected to be in lockstep.
    #[error("inconsistent store: no sense entry for {sense_key} at offset {offset:08} with pos {pos}")]
    InconsistentStore {
        sense_key: SenseKey,
        offset: u32,
        pos: Pos,
    },

    /// A relation or word points at a synset the store does not have.
    #[error("dangling synset reference: {0}")]
    DanglingSynset(SynsetId),

    /// An index entry or lexical relation points at a missing word.
    #[error("dangling word reference: {0}")]
    DanglingWord(WordId),

    /// A walk configuration could not be parsed.
    #[error("invalid walk configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for walk results.
pub type WalkResult<T> = Result<T, WalkError>;
