//! Foundation types for lexical network access.
//!
//! Every other crate in the workspace depends on `wn-types`.
//!
//! # Key Types
//!
//! - [`Pos`] -- Part of speech (noun, verb, adjective, adverb)
//! - [`Relation`] -- Typed pointer between words or synsets, with the
//!   traversal recursion policy in [`is_transitive_for_traversal`]
//! - [`SynsetId`] / [`WordId`] -- Offsets-based identifiers
//! - [`SenseKey`] -- Release-independent sense name
//! - [`IndexEntry`], [`Word`], [`Synset`], [`SenseEntry`], [`ExceptionEntry`]
//!   -- Records served by a lexical store

pub mod error;
pub mod frame;
pub mod id;
pub mod pos;
pub mod record;
pub mod relation;
pub mod sense_key;

pub use error::TypeError;
pub use frame::{AdjMarker, VerbFrame};
pub use id::{SynsetId, WordId, WordMember};
pub use pos::Pos;
pub use record::{
    normalize_lemma, ExceptionEntry, IndexEntry, RelatedSynsets, RelatedWords, SenseEntry, Synset,
    Word,
};
pub use relation::{is_transitive_for_traversal, Relation, TRAVERSAL_SYMBOLS};
pub use sense_key::{HeadWord, SenseKey};
