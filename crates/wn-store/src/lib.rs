//! Lexical store abstraction.
//!
//! A store answers point lookups against the resources of a lexical
//! database: index entries, synsets, words, sense entries and morphological
//! exceptions. Each resource is classified by a
//! [`ContentType`](wn_content::ContentType), whose ordering rule decides how
//! the resource is searched.
//!
//! # Storage Backends
//!
//! All backends implement the [`LexicalStore`] trait:
//!
//! - [`InMemoryLexicalStore`] -- sorted in-memory tables for tests, embedding
//!   and serving [`LexiconSnapshot`]s
//!
//! # Design Rules
//!
//! 1. Records are immutable values; stores hand out clones.
//! 2. A missing record is `Ok(None)`, never an error.
//! 3. A lookup classified with the wrong content type is an error.
//! 4. Concurrent reads are always safe.

pub mod error;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryLexicalStore;
pub use snapshot::LexiconSnapshot;
pub use traits::LexicalStore;
