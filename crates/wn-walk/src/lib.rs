//! Bounded semantic-graph traversal over a lexical store.
//!
//! Given a lemma, the [`Walker`] looks the lemma up under every part of
//! speech, expands each sense, and walks the relation graph of the sense's
//! synset. The result is a structured [`Trace`] which [`render`] turns into
//! the stable, indented text form.
//!
//! Recursion is governed by the relation catalog's traversal policy
//! ([`wn_types::is_transitive_for_traversal`]), bounded by
//! [`WalkConfig::max_depth`], and optionally by per-branch cycle detection.

pub mod config;
pub mod error;
pub mod render;
pub mod trace;
pub mod walker;

pub use config::{MissingSenseEntry, WalkConfig};
pub use error::{WalkError, WalkResult};
pub use render::{render, render_line, render_traversal, synset_text};
pub use trace::{Trace, TraceLine};
pub use walker::Walker;
