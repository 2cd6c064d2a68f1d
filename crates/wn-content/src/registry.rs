//! Append-only registry of content types.
//!
//! The built-in registry is built once, on first use, from the literal list
//! of built-in content types, and is immutable afterwards. It may be read
//! concurrently without synchronization.
//!
//! Callers that define their own content types keep them in a registry they
//! own ([`ContentTypeRegistry::with_builtins`] + [`register`]). Constructing
//! a content type never adds it to the built-in registry, so
//! [`ContentTypeRegistry::builtin`]`.values()` always yields exactly the
//! built-in set.
//!
//! [`register`]: ContentTypeRegistry::register

use std::sync::LazyLock;

use tracing::debug;

use wn_types::Pos;

use crate::charset::Charset;
use crate::compare::LineComparator;
use crate::content_type::{ContentType, BUILTIN_LIST};
use crate::error::ClassificationResult;
use crate::kind::DataKind;

static BUILTIN: LazyLock<ContentTypeRegistry> = LazyLock::new(|| {
    let mut registry = ContentTypeRegistry::new();
    for content_type in BUILTIN_LIST {
        registry.register(*content_type);
    }
    debug!(count = registry.len(), "built-in content types registered");
    registry
});

/// Ordered, deduplicated set of content types.
#[derive(Clone, Debug, Default)]
pub struct ContentTypeRegistry {
    entries: Vec<ContentType>,
}

impl ContentTypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in registry.
    pub fn builtin() -> &'static ContentTypeRegistry {
        &BUILTIN
    }

    /// An owned copy of the built-in registry, for callers to extend.
    pub fn with_builtins() -> Self {
        Self::builtin().clone()
    }

    /// Append `content_type` unless its `(kind, pos)` is already present.
    ///
    /// Returns the registered entry: the new one, or the existing one with
    /// the same identity (whose ordering and charset are kept).
    pub fn register(&mut self, content_type: ContentType) -> &ContentType {
        match self.entries.iter().position(|c| *c == content_type) {
            Some(index) => {
                debug!(%content_type, "content type already registered");
                &self.entries[index]
            }
            None => {
                self.entries.push(content_type);
                &self.entries[self.entries.len() - 1]
            }
        }
    }

    /// Construct and register a content type from its parts.
    ///
    /// A missing `kind` is an
    /// [`InvalidClassification`](crate::ClassificationError::InvalidClassification).
    pub fn register_parts(
        &mut self,
        kind: Option<DataKind>,
        pos: Option<Pos>,
        ordering: Option<&'static dyn LineComparator>,
        encoding: Option<Charset>,
    ) -> ClassificationResult<ContentType> {
        let mut builder = ContentType::builder();
        if let Some(kind) = kind {
            builder = builder.kind(kind);
        }
        if let Some(pos) = pos {
            builder = builder.pos(pos);
        }
        if let Some(ordering) = ordering {
            builder = builder.ordering(ordering);
        }
        if let Some(encoding) = encoding {
            builder = builder.encoding(encoding);
        }
        let content_type = builder.build()?;
        Ok(*self.register(content_type))
    }

    /// All registered content types, in registration order.
    pub fn values(&self) -> &[ContentType] {
        &self.entries
    }

    /// Look up a classification by identity.
    pub fn get(&self, kind: DataKind, pos: Option<Pos>) -> Option<&ContentType> {
        self.entries.iter().find(|c| c.key() == (kind, pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentType> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The built-in content types, in declaration order.
pub fn values() -> &'static [ContentType] {
    ContentTypeRegistry::builtin().values()
}
