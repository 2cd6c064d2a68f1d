//! Content types: the classification of every queryable resource.
//!
//! A [`ContentType`] pairs a [`DataKind`] with an optional [`Pos`] and
//! carries what a store needs to read the resource: the line ordering rule
//! used for binary search and an optional charset override.
//!
//! The thirteen built-in content types are statics (`INDEX_NOUN`,
//! `DATA_VERB`, `SENSE`, ...). Callers may construct more at any time with
//! [`ContentType::new`] or [`ContentType::builder`]; those never appear in
//! the built-in registry unless registered into a registry the caller owns.
//!
//! Identity is `(kind, pos)`. Two content types with the same kind and part
//! of speech are the same classification even if their ordering rules or
//! charsets differ.

use std::fmt;
use std::hash::{Hash, Hasher};

use wn_types::Pos;

use crate::charset::Charset;
use crate::compare::{
    DataLineComparator, ExceptionLineComparator, IndexLineComparator, LineComparator,
    SenseKeyLineComparator,
};
use crate::error::{ClassificationError, ClassificationResult};
use crate::kind::DataKind;

pub static INDEX_NOUN: ContentType =
    ContentType::new(DataKind::Index, Some(Pos::Noun), Some(&IndexLineComparator));
pub static INDEX_VERB: ContentType =
    ContentType::new(DataKind::Index, Some(Pos::Verb), Some(&IndexLineComparator));
pub static INDEX_ADJECTIVE: ContentType =
    ContentType::new(DataKind::Index, Some(Pos::Adjective), Some(&IndexLineComparator));
pub static INDEX_ADVERB: ContentType =
    ContentType::new(DataKind::Index, Some(Pos::Adverb), Some(&IndexLineComparator));

pub static DATA_NOUN: ContentType =
    ContentType::new(DataKind::Data, Some(Pos::Noun), Some(&DataLineComparator));
pub static DATA_VERB: ContentType =
    ContentType::new(DataKind::Data, Some(Pos::Verb), Some(&DataLineComparator));
pub static DATA_ADJECTIVE: ContentType =
    ContentType::new(DataKind::Data, Some(Pos::Adjective), Some(&DataLineComparator));
pub static DATA_ADVERB: ContentType =
    ContentType::new(DataKind::Data, Some(Pos::Adverb), Some(&DataLineComparator));

pub static EXCEPTION_NOUN: ContentType =
    ContentType::new(DataKind::Exception, Some(Pos::Noun), Some(&ExceptionLineComparator));
pub static EXCEPTION_VERB: ContentType =
    ContentType::new(DataKind::Exception, Some(Pos::Verb), Some(&ExceptionLineComparator));
pub static EXCEPTION_ADJECTIVE: ContentType =
    ContentType::new(DataKind::Exception, Some(Pos::Adjective), Some(&ExceptionLineComparator));
pub static EXCEPTION_ADVERB: ContentType =
    ContentType::new(DataKind::Exception, Some(Pos::Adverb), Some(&ExceptionLineComparator));

pub static SENSE: ContentType =
    ContentType::new(DataKind::Sense, None, Some(&SenseKeyLineComparator));

/// Built-in content types in declaration order.
pub(crate) static BUILTIN_LIST: [&ContentType; 13] = [
    &INDEX_NOUN,
    &INDEX_VERB,
    &INDEX_ADJECTIVE,
    &INDEX_ADVERB,
    &DATA_NOUN,
    &DATA_VERB,
    &DATA_ADJECTIVE,
    &DATA_ADVERB,
    &EXCEPTION_NOUN,
    &EXCEPTION_VERB,
    &EXCEPTION_ADJECTIVE,
    &EXCEPTION_ADVERB,
    &SENSE,
];

/// Classification of one resource by data kind and part of speech.
#[derive(Clone, Copy, Debug)]
pub struct ContentType {
    kind: DataKind,
    pos: Option<Pos>,
    ordering: Option<&'static dyn LineComparator>,
    encoding: Option<Charset>,
}

impl ContentType {
    /// Construct a content type. `ordering: None` marks the resource as
    /// unordered (not binary-searchable).
    pub const fn new(
        kind: DataKind,
        pos: Option<Pos>,
        ordering: Option<&'static dyn LineComparator>,
    ) -> Self {
        Self {
            kind,
            pos,
            ordering,
            encoding: None,
        }
    }

    /// Same classification with a charset override.
    pub const fn with_encoding(mut self, encoding: Charset) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Start describing a caller-defined content type.
    pub fn builder() -> ContentTypeBuilder {
        ContentTypeBuilder::default()
    }

    pub fn kind(&self) -> DataKind {
        self.kind
    }

    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }

    pub fn ordering(&self) -> Option<&'static dyn LineComparator> {
        self.ordering
    }

    pub fn is_ordered(&self) -> bool {
        self.ordering.is_some()
    }

    pub fn encoding(&self) -> Option<Charset> {
        self.encoding
    }

    /// The charset to read with: this type's override, else `default`.
    pub fn effective_charset(&self, default: Charset) -> Charset {
        self.encoding.unwrap_or(default)
    }

    /// Conventional resource name, e.g. `index.noun` or `index.sense`.
    pub fn resource_name(&self) -> Option<String> {
        self.kind.resource_name(self.pos)
    }

    /// The identity key.
    pub fn key(&self) -> (DataKind, Option<Pos>) {
        (self.kind, self.pos)
    }

    /// Resolve a built-in content type for `kind`, requiring `pos` for the
    /// POS-qualified kinds. [`DataKind::Sense`] ignores `pos`.
    pub fn resolve(
        kind: DataKind,
        pos: Option<Pos>,
    ) -> ClassificationResult<&'static ContentType> {
        match (kind, pos) {
            (DataKind::Sense, _) => Ok(&SENSE),
            (DataKind::Index, Some(pos)) => Ok(resolve_index(pos)),
            (DataKind::Data, Some(pos)) => Ok(resolve_data(pos)),
            (DataKind::Exception, Some(pos)) => Ok(resolve_exception(pos)),
            (kind, None) => Err(ClassificationError::UnsupportedPos(kind)),
        }
    }
}

impl PartialEq for ContentType {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ContentType {}

impl Hash for ContentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Some(pos) => write!(f, "[ContentType: {}/{}]", self.kind, pos),
            None => write!(f, "[ContentType: {}]", self.kind),
        }
    }
}

/// The index content type for `pos`.
pub fn resolve_index(pos: Pos) -> &'static ContentType {
    match pos {
        Pos::Noun => &INDEX_NOUN,
        Pos::Verb => &INDEX_VERB,
        Pos::Adjective => &INDEX_ADJECTIVE,
        Pos::Adverb => &INDEX_ADVERB,
    }
}

/// The synset data content type for `pos`.
pub fn resolve_data(pos: Pos) -> &'static ContentType {
    match pos {
        Pos::Noun => &DATA_NOUN,
        Pos::Verb => &DATA_VERB,
        Pos::Adjective => &DATA_ADJECTIVE,
        Pos::Adverb => &DATA_ADVERB,
    }
}

/// The exception-list content type for `pos`.
pub fn resolve_exception(pos: Pos) -> &'static ContentType {
    match pos {
        Pos::Noun => &EXCEPTION_NOUN,
        Pos::Verb => &EXCEPTION_VERB,
        Pos::Adjective => &EXCEPTION_ADJECTIVE,
        Pos::Adverb => &EXCEPTION_ADVERB,
    }
}

/// Describes a caller-defined content type field by field.
#[derive(Clone, Debug, Default)]
pub struct ContentTypeBuilder {
    kind: Option<DataKind>,
    pos: Option<Pos>,
    ordering: Option<&'static dyn LineComparator>,
    encoding: Option<Charset>,
}

impl ContentTypeBuilder {
    pub fn kind(mut self, kind: DataKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn pos(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn ordering(mut self, ordering: &'static dyn LineComparator) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn encoding(mut self, encoding: Charset) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Fails with [`ClassificationError::InvalidClassification`] if no kind
    /// was given.
    pub fn build(self) -> ClassificationResult<ContentType> {
        let kind = self
            .kind
            .ok_or(ClassificationError::InvalidClassification)?;
        Ok(ContentType {
            kind,
            pos: self.pos,
            ordering: self.ordering,
            encoding: self.encoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolvers_are_total_and_injective() {
        type Resolver = fn(Pos) -> &'static ContentType;
        let resolvers: [(DataKind, Resolver); 3] = [
            (DataKind::Index, resolve_index),
            (DataKind::Data, resolve_data),
            (DataKind::Exception, resolve_exception),
        ];
        for (kind, resolve) in resolvers {
            let resolved: HashSet<ContentType> = Pos::ALL.iter().map(|p| *resolve(*p)).collect();
            assert_eq!(resolved.len(), 4, "{kind}");
            for pos in Pos::ALL {
                let ct = resolve(pos);
                assert_eq!(ct.kind(), kind);
                assert_eq!(ct.pos(), Some(pos));
            }
        }
    }

    #[test]
    fn resolve_requires_pos_for_qualified_kinds() {
        assert_eq!(
            ContentType::resolve(DataKind::Index, None),
            Err(ClassificationError::UnsupportedPos(DataKind::Index))
        );
        assert_eq!(
            ContentType::resolve(DataKind::Exception, None),
            Err(ClassificationError::UnsupportedPos(DataKind::Exception))
        );
        assert_eq!(ContentType::resolve(DataKind::Sense, None).unwrap(), &SENSE);
        assert_eq!(
            ContentType::resolve(DataKind::Data, Some(Pos::Verb)).unwrap(),
            &DATA_VERB
        );
    }

    #[test]
    fn identity_ignores_ordering_and_encoding() {
        let custom = ContentType::new(DataKind::Index, Some(Pos::Noun), None)
            .with_encoding(Charset::Latin1);
        assert_eq!(custom, INDEX_NOUN);
        assert!(!custom.is_ordered());
        assert!(INDEX_NOUN.is_ordered());
        assert_ne!(INDEX_NOUN, INDEX_VERB);
    }

    #[test]
    fn builder_requires_kind() {
        let err = ContentType::builder().pos(Pos::Noun).build().unwrap_err();
        assert_eq!(err, ClassificationError::InvalidClassification);

        let ct = ContentType::builder()
            .kind(DataKind::Data)
            .pos(Pos::Adverb)
            .ordering(&DataLineComparator)
            .encoding(Charset::Ascii)
            .build()
            .unwrap();
        assert_eq!(ct, DATA_ADVERB);
        assert_eq!(ct.encoding(), Some(Charset::Ascii));
    }

    #[test]
    fn effective_charset_prefers_override() {
        assert_eq!(INDEX_NOUN.effective_charset(Charset::Latin1), Charset::Latin1);
        let custom = INDEX_NOUN.with_encoding(Charset::Utf8);
        assert_eq!(custom.effective_charset(Charset::Latin1), Charset::Utf8);
    }

    #[test]
    fn display_and_resource_names() {
        assert_eq!(INDEX_NOUN.to_string(), "[ContentType: Index/noun]");
        assert_eq!(SENSE.to_string(), "[ContentType: Sense]");
        assert_eq!(EXCEPTION_ADVERB.resource_name().as_deref(), Some("adv.exc"));
        assert_eq!(SENSE.resource_name().as_deref(), Some("index.sense"));
    }

    #[test]
    fn ordering_rules_match_kind() {
        assert_eq!(INDEX_VERB.ordering().map(|o| o.name()), Some("index"));
        assert_eq!(DATA_NOUN.ordering().map(|o| o.name()), Some("data"));
        assert_eq!(EXCEPTION_NOUN.ordering().map(|o| o.name()), Some("exception"));
        assert_eq!(SENSE.ordering().map(|o| o.name()), Some("sense-key"));
    }
}
