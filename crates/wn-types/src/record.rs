//! Records served by a lexical store.
//!
//! These are immutable value types. The traversal core consumes them but
//! never constructs them; stores (and tests) build them.

use serde::{Deserialize, Serialize};

use crate::frame::{AdjMarker, VerbFrame};
use crate::id::{SynsetId, WordId, WordMember};
use crate::pos::Pos;
use crate::relation::Relation;
use crate::sense_key::SenseKey;

/// Normalize a lemma the way index resources store it: trimmed,
/// lower-cased, with internal whitespace runs replaced by `_`.
pub fn normalize_lemma(lemma: &str) -> String {
    lemma
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// One relation and its ordered synset targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSynsets {
    pub relation: Relation,
    pub targets: Vec<SynsetId>,
}

/// One lexical relation and its ordered word targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedWords {
    pub relation: Relation,
    pub targets: Vec<WordId>,
}

/// An index entry: every sense of one lemma for one part of speech.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub lemma: String,
    pub pos: Pos,
    /// Relation kinds present on at least one sense of the lemma.
    pub relations: Vec<Relation>,
    /// Number of senses ranked by tagged frequency.
    #[serde(default)]
    pub tagged_sense_count: u32,
    /// Senses of the lemma, most frequent first.
    pub word_ids: Vec<WordId>,
}

impl IndexEntry {
    pub fn new(lemma: &str, pos: Pos) -> Self {
        Self {
            lemma: normalize_lemma(lemma),
            pos,
            relations: Vec::new(),
            tagged_sense_count: 0,
            word_ids: Vec::new(),
        }
    }

    pub fn with_relations(mut self, relations: impl IntoIterator<Item = Relation>) -> Self {
        self.relations.extend(relations);
        self
    }

    /// Add a sense pointing at `synset`, located by this entry's lemma.
    pub fn with_sense(mut self, synset: SynsetId) -> Self {
        self.word_ids.push(WordId::by_lemma(synset, self.lemma.clone()));
        self
    }
}

/// A word: one lemma's membership in one synset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub lemma: String,
    pub lex_id: u8,
    pub sense_key: SenseKey,
    #[serde(default)]
    pub adj_marker: Option<AdjMarker>,
    #[serde(default)]
    pub verb_frames: Vec<VerbFrame>,
    #[serde(default)]
    pub related: Vec<RelatedWords>,
}

impl Word {
    pub fn synset(&self) -> SynsetId {
        self.id.synset
    }

    pub fn pos(&self) -> Pos {
        self.id.pos()
    }

    /// Returns `true` if `member` locates this word.
    ///
    /// Lemma locators compare normalized, so `Young` and `young` match.
    pub fn matches(&self, member: &WordMember, number: u8) -> bool {
        match member {
            WordMember::Number(n) => *n == number,
            WordMember::Lemma(lemma) => normalize_lemma(lemma) == normalize_lemma(&self.lemma),
        }
    }
}

/// A synset: a set of synonymous words with a gloss and outgoing relations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    pub id: SynsetId,
    #[serde(default)]
    pub lex_file: u8,
    pub words: Vec<Word>,
    pub gloss: String,
    #[serde(default)]
    pub related: Vec<RelatedSynsets>,
}

impl Synset {
    pub fn offset(&self) -> u32 {
        self.id.offset()
    }

    pub fn pos(&self) -> Pos {
        self.id.pos()
    }

    /// Member lemmas in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.lemma.as_str())
    }

    /// Targets of `relation`, or an empty slice if the synset has none.
    pub fn related_synsets(&self, relation: Relation) -> &[SynsetId] {
        self.related
            .iter()
            .find(|r| r.relation == relation)
            .map(|r| r.targets.as_slice())
            .unwrap_or(&[])
    }

    /// Locate a member word. Member numbers are 1-based.
    pub fn word(&self, member: &WordMember) -> Option<&Word> {
        self.words
            .iter()
            .enumerate()
            .find(|(i, w)| w.matches(member, (*i + 1) as u8))
            .map(|(_, w)| w)
    }
}

/// Tag-count and sense-number record for a sense key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseEntry {
    pub sense_key: SenseKey,
    pub offset: u32,
    pub sense_number: u32,
    pub tag_count: u32,
}

impl SenseEntry {
    pub fn pos(&self) -> Pos {
        self.sense_key.pos()
    }
}

/// An inflected surface form and the base forms it reduces to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub surface_form: String,
    pub pos: Pos,
    pub root_forms: Vec<String>,
}
