//! Structured traversal output.
//!
//! A [`Trace`] is the ordered sequence of display events a walk produced,
//! plus counters for the branches the walker declined to follow. Rendering
//! a trace to text is a pure function of its lines (see
//! [`render`](crate::render)).

use serde::{Deserialize, Serialize};

use wn_types::{AdjMarker, Pos, Relation, SenseKey, SynsetId, WordId};

/// One display event, in walk order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceLine {
    /// Start of the section for one part of speech.
    PosHeader(Pos),
    /// A relation present on some sense of the lemma.
    IndexRelation(Relation),
    /// Start of one sense of the lemma.
    Sense {
        word_id: WordId,
        lemma: String,
        lex_id: u8,
        sense_key: SenseKey,
    },
    /// A lexical relation from the sense to another word.
    RelatedWord {
        relation: Relation,
        lemma: String,
        synset: SynsetId,
    },
    Marker(AdjMarker),
    /// A verb frame template and its instantiation with the walked lemma.
    VerbFrame { template: String, instance: String },
    SenseEntry { sense_number: u32, tag_count: u32 },
    /// The synset owning the sense.
    Synset { members: Vec<String>, gloss: String },
    /// A relation of the root synset, announced before its targets.
    RelationHeading { depth: usize, relation: Relation },
    /// A synset reached through `relation` at `depth`.
    RelatedSynset {
        depth: usize,
        relation: Relation,
        synset: SynsetId,
        members: Vec<String>,
        gloss: String,
    },
}

impl TraceLine {
    /// Depth of a relation-graph line; zero for sense-level lines.
    pub fn depth(&self) -> usize {
        match self {
            TraceLine::RelationHeading { depth, .. } | TraceLine::RelatedSynset { depth, .. } => {
                *depth
            }
            _ => 0,
        }
    }
}

/// The result of walking one lemma or one synset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub lines: Vec<TraceLine>,
    /// Branches cut because they would exceed the depth limit.
    pub truncated_branches: usize,
    /// Synsets not expanded because they already lie on their branch.
    pub cycles_cut: usize,
    /// Senses dropped for lack of a sense-entry record.
    pub skipped_senses: usize,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: TraceLine) {
        self.lines.push(line);
    }

    /// Append `other`'s lines and add its counters.
    pub fn extend(&mut self, other: Trace) {
        self.lines.extend(other.lines);
        self.truncated_branches += other.truncated_branches;
        self.cycles_cut += other.cycles_cut;
        self.skipped_senses += other.skipped_senses;
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Parts of speech with a section in this trace, in walk order.
    pub fn parts_of_speech(&self) -> Vec<Pos> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                TraceLine::PosHeader(pos) => Some(*pos),
                _ => None,
            })
            .collect()
    }

    /// Deepest relation-graph level reached.
    pub fn max_depth(&self) -> usize {
        self.lines.iter().map(TraceLine::depth).max().unwrap_or(0)
    }

    /// Returns `true` if the walk followed every branch it found.
    pub fn is_complete(&self) -> bool {
        self.truncated_branches == 0 && self.cycles_cut == 0 && self.skipped_senses == 0
    }
}
