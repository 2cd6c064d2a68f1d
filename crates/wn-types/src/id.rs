use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::pos::Pos;

const MAX_OFFSET: u32 = 99_999_999;

/// Identifier of a synset: its byte offset in the data resource for `pos`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SynsetId {
    offset: u32,
    pos: Pos,
}

impl SynsetId {
    /// Create a synset identifier. Offsets are at most eight decimal digits.
    pub fn new(offset: u32, pos: Pos) -> Result<Self, TypeError> {
        if offset > MAX_OFFSET {
            return Err(TypeError::OffsetOutOfRange(offset));
        }
        Ok(Self { offset, pos })
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Zero-padded eight digit offset, as it appears at the start of a data line.
    pub fn offset_key(&self) -> String {
        format!("{:08}", self.offset)
    }
}

impl fmt::Debug for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SynsetId({self})")
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SID-{:08}-{}",
            self.offset,
            self.pos.tag().to_ascii_uppercase()
        )
    }
}

/// How a word is located inside its synset.
///
/// Index entries only know the lemma; data lines and sense entries know
/// the 1-based member number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordMember {
    Number(u8),
    Lemma(String),
}

/// Identifier of a word (a lemma within a synset).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordId {
    pub synset: SynsetId,
    pub member: WordMember,
}

impl WordId {
    pub fn by_number(synset: SynsetId, number: u8) -> Self {
        Self {
            synset,
            member: WordMember::Number(number),
        }
    }

    pub fn by_lemma(synset: SynsetId, lemma: impl Into<String>) -> Self {
        Self {
            synset,
            member: WordMember::Lemma(lemma.into()),
        }
    }

    pub fn pos(&self) -> Pos {
        self.synset.pos()
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.synset.pos().tag().to_ascii_uppercase();
        match &self.member {
            WordMember::Number(n) => write!(f, "WID-{:08}-{tag}-{n:02}", self.synset.offset()),
            WordMember::Lemma(lemma) => {
                write!(f, "WID-{:08}-{tag}-??-{lemma}", self.synset.offset())
            }
        }
    }
}
