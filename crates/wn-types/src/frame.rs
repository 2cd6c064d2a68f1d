//! Per-word annotations: adjective position markers and verb frames.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Syntactic position restriction on an adjective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjMarker {
    /// Predicate position only: `(p)`.
    Predicative,
    /// Prenominal (attributive) position only: `(a)`.
    Attributive,
    /// Immediately postnominal position only: `(ip)`.
    Postnominal,
}

impl AdjMarker {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Predicative => "(p)",
            Self::Attributive => "(a)",
            Self::Postnominal => "(ip)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Predicative => "predicate position",
            Self::Attributive => "prenominal (attributive) position",
            Self::Postnominal => "immediately postnominal position",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self, TypeError> {
        match symbol {
            "(p)" | "p" => Ok(Self::Predicative),
            "(a)" | "a" => Ok(Self::Attributive),
            "(ip)" | "ip" => Ok(Self::Postnominal),
            other => Err(TypeError::UnknownAdjMarker(other.to_string())),
        }
    }
}

impl fmt::Display for AdjMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.description())
    }
}

const PLACEHOLDER: &str = "----";

const STANDARD_FRAMES: [&str; 35] = [
    "Something ----s",
    "Somebody ----s",
    "It is ----ing",
    "Something is ----ing PP",
    "Something ----s something Adjective/Noun",
    "Something ----s Adjective/Noun",
    "Somebody ----s Adjective",
    "Somebody ----s something",
    "Somebody ----s somebody",
    "Something ----s somebody",
    "Something ----s something",
    "Something ----s to somebody",
    "Somebody ----s on something",
    "Somebody ----s somebody something",
    "Somebody ----s something to somebody",
    "Somebody ----s something from somebody",
    "Somebody ----s somebody with something",
    "Somebody ----s somebody of something",
    "Somebody ----s something on somebody",
    "Somebody ----s somebody PP",
    "Somebody ----s something PP",
    "Somebody ----s PP",
    "Somebody's (body part) ----s",
    "Somebody ----s somebody to INFINITIVE",
    "Somebody ----s somebody INFINITIVE",
    "Somebody ----s that CLAUSE",
    "Somebody ----s to somebody",
    "Somebody ----s to INFINITIVE",
    "Somebody ----s whether INFINITIVE",
    "Somebody ----s somebody into V-ing something",
    "Somebody ----s something with something",
    "Somebody ----s INFINITIVE",
    "Somebody ----s VERB-ing",
    "It ----s that CLAUSE",
    "Something ----s INFINITIVE",
];

/// A sentence template illustrating how a verb sense is used.
///
/// The template contains a `----` placeholder for the verb.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbFrame {
    pub number: u8,
    pub template: String,
}

impl VerbFrame {
    pub fn new(number: u8, template: impl Into<String>) -> Self {
        Self {
            number,
            template: template.into(),
        }
    }

    /// One of the 35 standard frames, numbered from 1.
    pub fn standard(number: u8) -> Result<Self, TypeError> {
        let index = usize::from(number)
            .checked_sub(1)
            .filter(|i| *i < STANDARD_FRAMES.len())
            .ok_or(TypeError::InvalidVerbFrame(number))?;
        Ok(Self::new(number, STANDARD_FRAMES[index]))
    }

    /// Substitute `lemma` for the placeholder. Underscores in the lemma
    /// become spaces. A template without a placeholder yields an empty
    /// string.
    pub fn instantiate(&self, lemma: &str) -> String {
        if !self.template.contains(PLACEHOLDER) {
            return String::new();
        }
        self.template
            .replacen(PLACEHOLDER, &lemma.replace('_', " "), 1)
    }
}
