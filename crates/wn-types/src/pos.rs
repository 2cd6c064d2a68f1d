use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Part of speech of a lemma, word, or synset.
///
/// Adjective satellites (tag `s`) are folded into [`Pos::Adjective`]; the
/// satellite distinction only survives in [`SenseKey`](crate::SenseKey)
/// synset types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    /// All parts of speech, in canonical iteration order.
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];

    /// Single-character tag used in data and index lines.
    pub fn tag(self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::Adverb => 'r',
        }
    }

    /// Numeric synset type (1-4).
    pub fn number(self) -> u8 {
        match self {
            Self::Noun => 1,
            Self::Verb => 2,
            Self::Adjective => 3,
            Self::Adverb => 4,
        }
    }

    /// Parse a tag character. Accepts `s` (adjective satellite) as adjective.
    pub fn from_tag(tag: char) -> Result<Self, TypeError> {
        match tag.to_ascii_lowercase() {
            'n' => Ok(Self::Noun),
            'v' => Ok(Self::Verb),
            'a' | 's' => Ok(Self::Adjective),
            'r' => Ok(Self::Adverb),
            other => Err(TypeError::InvalidPos(other.to_string())),
        }
    }

    /// Parse a numeric synset type. Accepts 5 (adjective satellite).
    pub fn from_number(number: u8) -> Result<Self, TypeError> {
        match number {
            1 => Ok(Self::Noun),
            2 => Ok(Self::Verb),
            3 | 5 => Ok(Self::Adjective),
            4 => Ok(Self::Adverb),
            other => Err(TypeError::InvalidPos(other.to_string())),
        }
    }

    /// Upper-case name, used in trace section headers.
    pub fn upper_name(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Adjective => "ADJECTIVE",
            Self::Adverb => "ADVERB",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noun => write!(f, "noun"),
            Self::Verb => write!(f, "verb"),
            Self::Adjective => write!(f, "adjective"),
            Self::Adverb => write!(f, "adverb"),
        }
    }
}

impl FromStr for Pos {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "adjective" | "adj" => Ok(Self::Adjective),
            "adverb" | "adv" => Ok(Self::Adverb),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(tag), None) => Self::from_tag(tag),
                    _ => Err(TypeError::InvalidPos(s.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        assert_eq!(
            Pos::ALL,
            [Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb]
        );
    }

    #[test]
    fn tag_roundtrip() {
        for pos in Pos::ALL {
            assert_eq!(Pos::from_tag(pos.tag()).unwrap(), pos);
            assert_eq!(Pos::from_number(pos.number()).unwrap(), pos);
        }
    }

    #[test]
    fn satellite_maps_to_adjective() {
        assert_eq!(Pos::from_tag('s').unwrap(), Pos::Adjective);
        assert_eq!(Pos::from_number(5).unwrap(), Pos::Adjective);
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!(Pos::from_tag('x').is_err());
        assert!(Pos::from_number(0).is_err());
        assert!(Pos::from_number(6).is_err());
    }

    #[test]
    fn parse_names_and_tags() {
        assert_eq!("noun".parse::<Pos>().unwrap(), Pos::Noun);
        assert_eq!("ADV".parse::<Pos>().unwrap(), Pos::Adverb);
        assert_eq!("v".parse::<Pos>().unwrap(), Pos::Verb);
        assert!("nounish".parse::<Pos>().is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(Pos::Adjective.to_string(), "adjective");
        assert_eq!(Pos::Adjective.upper_name(), "ADJECTIVE");
    }
}
