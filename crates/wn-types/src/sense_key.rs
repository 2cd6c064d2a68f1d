//! Sense keys: the stable, release-independent name of a word sense.
//!
//! Canonical form: `lemma%ss_type:lex_filenum:lex_id:head_word:head_id`,
//! e.g. `dog%1:05:00::` or `galore%5:00:00:abundant:00`. Head word and head
//! id are only present for adjective satellites (synset type 5).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::pos::Pos;

const SATELLITE: u8 = 5;

/// The head adjective cluster a satellite sense belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadWord {
    pub lemma: String,
    pub lex_id: u8,
}

/// Serialized in its canonical string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SenseKey {
    lemma: String,
    synset_type: u8,
    lex_file: u8,
    lex_id: u8,
    head: Option<HeadWord>,
}

impl SenseKey {
    /// Build a sense key. The lemma is stored lower-cased.
    pub fn new(
        lemma: impl Into<String>,
        synset_type: u8,
        lex_file: u8,
        lex_id: u8,
    ) -> Result<Self, TypeError> {
        let lemma = lemma.into().to_lowercase();
        if lemma.is_empty() {
            return Err(invalid(&lemma, "empty lemma"));
        }
        Pos::from_number(synset_type).map_err(|_| {
            invalid(&lemma, &format!("synset type {synset_type} out of range"))
        })?;
        if lex_id > 99 || lex_file > 99 {
            return Err(invalid(&lemma, "lexical file and lexical id must fit two digits"));
        }
        Ok(Self {
            lemma,
            synset_type,
            lex_file,
            lex_id,
            head: None,
        })
    }

    /// Attach the head word of an adjective satellite.
    pub fn with_head(mut self, lemma: impl Into<String>, lex_id: u8) -> Self {
        self.head = Some(HeadWord {
            lemma: lemma.into().to_lowercase(),
            lex_id,
        });
        self
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> Pos {
        // Validated on construction.
        Pos::from_number(self.synset_type).unwrap_or(Pos::Adjective)
    }

    pub fn synset_type(&self) -> u8 {
        self.synset_type
    }

    pub fn lex_file(&self) -> u8 {
        self.lex_file
    }

    pub fn lex_id(&self) -> u8 {
        self.lex_id
    }

    pub fn head(&self) -> Option<&HeadWord> {
        self.head.as_ref()
    }

    pub fn is_adjective_satellite(&self) -> bool {
        self.synset_type == SATELLITE
    }
}

fn invalid(key: &str, reason: &str) -> TypeError {
    TypeError::InvalidSenseKey {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for SenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%{}:{:02}:{:02}:",
            self.lemma, self.synset_type, self.lex_file, self.lex_id
        )?;
        match &self.head {
            Some(head) => write!(f, "{}:{:02}", head.lemma, head.lex_id),
            None => write!(f, ":"),
        }
    }
}

impl FromStr for SenseKey {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lemma, rest) = s
            .rsplit_once('%')
            .ok_or_else(|| invalid(s, "missing '%' separator"))?;
        let fields: Vec<&str> = rest.split(':').collect();
        if fields.len() != 5 {
            return Err(invalid(s, "expected five ':'-separated fields"));
        }
        let number = |field: &str, what: &str| -> Result<u8, TypeError> {
            field
                .parse::<u8>()
                .map_err(|_| invalid(s, &format!("bad {what}: {field:?}")))
        };
        let key = SenseKey::new(
            lemma,
            number(fields[0], "synset type")?,
            number(fields[1], "lexical file")?,
            number(fields[2], "lexical id")?,
        )
        .map_err(|_| invalid(s, "field out of range"))?;

        match (fields[3], fields[4]) {
            ("", "") => Ok(key),
            (head, id) if !head.is_empty() => Ok(key.with_head(head, number(id, "head id")?)),
            _ => Err(invalid(s, "head id without head word")),
        }
    }
}

impl TryFrom<String> for SenseKey {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SenseKey> for String {
    fn from(key: SenseKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_head() {
        let key = SenseKey::new("Dog", 1, 5, 0).unwrap();
        assert_eq!(key.to_string(), "dog%1:05:00::");
        assert_eq!(key.pos(), Pos::Noun);
        assert!(!key.is_adjective_satellite());
    }

    #[test]
    fn display_with_head() {
        let key = SenseKey::new("galore", 5, 0, 0)
            .unwrap()
            .with_head("abundant", 0);
        assert_eq!(key.to_string(), "galore%5:00:00:abundant:00");
        assert_eq!(key.pos(), Pos::Adjective);
        assert!(key.is_adjective_satellite());
    }

    #[test]
    fn parse_roundtrips_canonical_forms() {
        for text in ["dog%1:05:00::", "galore%5:00:00:abundant:00", "spread%2:35:01::"] {
            let key: SenseKey = text.parse().unwrap();
            assert_eq!(key.to_string(), text);
        }
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert!("dog".parse::<SenseKey>().is_err());
        assert!("dog%1:05:00".parse::<SenseKey>().is_err());
        assert!("dog%9:05:00::".parse::<SenseKey>().is_err());
        assert!("dog%1:05:00::03".parse::<SenseKey>().is_err());
        assert!("%1:05:00::".parse::<SenseKey>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        let key = SenseKey::new("dog", 1, 5, 0).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"dog%1:05:00::\"");
        let back: SenseKey = serde_json::from_str("\"dog%1:05:00::\"").unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<SenseKey>("\"dog\"").is_err());
    }

    #[test]
    fn lemma_may_contain_percent() {
        let key: SenseKey = "100%_pure%3:00:00::".parse().unwrap();
        assert_eq!(key.lemma(), "100%_pure");
    }
}
