use std::fmt;

use serde::{Deserialize, Serialize};

use wn_types::Pos;

/// The family of on-disk resource a content type describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataKind {
    /// Lemma index lines (`index.noun`, ...).
    Index,
    /// Synset records (`data.noun`, ...).
    Data,
    /// Morphological exception lists (`noun.exc`, ...).
    Exception,
    /// Sense key records (`index.sense`). Not qualified by part of speech.
    Sense,
}

impl DataKind {
    pub const ALL: [DataKind; 4] = [Self::Index, Self::Data, Self::Exception, Self::Sense];

    /// Returns `true` if resources of this kind exist once per part of speech.
    pub fn requires_pos(self) -> bool {
        !matches!(self, Self::Sense)
    }

    /// Conventional resource name for this kind and part of speech.
    ///
    /// Returns `None` for a POS-qualified kind given no part of speech.
    pub fn resource_name(self, pos: Option<Pos>) -> Option<String> {
        match (self, pos) {
            (Self::Sense, _) => Some("index.sense".to_string()),
            (Self::Index, Some(pos)) => Some(format!("index.{}", pos_stem(pos))),
            (Self::Data, Some(pos)) => Some(format!("data.{}", pos_stem(pos))),
            (Self::Exception, Some(pos)) => Some(format!("{}.exc", pos_stem(pos))),
            (_, None) => None,
        }
    }
}

fn pos_stem(pos: Pos) -> &'static str {
    match pos {
        Pos::Noun => "noun",
        Pos::Verb => "verb",
        Pos::Adjective => "adj",
        Pos::Adverb => "adv",
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => write!(f, "Index"),
            Self::Data => write!(f, "Data"),
            Self::Exception => write!(f, "Exception"),
            Self::Sense => write!(f, "Sense"),
        }
    }
}
