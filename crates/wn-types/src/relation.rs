//! The relation (pointer) catalog and the traversal recursion policy.
//!
//! Every edge between words or synsets carries a [`Relation`]. Relations
//! are identified on disk by a short symbol (`@`, `~`, `%p`, ...); the
//! catalog maps each symbol to a display name, the parts of speech it is
//! meaningful for, and its inverse.
//!
//! [`is_transitive_for_traversal`] decides which relations a graph walk may
//! follow recursively. Only hierarchical, part-whole, entailment, and
//! causal relations qualify. Lateral relations (antonymy, similarity,
//! derivation, domains) are surfaced one hop deep and never expanded.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TypeError;
use crate::pos::Pos;

const ALL_POS: &[Pos] = &[Pos::Noun, Pos::Verb, Pos::Adjective, Pos::Adverb];
const NOUN: &[Pos] = &[Pos::Noun];
const VERB: &[Pos] = &[Pos::Verb];
const ADJECTIVE: &[Pos] = &[Pos::Adjective];
const ADVERB: &[Pos] = &[Pos::Adverb];
const NOUN_VERB: &[Pos] = &[Pos::Noun, Pos::Verb];
const NOUN_ADJECTIVE: &[Pos] = &[Pos::Noun, Pos::Adjective];
const VERB_ADJECTIVE: &[Pos] = &[Pos::Verb, Pos::Adjective];

/// Symbols whose edges a traversal may follow recursively.
pub const TRAVERSAL_SYMBOLS: [&str; 10] = ["@", "~", "%p", "#p", "%m", "#m", "%s", "#s", "*", ">"];

/// A typed, symbol-keyed edge label between words or synsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelated,
    TopicDomain,
    TopicMember,
    RegionDomain,
    RegionMember,
    UsageDomain,
    UsageMember,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    Participle,
    Pertainym,
    DerivedFromAdjective,
}

impl Relation {
    /// The full catalog, in declaration order.
    pub const ALL: [Relation; 27] = [
        Self::Antonym,
        Self::Hypernym,
        Self::InstanceHypernym,
        Self::Hyponym,
        Self::InstanceHyponym,
        Self::MemberHolonym,
        Self::SubstanceHolonym,
        Self::PartHolonym,
        Self::MemberMeronym,
        Self::SubstanceMeronym,
        Self::PartMeronym,
        Self::Attribute,
        Self::DerivationallyRelated,
        Self::TopicDomain,
        Self::TopicMember,
        Self::RegionDomain,
        Self::RegionMember,
        Self::UsageDomain,
        Self::UsageMember,
        Self::Entailment,
        Self::Cause,
        Self::AlsoSee,
        Self::VerbGroup,
        Self::SimilarTo,
        Self::Participle,
        Self::Pertainym,
        Self::DerivedFromAdjective,
    ];

    /// The on-disk pointer symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Antonym => "!",
            Self::Hypernym => "@",
            Self::InstanceHypernym => "@i",
            Self::Hyponym => "~",
            Self::InstanceHyponym => "~i",
            Self::MemberHolonym => "#m",
            Self::SubstanceHolonym => "#s",
            Self::PartHolonym => "#p",
            Self::MemberMeronym => "%m",
            Self::SubstanceMeronym => "%s",
            Self::PartMeronym => "%p",
            Self::Attribute => "=",
            Self::DerivationallyRelated => "+",
            Self::TopicDomain => ";c",
            Self::TopicMember => "-c",
            Self::RegionDomain => ";r",
            Self::RegionMember => "-r",
            Self::UsageDomain => ";u",
            Self::UsageMember => "-u",
            Self::Entailment => "*",
            Self::Cause => ">",
            Self::AlsoSee => "^",
            Self::VerbGroup => "$",
            Self::SimilarTo => "&",
            Self::Participle => "<",
            Self::Pertainym | Self::DerivedFromAdjective => "\\",
        }
    }

    /// Human-readable name, used in trace headings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Antonym => "Antonym",
            Self::Hypernym => "Hypernym",
            Self::InstanceHypernym => "Instance Hypernym",
            Self::Hyponym => "Hyponym",
            Self::InstanceHyponym => "Instance Hyponym",
            Self::MemberHolonym => "Member Holonym",
            Self::SubstanceHolonym => "Substance Holonym",
            Self::PartHolonym => "Part Holonym",
            Self::MemberMeronym => "Member Meronym",
            Self::SubstanceMeronym => "Substance Meronym",
            Self::PartMeronym => "Part Meronym",
            Self::Attribute => "Attribute",
            Self::DerivationallyRelated => "Derivationally Related Form",
            Self::TopicDomain => "Domain of Synset - Topic",
            Self::TopicMember => "Member of Domain - Topic",
            Self::RegionDomain => "Domain of Synset - Region",
            Self::RegionMember => "Member of Domain - Region",
            Self::UsageDomain => "Domain of Synset - Usage",
            Self::UsageMember => "Member of Domain - Usage",
            Self::Entailment => "Entailment",
            Self::Cause => "Cause",
            Self::AlsoSee => "Also See",
            Self::VerbGroup => "Verb Group",
            Self::SimilarTo => "Similar To",
            Self::Participle => "Participle",
            Self::Pertainym => "Pertainym",
            Self::DerivedFromAdjective => "Derived from Adjective",
        }
    }

    /// Parts of speech this relation can originate from.
    pub fn pos_constraints(self) -> &'static [Pos] {
        match self {
            Self::Antonym
            | Self::TopicDomain
            | Self::RegionDomain
            | Self::UsageDomain => ALL_POS,
            Self::Hypernym | Self::Hyponym => NOUN_VERB,
            Self::InstanceHypernym
            | Self::InstanceHyponym
            | Self::MemberHolonym
            | Self::SubstanceHolonym
            | Self::PartHolonym
            | Self::MemberMeronym
            | Self::SubstanceMeronym
            | Self::PartMeronym
            | Self::TopicMember
            | Self::RegionMember
            | Self::UsageMember => NOUN,
            Self::Attribute => NOUN_ADJECTIVE,
            Self::DerivationallyRelated => NOUN_VERB,
            Self::Entailment | Self::Cause | Self::VerbGroup => VERB,
            Self::AlsoSee => VERB_ADJECTIVE,
            Self::SimilarTo | Self::Participle | Self::Pertainym => ADJECTIVE,
            Self::DerivedFromAdjective => ADVERB,
        }
    }

    /// Returns `true` if the relation is meaningful for `pos`.
    pub fn applies_to(self, pos: Pos) -> bool {
        self.pos_constraints().contains(&pos)
    }

    /// The relation pointing back along the same edge, if one is defined.
    pub fn inverse(self) -> Option<Relation> {
        match self {
            Self::Hypernym => Some(Self::Hyponym),
            Self::Hyponym => Some(Self::Hypernym),
            Self::InstanceHypernym => Some(Self::InstanceHyponym),
            Self::InstanceHyponym => Some(Self::InstanceHypernym),
            Self::MemberHolonym => Some(Self::MemberMeronym),
            Self::MemberMeronym => Some(Self::MemberHolonym),
            Self::SubstanceHolonym => Some(Self::SubstanceMeronym),
            Self::SubstanceMeronym => Some(Self::SubstanceHolonym),
            Self::PartHolonym => Some(Self::PartMeronym),
            Self::PartMeronym => Some(Self::PartHolonym),
            Self::TopicDomain => Some(Self::TopicMember),
            Self::TopicMember => Some(Self::TopicDomain),
            Self::RegionDomain => Some(Self::RegionMember),
            Self::RegionMember => Some(Self::RegionDomain),
            Self::UsageDomain => Some(Self::UsageMember),
            Self::UsageMember => Some(Self::UsageDomain),
            Self::Antonym
            | Self::Attribute
            | Self::DerivationallyRelated
            | Self::AlsoSee
            | Self::VerbGroup
            | Self::SimilarTo => Some(self),
            Self::Entailment
            | Self::Cause
            | Self::Participle
            | Self::Pertainym
            | Self::DerivedFromAdjective => None,
        }
    }

    /// Whether a traversal may recurse through edges of this relation.
    pub fn is_transitive_for_traversal(self) -> bool {
        is_transitive_for_traversal(self.symbol())
    }

    /// Look up a relation by symbol.
    ///
    /// `\` is shared by pertainyms (adjectives) and derived-from-adjective
    /// (adverbs); `pos` disambiguates, defaulting to pertainym.
    pub fn from_symbol(symbol: &str, pos: Option<Pos>) -> Result<Self, TypeError> {
        if symbol == "\\" {
            return Ok(match pos {
                Some(Pos::Adverb) => Self::DerivedFromAdjective,
                _ => Self::Pertainym,
            });
        }
        Self::ALL
            .into_iter()
            .find(|r| r.symbol() == symbol)
            .ok_or_else(|| TypeError::UnknownRelation(symbol.to_string()))
    }

    /// Returns `true` if `symbol` names a relation in the catalog.
    pub fn is_known_symbol(symbol: &str) -> bool {
        Self::ALL.iter().any(|r| r.symbol() == symbol)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snake = self.name().to_lowercase().replace(" - ", "_").replace(' ', "_");
        write!(f, "{snake}")
    }
}

/// Returns `true` exactly for the hierarchical, part-whole, entailment and
/// cause symbols.
///
/// Unrecognised symbols are non-recursive. They are reported with a warning
/// since they usually mean the resource carries relation kinds newer than
/// this catalog.
pub fn is_transitive_for_traversal(symbol: &str) -> bool {
    match symbol {
        "@" | "~" | "%p" | "#p" | "%m" | "#m" | "%s" | "#s" | "*" | ">" => true,
        _ => {
            if !Relation::is_known_symbol(symbol) {
                warn!(symbol, "unrecognised relation symbol treated as non-recursive");
            }
            false
        }
    }
}
