//! Text rendering of a [`Trace`].
//!
//! The format is line oriented and stable; golden-output tests compare it
//! byte for byte:
//!
//! ```text
//!
//! ================================================================================
//! ■ pos = NOUN
//! has relation = hypernym
//! --------------------------------------------------------------------------------
//! ● sense = WID-02084071-N-01-dog lexid=0 sensekey=dog%1:05:00::
//!   sensenum = 1 tagcnt=42
//! ● synset = {dog domestic_dog} a member of the genus Canis
//! 	🡆 Hypernym
//! 	{canine canid} any of various fissiped mammals
//! 		{carnivore} a terrestrial or aquatic flesh-eating mammal
//! ```
//!
//! Relation-graph lines are prefixed with one indent unit per depth level.

use std::fmt::Write;

use wn_store::LexicalStore;
use wn_types::WordMember;

use crate::config::WalkConfig;
use crate::error::WalkResult;
use crate::trace::{Trace, TraceLine};
use crate::walker::Walker;

const POS_RULE: &str =
    "================================================================================";
const SENSE_RULE: &str =
    "--------------------------------------------------------------------------------";

/// `{a b c} ` followed by the gloss.
pub fn synset_text(members: &[String], gloss: &str) -> String {
    format!("{{{}}} {gloss}", members.join(" "))
}

/// Render one line (or, for headers, several lines) without a trailing newline.
pub fn render_line(line: &TraceLine, indent: &str) -> String {
    match line {
        TraceLine::PosHeader(pos) => format!("\n{POS_RULE}\n■ pos = {}", pos.upper_name()),
        TraceLine::IndexRelation(relation) => format!("has relation = {relation}"),
        TraceLine::Sense {
            word_id,
            lemma,
            lex_id,
            sense_key,
        } => {
            let id = match &word_id.member {
                WordMember::Number(_) => format!("{word_id}-{lemma}"),
                WordMember::Lemma(_) => word_id.to_string(),
            };
            format!("{SENSE_RULE}\n● sense = {id} lexid={lex_id} sensekey={sense_key}")
        }
        TraceLine::RelatedWord {
            relation,
            lemma,
            synset,
        } => format!("  related {relation} = {lemma} synset={synset}"),
        TraceLine::Marker(marker) => format!("  marker = {marker}"),
        TraceLine::VerbFrame { template, instance } => {
            format!("  verbframe = {template} : {instance}")
        }
        TraceLine::SenseEntry {
            sense_number,
            tag_count,
        } => format!("  sensenum = {sense_number} tagcnt={tag_count}"),
        TraceLine::Synset { members, gloss } => {
            format!("● synset = {}", synset_text(members, gloss))
        }
        TraceLine::RelationHeading { depth, relation } => {
            format!("{}🡆 {}", indent.repeat(*depth), relation.name())
        }
        TraceLine::RelatedSynset {
            depth,
            members,
            gloss,
            ..
        } => format!("{}{}", indent.repeat(*depth), synset_text(members, gloss)),
    }
}

/// Render a whole trace, one newline-terminated line per event.
pub fn render(trace: &Trace, indent: &str) -> String {
    let mut out = String::new();
    for line in &trace.lines {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", render_line(line, indent));
    }
    out
}

/// Walk `lemma` through `store` and render the result.
pub fn render_traversal<S: LexicalStore + ?Sized>(
    store: &S,
    lemma: &str,
    config: &WalkConfig,
) -> WalkResult<String> {
    let trace = Walker::new(store, config.clone()).walk(lemma)?;
    Ok(render(&trace, &config.indent))
}
