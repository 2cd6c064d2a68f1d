//! Bounded depth-first walk of the sense and synset relation graph.
//!
//! For each part of speech the lemma has an index entry for, every sense
//! is expanded into its sense-level details and its owning synset. The
//! owning synset's relation graph is then walked:
//!
//! - At depth 1 every relation of the root synset is announced and each of
//!   its targets emitted.
//! - Below that a branch only follows the relation that started it, and
//!   only if that relation is transitive for traversal. A hypernym chain
//!   never turns into a meronym chain.
//!
//! The relation whitelist keeps well-formed data acyclic. Malformed data
//! is bounded by [`WalkConfig::max_depth`] and, when enabled, by
//! per-branch cycle detection.

use tracing::{debug, warn};

use wn_content::resolve_index;
use wn_store::LexicalStore;
use wn_types::{Pos, Relation, Synset, SynsetId, WordId};

use crate::config::{MissingSenseEntry, WalkConfig};
use crate::error::{WalkError, WalkResult};
use crate::trace::{Trace, TraceLine};

/// A pending visit on a recursive branch.
#[derive(Clone, Copy, Debug)]
struct Frame {
    id: SynsetId,
    depth: usize,
}

/// Walks lemmas and synsets through a [`LexicalStore`].
pub struct Walker<'a, S: LexicalStore + ?Sized> {
    store: &'a S,
    config: WalkConfig,
}

impl<'a, S: LexicalStore + ?Sized> Walker<'a, S> {
    pub fn new(store: &'a S, config: WalkConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walk every sense of `lemma`, in part-of-speech order.
    ///
    /// A part of speech without an index entry contributes nothing.
    pub fn walk(&self, lemma: &str) -> WalkResult<Trace> {
        let mut trace = Trace::new();
        for pos in Pos::ALL {
            let Some(entry) = self.store.index_entry(lemma, pos, resolve_index(pos))? else {
                debug!(lemma, %pos, "no index entry");
                continue;
            };
            debug!(lemma, %pos, senses = entry.word_ids.len(), "walking index entry");
            trace.push(TraceLine::PosHeader(pos));
            for relation in &entry.relations {
                trace.push(TraceLine::IndexRelation(*relation));
            }
            for word_id in &entry.word_ids {
                match self.walk_sense(lemma, word_id)? {
                    Some(sense) => trace.extend(sense),
                    None => trace.skipped_senses += 1,
                }
            }
        }
        Ok(trace)
    }

    /// Walk the relation graph rooted at `root`.
    ///
    /// The root itself is not emitted; the trace starts with its first
    /// relation heading.
    pub fn walk_synset(&self, root: &Synset) -> WalkResult<Trace> {
        let mut trace = Trace::new();
        for related in &root.related {
            trace.push(TraceLine::RelationHeading {
                depth: 1,
                relation: related.relation,
            });
            for target in &related.targets {
                self.walk_branch(root.id, *target, related.relation, &mut trace)?;
            }
        }
        Ok(trace)
    }

    /// Expand one sense. `Ok(None)` means the sense was skipped.
    fn walk_sense(&self, lemma: &str, word_id: &WordId) -> WalkResult<Option<Trace>> {
        let word = self
            .store
            .word(word_id)?
            .ok_or_else(|| WalkError::DanglingWord(word_id.clone()))?;

        let mut trace = Trace::new();
        trace.push(TraceLine::Sense {
            word_id: word.id.clone(),
            lemma: word.lemma.clone(),
            lex_id: word.lex_id,
            sense_key: word.sense_key.clone(),
        });
        for related in &word.related {
            for target in &related.targets {
                let other = self
                    .store
                    .word(target)?
                    .ok_or_else(|| WalkError::DanglingWord(target.clone()))?;
                trace.push(TraceLine::RelatedWord {
                    relation: related.relation,
                    synset: other.synset(),
                    lemma: other.lemma,
                });
            }
        }
        if let Some(marker) = word.adj_marker {
            trace.push(TraceLine::Marker(marker));
        }
        for frame in &word.verb_frames {
            trace.push(TraceLine::VerbFrame {
                template: frame.template.clone(),
                instance: frame.instantiate(lemma),
            });
        }

        let Some(entry) = self.store.sense_entry(&word.sense_key)? else {
            return match self.config.on_missing_sense_entry {
                MissingSenseEntry::Abort => Err(WalkError::InconsistentStore {
                    sense_key: word.sense_key.clone(),
                    offset: word.synset().offset(),
                    pos: word.pos(),
                }),
                MissingSenseEntry::Skip => {
                    warn!(sense_key = %word.sense_key, "no sense entry, skipping sense");
                    Ok(None)
                }
            };
        };
        trace.push(TraceLine::SenseEntry {
            sense_number: entry.sense_number,
            tag_count: entry.tag_count,
        });

        let synset = self.fetch_synset(&word_id.synset)?;
        trace.push(TraceLine::Synset {
            members: members(&synset),
            gloss: synset.gloss.clone(),
        });
        trace.extend(self.walk_synset(&synset)?);
        Ok(Some(trace))
    }

    /// Depth-first walk from `start` following only `relation`.
    fn walk_branch(
        &self,
        root: SynsetId,
        start: SynsetId,
        relation: Relation,
        trace: &mut Trace,
    ) -> WalkResult<()> {
        let recurse = relation.is_transitive_for_traversal();
        // path[d] is the synset visited at depth d on the current branch.
        let mut path = vec![root];
        let mut stack = vec![Frame {
            id: start,
            depth: 1,
        }];

        while let Some(Frame { id, depth }) = stack.pop() {
            let synset = self.fetch_synset(&id)?;
            debug!(synset = %id, %relation, depth, "visit");
            trace.push(TraceLine::RelatedSynset {
                depth,
                relation,
                synset: id,
                members: members(&synset),
                gloss: synset.gloss.clone(),
            });
            if !recurse {
                continue;
            }
            let targets = synset.related_synsets(relation);
            if targets.is_empty() {
                continue;
            }

            path.truncate(depth);
            if self.config.detect_cycles && path.contains(&id) {
                warn!(synset = %id, %relation, depth, "cycle cut");
                trace.cycles_cut += 1;
                continue;
            }
            if self.config.max_depth.is_some_and(|max| depth >= max) {
                warn!(synset = %id, %relation, depth, "depth limit reached, branch truncated");
                trace.truncated_branches += 1;
                continue;
            }
            path.push(id);
            for target in targets.iter().rev() {
                stack.push(Frame {
                    id: *target,
                    depth: depth + 1,
                });
            }
        }
        Ok(())
    }

    fn fetch_synset(&self, id: &SynsetId) -> WalkResult<Synset> {
        self.store
            .synset(id)?
            .ok_or(WalkError::DanglingSynset(*id))
    }
}

fn members(synset: &Synset) -> Vec<String> {
    synset.members().map(str::to_string).collect()
}

impl<S: LexicalStore + ?Sized> std::fmt::Debug for Walker<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
