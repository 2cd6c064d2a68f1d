use wn_content::{resolve_index, Charset, ContentType};
use wn_types::{
    ExceptionEntry, IndexEntry, Pos, SenseEntry, SenseKey, Synset, SynsetId, Word, WordId,
};

use crate::error::StoreResult;

/// Keyed, read-only access to a lexical database.
///
/// All implementations must satisfy these invariants:
/// - Records are immutable once served; repeated lookups of the same key
///   return equal records.
/// - Absence is `Ok(None)`. `Err` is reserved for I/O failure, corrupt
///   data, or a misclassified lookup.
/// - Concurrent reads are always safe.
pub trait LexicalStore: Send + Sync {
    /// Look up the index entry for `lemma` under `pos`, classified by
    /// `content_type` (normally [`resolve_index`]`(pos)`).
    fn index_entry(
        &self,
        lemma: &str,
        pos: Pos,
        content_type: &ContentType,
    ) -> StoreResult<Option<IndexEntry>>;

    /// Fetch a word by identifier.
    fn word(&self, id: &WordId) -> StoreResult<Option<Word>>;

    /// Fetch a synset by identifier.
    fn synset(&self, id: &SynsetId) -> StoreResult<Option<Synset>>;

    /// Fetch the sense-number / tag-count record for a sense key.
    fn sense_entry(&self, key: &SenseKey) -> StoreResult<Option<SenseEntry>>;

    /// Fetch the exception entry for an irregular surface form.
    fn exception_entry(&self, surface_form: &str, pos: Pos)
        -> StoreResult<Option<ExceptionEntry>>;

    /// Charset used for content types that carry no override.
    fn default_charset(&self) -> Charset {
        Charset::Utf8
    }

    /// Index lookup classified with the built-in index content type.
    fn index_entry_for(&self, lemma: &str, pos: Pos) -> StoreResult<Option<IndexEntry>> {
        self.index_entry(lemma, pos, resolve_index(pos))
    }

    /// Fetch multiple synsets.
    ///
    /// Default implementation calls `synset()` for each ID. Backends may
    /// override for fewer round-trips.
    fn synsets(&self, ids: &[SynsetId]) -> StoreResult<Vec<Option<Synset>>> {
        ids.iter().map(|id| self.synset(id)).collect()
    }
}
