use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use wn_content::{
    resolve_data, resolve_exception, resolve_index, Charset, ContentType, ContentTypeRegistry,
    DataKind, SENSE,
};
use wn_types::{
    normalize_lemma, ExceptionEntry, IndexEntry, Pos, SenseEntry, SenseKey, Synset, SynsetId,
    Word, WordId,
};

use crate::error::{StoreError, StoreResult};
use crate::snapshot::LexiconSnapshot;
use crate::traits::LexicalStore;

/// A record that occupies one line of a sorted resource.
trait Keyed {
    /// The leading key field of the record's line.
    fn line_key(&self) -> String;
}

impl Keyed for IndexEntry {
    fn line_key(&self) -> String {
        self.lemma.clone()
    }
}

impl Keyed for Synset {
    fn line_key(&self) -> String {
        self.id.offset_key()
    }
}

impl Keyed for SenseEntry {
    fn line_key(&self) -> String {
        self.sense_key.to_string()
    }
}

impl Keyed for ExceptionEntry {
    fn line_key(&self) -> String {
        self.surface_form.clone()
    }
}

/// Records of one content type, kept in the content type's line order.
#[derive(Clone, Debug)]
struct Table<T> {
    content_type: ContentType,
    rows: Vec<T>,
}

impl<T: Keyed> Table<T> {
    fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            rows: Vec::new(),
        }
    }

    fn position(&self, key: &str) -> Result<usize, usize> {
        match self.content_type.ordering() {
            Some(ordering) => self
                .rows
                .binary_search_by(|row| ordering.compare(&row.line_key(), key)),
            None => self
                .rows
                .iter()
                .position(|row| row.line_key() == key)
                .ok_or(self.rows.len()),
        }
    }

    /// Insert in order, replacing a record with the same key.
    fn insert(&mut self, row: T) {
        match self.position(&row.line_key()) {
            Ok(index) => self.rows[index] = row,
            Err(index) => self.rows.insert(index, row),
        }
    }

    fn find(&self, key: &str) -> Option<&T> {
        self.position(key).ok().map(|index| &self.rows[index])
    }
}

#[derive(Debug)]
struct Tables {
    index: HashMap<ContentType, Table<IndexEntry>>,
    data: HashMap<ContentType, Table<Synset>>,
    exceptions: HashMap<ContentType, Table<ExceptionEntry>>,
    senses: Table<SenseEntry>,
}

impl Tables {
    fn from_registry(registry: &ContentTypeRegistry) -> Self {
        // Caller-registered types win over the built-ins with the same identity.
        let pick = |builtin: &ContentType| {
            registry
                .get(builtin.kind(), builtin.pos())
                .copied()
                .unwrap_or(*builtin)
        };
        let mut tables = Self {
            index: HashMap::new(),
            data: HashMap::new(),
            exceptions: HashMap::new(),
            senses: Table::new(pick(&SENSE)),
        };
        for builtin in ContentTypeRegistry::builtin().iter() {
            let content_type = pick(builtin);
            match content_type.kind() {
                DataKind::Index => {
                    tables.index.insert(content_type, Table::new(content_type));
                }
                DataKind::Data => {
                    tables.data.insert(content_type, Table::new(content_type));
                }
                DataKind::Exception => {
                    tables
                        .exceptions
                        .insert(content_type, Table::new(content_type));
                }
                DataKind::Sense => {}
            }
        }
        tables
    }

    fn len(&self) -> usize {
        self.index.values().map(|t| t.rows.len()).sum::<usize>()
            + self.data.values().map(|t| t.rows.len()).sum::<usize>()
            + self.exceptions.values().map(|t| t.rows.len()).sum::<usize>()
            + self.senses.rows.len()
    }
}

/// In-memory lexical store.
///
/// Intended for tests, embedding, and serving snapshots. Each resource is a
/// table kept sorted by its content type's ordering rule and
/// binary-searched on lookup; a content type without an ordering rule is
/// scanned linearly. Records are cloned on read and write.
pub struct InMemoryLexicalStore {
    tables: RwLock<Tables>,
    charset: Charset,
}

impl InMemoryLexicalStore {
    /// Create an empty store classified by the built-in content types.
    pub fn new() -> Self {
        Self::with_registry(ContentTypeRegistry::builtin())
    }

    /// Create an empty store whose tables use the content types in
    /// `registry`, falling back to the built-ins for any it lacks.
    pub fn with_registry(registry: &ContentTypeRegistry) -> Self {
        Self {
            tables: RwLock::new(Tables::from_registry(registry)),
            charset: Charset::default(),
        }
    }

    /// Set the charset used for content types without an override.
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Build a store holding every record in `snapshot`.
    pub fn from_snapshot(snapshot: LexiconSnapshot) -> Self {
        let store = Self::new();
        store.load(snapshot);
        store
    }

    /// Insert every record in `snapshot`.
    pub fn load(&self, snapshot: LexiconSnapshot) {
        let LexiconSnapshot {
            index,
            synsets,
            senses,
            exceptions,
        } = snapshot;
        debug!(
            index = index.len(),
            synsets = synsets.len(),
            senses = senses.len(),
            exceptions = exceptions.len(),
            "loading snapshot"
        );
        for entry in index {
            self.insert_index_entry(entry);
        }
        for synset in synsets {
            self.insert_synset(synset);
        }
        for entry in senses {
            self.insert_sense_entry(entry);
        }
        for entry in exceptions {
            self.insert_exception(entry);
        }
    }

    /// Copy every record out, in each table's line order.
    pub fn snapshot(&self) -> LexiconSnapshot {
        let tables = self.tables.read().expect("lock poisoned");
        let mut snapshot = LexiconSnapshot::default();
        for pos in Pos::ALL {
            if let Some(table) = tables.index.get(resolve_index(pos)) {
                snapshot.index.extend(table.rows.iter().cloned());
            }
            if let Some(table) = tables.data.get(resolve_data(pos)) {
                snapshot.synsets.extend(table.rows.iter().cloned());
            }
            if let Some(table) = tables.exceptions.get(resolve_exception(pos)) {
                snapshot.exceptions.extend(table.rows.iter().cloned());
            }
        }
        snapshot.senses.extend(tables.senses.rows.iter().cloned());
        snapshot
    }

    /// Insert or replace an index entry. Its lemma is normalized.
    pub fn insert_index_entry(&self, mut entry: IndexEntry) {
        entry.lemma = normalize_lemma(&entry.lemma);
        let mut tables = self.tables.write().expect("lock poisoned");
        if let Some(table) = tables.index.get_mut(resolve_index(entry.pos)) {
            table.insert(entry);
        }
    }

    /// Insert or replace a synset.
    pub fn insert_synset(&self, synset: Synset) {
        let mut tables = self.tables.write().expect("lock poisoned");
        if let Some(table) = tables.data.get_mut(resolve_data(synset.pos())) {
            table.insert(synset);
        }
    }

    /// Insert or replace a sense entry.
    pub fn insert_sense_entry(&self, entry: SenseEntry) {
        let mut tables = self.tables.write().expect("lock poisoned");
        tables.senses.insert(entry);
    }

    /// Insert or replace an exception entry. Its surface form is normalized.
    pub fn insert_exception(&self, mut entry: ExceptionEntry) {
        entry.surface_form = normalize_lemma(&entry.surface_form);
        let mut tables = self.tables.write().expect("lock poisoned");
        if let Some(table) = tables.exceptions.get_mut(resolve_exception(entry.pos)) {
            table.insert(entry);
        }
    }

    /// Total number of records across all tables.
    pub fn len(&self) -> usize {
        self.tables.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of synsets stored for `pos`.
    pub fn synset_count(&self, pos: Pos) -> usize {
        let tables = self.tables.read().expect("lock poisoned");
        tables
            .data
            .get(resolve_data(pos))
            .map(|t| t.rows.len())
            .unwrap_or(0)
    }
}

impl Default for InMemoryLexicalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalStore for InMemoryLexicalStore {
    fn index_entry(
        &self,
        lemma: &str,
        pos: Pos,
        content_type: &ContentType,
    ) -> StoreResult<Option<IndexEntry>> {
        if content_type.kind() != DataKind::Index || content_type.pos() != Some(pos) {
            return Err(StoreError::ContentTypeMismatch {
                expected: format!("Index/{pos}"),
                actual: *content_type,
            });
        }
        let key = normalize_lemma(lemma);
        let tables = self.tables.read().expect("lock poisoned");
        let table = tables
            .index
            .get(content_type)
            .ok_or(StoreError::MissingResource(*content_type))?;
        let found = table.find(&key).cloned();
        debug!(lemma = %key, %pos, found = found.is_some(), "index lookup");
        Ok(found)
    }

    fn word(&self, id: &WordId) -> StoreResult<Option<Word>> {
        Ok(self
            .synset(&id.synset)?
            .and_then(|synset| synset.word(&id.member).cloned()))
    }

    fn synset(&self, id: &SynsetId) -> StoreResult<Option<Synset>> {
        let content_type = resolve_data(id.pos());
        let tables = self.tables.read().expect("lock poisoned");
        let table = tables
            .data
            .get(content_type)
            .ok_or(StoreError::MissingResource(*content_type))?;
        Ok(table.find(&id.offset_key()).cloned())
    }

    fn sense_entry(&self, key: &SenseKey) -> StoreResult<Option<SenseEntry>> {
        let tables = self.tables.read().expect("lock poisoned");
        Ok(tables.senses.find(&key.to_string()).cloned())
    }

    fn exception_entry(
        &self,
        surface_form: &str,
        pos: Pos,
    ) -> StoreResult<Option<ExceptionEntry>> {
        let content_type = resolve_exception(pos);
        let tables = self.tables.read().expect("lock poisoned");
        let table = tables
            .exceptions
            .get(content_type)
            .ok_or(StoreError::MissingResource(*content_type))?;
        Ok(table.find(&normalize_lemma(surface_form)).cloned())
    }

    fn default_charset(&self) -> Charset {
        self.charset
    }
}

impl std::fmt::Debug for InMemoryLexicalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLexicalStore")
            .field("record_count", &self.len())
            .field("charset", &self.charset)
            .finish()
    }
}
