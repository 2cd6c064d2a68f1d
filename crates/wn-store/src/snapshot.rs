use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use wn_types::{ExceptionEntry, IndexEntry, SenseEntry, Synset};

use crate::error::{StoreError, StoreResult};

/// A serialized lexicon: every record a store serves.
///
/// Snapshots are read as JSON (human-editable fixtures) or bincode
/// (compact, produced by [`LexiconSnapshot::to_bytes`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconSnapshot {
    #[serde(default)]
    pub index: Vec<IndexEntry>,
    #[serde(default)]
    pub synsets: Vec<Synset>,
    #[serde(default)]
    pub senses: Vec<SenseEntry>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionEntry>,
}

impl LexiconSnapshot {
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        serde_json::from_str(json).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    pub fn to_json_string(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Serialize to bincode bytes.
    pub fn to_bytes(&self) -> StoreResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Deserialize from bincode bytes.
    pub fn from_bytes(data: &[u8]) -> StoreResult<Self> {
        bincode::deserialize(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Read a snapshot file. Files ending in `.json` are parsed as JSON,
    /// anything else as bincode.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let snapshot = if is_json {
            let text = std::str::from_utf8(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            Self::from_json_str(text)?
        } else {
            Self::from_bytes(&bytes)?
        };
        debug!(path = %path.display(), records = snapshot.len(), "snapshot loaded");
        Ok(snapshot)
    }

    /// Write the snapshot, choosing the format by extension as [`load`](Self::load) does.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let bytes = if is_json {
            self.to_json_string()?.into_bytes()
        } else {
            self.to_bytes()?
        };
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.index.len() + self.synsets.len() + self.senses.len() + self.exceptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
