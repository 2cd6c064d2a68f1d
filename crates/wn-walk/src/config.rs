use serde::{Deserialize, Serialize};

use crate::error::{WalkError, WalkResult};

/// What the walker does when a sense has no sense-entry record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSenseEntry {
    /// Fail the walk with [`WalkError::InconsistentStore`].
    #[default]
    Abort,
    /// Drop the sense from the trace, log it, and continue.
    Skip,
}

/// Configuration for a graph walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Deepest level a recursive branch may reach. `None` is unbounded.
    pub max_depth: Option<usize>,
    /// When `true`, a synset already on the current branch is emitted but
    /// not expanded again.
    pub detect_cycles: bool,
    /// Policy for senses without a sense-entry record.
    pub on_missing_sense_entry: MissingSenseEntry,
    /// Indent unit, repeated once per depth level when rendering.
    pub indent: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(64),
            detect_cycles: false,
            on_missing_sense_entry: MissingSenseEntry::Abort,
            indent: "\t".to_string(),
        }
    }
}

impl WalkConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(text: &str) -> WalkResult<Self> {
        toml::from_str(text).map_err(|e| WalkError::Config(e.to_string()))
    }

    /// A configuration with no depth limit, matching the plain recursive walk.
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            ..Default::default()
        }
    }
}
