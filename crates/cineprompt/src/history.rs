//! Bounded, replayable history of generation results.

use chrono::{DateTime, Utc};
use cineprompt_core::SceneConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of entries the ledger retains.
pub const HISTORY_CAP: usize = 10;

/// One recorded generation: the scene snapshot and the text it produced.
///
/// Created exactly once per successful generation and never mutated; the
/// only way an entry leaves the ledger is eviction past [`HISTORY_CAP`].
///
/// # Examples
///
/// ```
/// use cineprompt::{HistoryLedger, SceneConfig};
///
/// let mut ledger = HistoryLedger::new();
/// let config = SceneConfig::builder().subject("a fox").build().unwrap();
/// let entry = ledger.record(config, "A fox leaps...");
/// assert_eq!(entry.prompt(), "A fox leaps...");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct HistoryEntry {
    /// Opaque identifier, unique within the session
    id: String,
    /// When the entry was recorded
    timestamp: DateTime<Utc>,
    /// The scene configuration snapshot used
    config: SceneConfig,
    /// The generated prompt text
    prompt: String,
}

/// Ordered collection of past generations, most recent first.
///
/// The ledger has a single mutation path: [`record`] prepends a fresh
/// entry and truncates to [`HISTORY_CAP`]. Entries are never edited,
/// reordered, or removed individually. Refinement output is never
/// recorded — a refine pass transforms a displayed draft rather than
/// producing a new archival result.
///
/// [`record`]: HistoryLedger::record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation result, evicting the oldest entry past the cap.
    ///
    /// Assigns a fresh identifier and the current timestamp, prepends the
    /// entry, and returns a reference to it.
    pub fn record(&mut self, config: SceneConfig, prompt: impl Into<String>) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            config,
            prompt: prompt.into(),
        };
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
        &self.entries[0]
    }

    /// All entries, most recent first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Look up an entry's stored configuration and text for replay.
    ///
    /// Pure lookup: the entry is neither removed nor reordered.
    pub fn select(&self, id: &str) -> Option<(&SceneConfig, &str)> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| (&entry.config, entry.prompt.as_str()))
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
