//! Versioned high score list.
//!
//! ## Format
//!
//! ```json
//! {"version":1,"entries":[{"id":"1700000000000-42","score":3,"timestamp":"2024-01-01T12:00:00Z"}]}
//! ```
//!
//! Older hosts stored the bare `entries` array; that is still accepted on
//! load. Entries that fail to parse are dropped with a warning rather than
//! failing the whole list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::core::config::EngineConfig;
use crate::core::error::EngineResult;
use crate::core::rng::GameRng;

/// Key hosts store the list under.
pub const STORAGE_KEY: &str = "killTheRoyals:highScores";

/// Format version written by [`ScoreBook::to_json`].
pub const SCORE_BOOK_VERSION: u32 = 1;

const LONG_DATE: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// One recorded win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub id: String,
    pub score: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl HighScoreEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, score: u32, timestamp: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            score,
            timestamp,
        }
    }

    /// `<unix millis>-<random>`, unique enough for a local list.
    #[must_use]
    pub fn generate_id(timestamp: OffsetDateTime, rng: &mut GameRng) -> String {
        let millis = timestamp.unix_timestamp_nanos() / 1_000_000;
        format!("{millis}-{}", rng.next_u32())
    }
}

#[derive(Serialize, Deserialize)]
struct VersionedRecord {
    version: u32,
    entries: Vec<Value>,
}

/// High scores, best first, at most `max_entries` long.
///
/// Ordered by score descending; equal scores keep the earlier win first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBook {
    entries: Vec<HighScoreEntry>,
    max_entries: usize,
}

impl ScoreBook {
    /// Empty book sized from the engine config.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_max_entries(config.max_high_scores)
    }

    #[must_use]
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Load a stored list, versioned or legacy.
    ///
    /// Fails only if `json` is not JSON at all. A well-formed value of the
    /// wrong shape loads as an empty book.
    pub fn from_json(json: &str, max_entries: usize) -> EngineResult<Self> {
        let value: Value = serde_json::from_str(json)?;

        let raw_entries = match value {
            Value::Array(entries) => {
                debug!(count = entries.len(), "loading legacy score list");
                entries
            }
            Value::Object(_) => match serde_json::from_value::<VersionedRecord>(value) {
                Ok(record) => {
                    if record.version != SCORE_BOOK_VERSION {
                        warn!(version = record.version, "unexpected score list version");
                    }
                    record.entries
                }
                Err(error) => {
                    warn!(%error, "score record has no entries list");
                    Vec::new()
                }
            },
            other => {
                warn!(kind = ?other, "score record is neither a list nor a record");
                Vec::new()
            }
        };

        let mut book = Self::with_max_entries(max_entries);
        for raw in raw_entries {
            match serde_json::from_value::<HighScoreEntry>(raw) {
                Ok(entry) => book.entries.push(entry),
                Err(error) => warn!(%error, "dropping unreadable score entry"),
            }
        }
        book.sort_and_trim();
        Ok(book)
    }

    /// Write the versioned format.
    pub fn to_json(&self) -> EngineResult<String> {
        let record = VersionedRecord {
            version: SCORE_BOOK_VERSION,
            entries: self
                .entries
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()?,
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Add a win. Returns whether it made the list.
    pub fn record(&mut self, score: u32, timestamp: OffsetDateTime, id: impl Into<String>) -> bool {
        let entry = HighScoreEntry::new(id, score, timestamp);
        let id = entry.id.clone();
        self.entries.push(entry);
        self.sort_and_trim();
        self.entries.iter().any(|e| e.id == id)
    }

    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort_and_trim(&mut self) {
        // Stable, so entries with equal score and time keep insertion order.
        self.entries
            .sort_by(|a, b| b.score.cmp(&a.score).then(a.timestamp.cmp(&b.timestamp)));
        self.entries.truncate(self.max_entries);
    }
}

/// Human date for a score: "Today", "Yesterday", "N days ago", or a short
/// calendar date for anything a week or older.
#[must_use]
pub fn format_score_date(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    match (now - timestamp).whole_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=6 => format!("{days} days ago"),
        _ => timestamp
            .format(LONG_DATE)
            .unwrap_or_else(|_| timestamp.date().to_string()),
    }
}
