//! Journal entry records.

use chrono::{DateTime, NaiveDate, Utc};
use sentiscope_core::{Analysis, Analyzer};
use serde::{Deserialize, Serialize};

/// One persisted journal entry: the engine's analysis merged with the
/// caller-supplied metadata (timestamp, word count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// When the entry was written.
    pub timestamp: DateTime<Utc>,
    /// Whitespace-separated word count of the raw text.
    pub word_count: u32,
    /// The engine's analysis of the entry text.
    pub analysis: Analysis,
}

impl EntryRecord {
    /// Analyzes `text` and packages the result as a record.
    pub fn capture(analyzer: &Analyzer, text: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            word_count: text.split_whitespace().count() as u32,
            analysis: analyzer.analyze(text),
        }
    }

    /// The calendar day this entry belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
