//! SentiScope Trends - aggregation over analyzed journal entries.
//!
//! Builds on [`sentiscope_core`]'s per-entry analysis to answer questions
//! that span entries: how did the last week go ([`WeeklySummary`]), how
//! has mood moved over the last month ([`MoodSeries`]), and what should
//! today's writing prompt be ([`daily_prompt`]).
//!
//! Everything here is deterministic and in-memory. Callers own their
//! entry storage and hand slices of [`EntryRecord`] to the builders.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use sentiscope_core::Analyzer;
//! use sentiscope_trends::{EntryRecord, WeeklySummary};
//!
//! let analyzer = Analyzer::with_defaults();
//! let now = Utc::now();
//! let entries = vec![EntryRecord::capture(&analyzer, "Grateful for a calm day.", now)];
//!
//! let summary = WeeklySummary::build(&entries, now).unwrap();
//! assert_eq!(summary.total_entries, 1);
//! ```

mod entry;
mod prompt;
mod series;
mod summary;

pub use entry::EntryRecord;
pub use prompt::{daily_prompt, DAILY_PROMPTS};
pub use series::{MoodPoint, MoodSeries, SERIES_DAYS};
pub use summary::{SentimentBreakdown, WeeklySummary};
