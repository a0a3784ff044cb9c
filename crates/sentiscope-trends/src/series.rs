//! 30-day mood series.
//!
//! Collapses entries into one point per calendar day over a fixed 30-day
//! window anchored at the earliest entry. Sentiment categories map onto
//! a numeric axis (positive 1, neutral 0, negative -1) and each day's
//! value is the mean over that day's entries, rounded to two decimals.

use chrono::NaiveDate;
use sentiscope_core::Sentiment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::EntryRecord;

/// Days covered by a series.
pub const SERIES_DAYS: usize = 30;

/// Coarse mood label thresholds on the numeric axis.
const LABEL_POSITIVE: f64 = 0.3;
const LABEL_NEGATIVE: f64 = -0.3;

fn sentiment_value(sentiment: Sentiment) -> f64 {
    match sentiment {
        Sentiment::Positive => 1.0,
        Sentiment::Neutral => 0.0,
        Sentiment::Negative => -1.0,
    }
}

/// One day on the mood axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodPoint {
    pub date: NaiveDate,
    /// Mean daily sentiment value, `None` on days without entries.
    pub average: Option<f64>,
    pub entry_count: usize,
}

impl MoodPoint {
    /// Coarse label for the day, `None` on days without entries.
    ///
    /// Averages above 0.3 read positive, below -0.3 negative; the band
    /// between is neutral.
    pub fn label(&self) -> Option<Sentiment> {
        self.average.map(|avg| {
            if avg > LABEL_POSITIVE {
                Sentiment::Positive
            } else if avg < LABEL_NEGATIVE {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            }
        })
    }
}

/// A fixed 30-day window of daily mood points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSeries {
    pub points: Vec<MoodPoint>,
}

impl MoodSeries {
    /// Builds the series anchored at the earliest entry's calendar day.
    /// Returns `None` when there are no entries.
    pub fn build(entries: &[EntryRecord]) -> Option<MoodSeries> {
        let start = entries.iter().map(EntryRecord::date).min()?;

        let points: Vec<MoodPoint> = (0..SERIES_DAYS as i64)
            .map(|offset| {
                let date = start + chrono::Duration::days(offset);
                let values: Vec<f64> = entries
                    .iter()
                    .filter(|e| e.date() == date)
                    .map(|e| sentiment_value(e.analysis.sentiment))
                    .collect();
                let average = if values.is_empty() {
                    None
                } else {
                    let mean = values.iter().sum::<f64>() / values.len() as f64;
                    Some((mean * 100.0).round() / 100.0)
                };
                MoodPoint {
                    date,
                    average,
                    entry_count: values.len(),
                }
            })
            .collect();

        debug!(start = %start, entries = entries.len(), "built mood series");

        Some(MoodSeries { points })
    }

    /// First day of the window.
    pub fn start(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Last day of the window.
    pub fn end(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}
