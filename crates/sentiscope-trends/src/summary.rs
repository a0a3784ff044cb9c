//! Weekly summaries over journal entries.
//!
//! Aggregates the trailing seven days of entries into counts, averages,
//! and a fixed set of narrative insight and recommendation strings. Like
//! the per-entry engine, this is a deterministic rule table: each guard is
//! independent and output order is table order.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveTime, Utc};
use sentiscope_core::{Emotion, EmotionalState, Sentiment};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::EntryRecord;

/// How many entries of each sentiment fell in the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }
}

/// Aggregated view of the trailing week of journaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Entries that fell inside the window.
    pub total_entries: usize,
    /// Mean word count per entry, rounded.
    pub average_words: u32,
    /// Up to three most frequent top emotions across entries.
    pub top_emotions: Vec<Emotion>,
    /// Per-sentiment entry counts.
    pub breakdown: SentimentBreakdown,
    /// Mean emotional diversity per entry, rounded.
    pub average_diversity: u32,
    /// The most frequent emotional state across entries.
    pub most_common_state: EmotionalState,
    /// Narrative observations, in rule-table order.
    pub insights: Vec<String>,
    /// Actionable recommendations, in rule-table order.
    pub recommendations: Vec<String>,
}

impl WeeklySummary {
    /// Builds a summary of the entries written after the start of the day
    /// seven days before `now`. Returns `None` when the window is empty.
    pub fn build(entries: &[EntryRecord], now: DateTime<Utc>) -> Option<WeeklySummary> {
        let week_ago = (now - chrono::Duration::days(7))
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();

        let weekly: Vec<&EntryRecord> = entries
            .iter()
            .filter(|e| e.timestamp > week_ago)
            .collect();
        if weekly.is_empty() {
            return None;
        }

        let total_entries = weekly.len();

        let mut breakdown = SentimentBreakdown::default();
        let mut emotion_frequency: BTreeMap<Emotion, usize> = BTreeMap::new();
        let mut state_frequency: Vec<(EmotionalState, usize)> = Vec::new();
        let mut total_words = 0u64;
        let mut total_diversity = 0usize;

        for entry in &weekly {
            breakdown.record(entry.analysis.sentiment);
            for emotion in &entry.analysis.top_emotions {
                *emotion_frequency.entry(*emotion).or_insert(0) += 1;
            }
            let state = entry.analysis.complexity.state;
            match state_frequency.iter_mut().find(|(s, _)| *s == state) {
                Some((_, n)) => *n += 1,
                None => state_frequency.push((state, 1)),
            }
            total_words += u64::from(entry.word_count);
            total_diversity += entry.analysis.complexity.diversity;
        }

        let average_words = (total_words as f64 / total_entries as f64).round() as u32;
        let average_diversity = (total_diversity as f64 / total_entries as f64).round() as u32;

        // Ties resolve to the state seen earliest in entry order, so only
        // a strictly greater count displaces the current leader.
        let mut most_common_state = EmotionalState::Neutral;
        let mut leader_count = 0;
        for (state, count) in &state_frequency {
            if *count > leader_count {
                leader_count = *count;
                most_common_state = *state;
            }
        }

        let mut ranked: Vec<(Emotion, usize)> =
            emotion_frequency.into_iter().collect();
        ranked.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
        ranked.truncate(3);
        let top_emotions: Vec<Emotion> = ranked.into_iter().map(|(e, _)| e).collect();

        let insights = build_insights(
            &breakdown,
            average_diversity,
            most_common_state,
            total_entries,
            &top_emotions,
            average_words,
        );
        let recommendations = build_recommendations(
            &breakdown,
            total_entries,
            average_words,
            average_diversity,
            most_common_state,
        );

        debug!(
            total_entries,
            average_words, average_diversity, "built weekly summary"
        );

        Some(WeeklySummary {
            total_entries,
            average_words,
            top_emotions,
            breakdown,
            average_diversity,
            most_common_state,
            insights,
            recommendations,
        })
    }
}

fn build_insights(
    breakdown: &SentimentBreakdown,
    average_diversity: u32,
    most_common_state: EmotionalState,
    total_entries: usize,
    top_emotions: &[Emotion],
    average_words: u32,
) -> Vec<String> {
    let mut insights = Vec::new();

    if breakdown.positive > breakdown.negative {
        insights.push(
            "You've been experiencing more positive emotions this week. Keep up the great energy!"
                .to_string(),
        );
    } else if breakdown.negative > breakdown.positive {
        insights.push(
            "This week has been challenging emotionally. Remember that difficult times are temporary and you're doing great."
                .to_string(),
        );
    } else {
        insights.push(
            "Your emotional state has been balanced this week, showing good emotional regulation."
                .to_string(),
        );
    }

    if average_diversity > 5 {
        insights.push(format!(
            "High emotional diversity ({average_diversity} emotions on average) suggests you're experiencing a rich range of feelings."
        ));
    } else if average_diversity < 3 {
        insights.push(
            "Lower emotional diversity suggests you're experiencing more focused emotional states."
                .to_string(),
        );
    }

    if most_common_state != EmotionalState::Neutral {
        insights.push(format!(
            "Your most common emotional state this week was \"{most_common_state}\", indicating a consistent emotional pattern."
        ));
    }

    if total_entries >= 5 {
        insights.push("Excellent consistency! You've journaled almost every day this week.".to_string());
    } else if total_entries >= 3 {
        insights.push("Good progress! You're building a healthy journaling habit.".to_string());
    } else {
        insights.push(
            "Consider journaling more frequently to better track your emotional journey.".to_string(),
        );
    }

    if !top_emotions.is_empty() {
        let joined: Vec<&str> = top_emotions.iter().map(|e| e.as_str()).collect();
        insights.push(format!(
            "Your most frequent emotions this week were: {}.",
            joined.join(", ")
        ));
    }

    if average_words > 100 {
        insights.push(
            "You're writing detailed entries, which shows great self-reflection depth.".to_string(),
        );
    } else if average_words > 50 {
        insights.push(
            "Your entries show good reflection. Consider writing a bit more to dive deeper."
                .to_string(),
        );
    }

    insights
}

fn build_recommendations(
    breakdown: &SentimentBreakdown,
    total_entries: usize,
    average_words: u32,
    average_diversity: u32,
    most_common_state: EmotionalState,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if breakdown.negative > 2 {
        recommendations
            .push("Consider practicing gratitude exercises or mindfulness techniques.".to_string());
    }

    if total_entries < 3 {
        recommendations
            .push("Try setting a daily reminder to journal at a consistent time.".to_string());
    }

    if average_words < 50 {
        recommendations.push(
            "Challenge yourself to write a bit more each day to enhance self-reflection."
                .to_string(),
        );
    }

    if average_diversity < 3 {
        recommendations.push(
            "Try to acknowledge and explore different emotions to build emotional awareness."
                .to_string(),
        );
    }

    if most_common_state == EmotionalState::Overwhelmed {
        recommendations.push(
            "Consider stress management techniques like deep breathing or taking breaks."
                .to_string(),
        );
    }

    recommendations
}
