//! Occurrence counting over the lexicon.
//!
//! Each trigger is matched as a case-insensitive whole word (or whole
//! phrase, for multi-word triggers). Substring hits inside larger words do
//! not count: "mad" never matches inside "madrigal". Categories are
//! independent; one span of text may feed several categories at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::{Emotion, Lexicon};

/// Per-category occurrence counts for one analyzed text.
///
/// Holds one entry per registered category (zero when nothing matched) and
/// iterates in registry order, which keeps ranking tie-breaks stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionCounts {
    counts: BTreeMap<Emotion, u32>,
}

impl EmotionCounts {
    /// Returns the match count for a category (zero if absent).
    pub fn get(&self, emotion: Emotion) -> u32 {
        self.counts.get(&emotion).copied().unwrap_or(0)
    }

    /// Sum of all category counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of categories with a nonzero count.
    pub fn active_len(&self) -> usize {
        self.counts.values().filter(|c| **c > 0).count()
    }

    /// Categories with nonzero counts, descending by count, ties in
    /// registry order, truncated to `n`.
    pub fn top(&self, n: usize) -> Vec<Emotion> {
        let mut ranked: Vec<(Emotion, u32)> = self
            .counts
            .iter()
            .filter(|(_, c)| **c > 0)
            .map(|(e, c)| (*e, *c))
            .collect();
        // Stable sort preserves registry order among equal counts.
        ranked.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
        ranked.truncate(n);
        ranked.into_iter().map(|(e, _)| e).collect()
    }

    /// Iterates (category, count) pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        self.counts.iter().map(|(e, c)| (*e, *c))
    }

    pub(crate) fn insert(&mut self, emotion: Emotion, count: u32) {
        self.counts.insert(emotion, count);
    }
}

impl Lexicon {
    /// Counts trigger occurrences per category.
    ///
    /// Deterministic for a given text and registry; empty or non-linguistic
    /// input degrades to all-zero counts, never an error.
    ///
    /// Word boundaries are Unicode-aware: any letter counts as a word
    /// character, so a trigger does not match inside a longer word even
    /// when the surrounding letters are non-ASCII ("mad" never matches
    /// inside "madé").
    pub fn count(&self, text: &str) -> EmotionCounts {
        let mut counts = EmotionCounts::default();

        for entry in &self.entries {
            let mut category_count = 0u32;
            // Prefilter narrows to triggers that occur at least once.
            for index in entry.prefilter.matches(text) {
                category_count += entry.triggers[index].find_iter(text).count() as u32;
            }
            counts.insert(entry.emotion, category_count);
        }

        counts
    }
}
