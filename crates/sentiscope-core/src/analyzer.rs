//! The analysis entry point.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complexity::{classify, Complexity};
use crate::insight::generate;
use crate::lexicon::{Emotion, Lexicon};
use crate::matcher::EmotionCounts;
use crate::score::{score, Sentiment};

/// The complete emotional-analysis record for one text.
///
/// A value object: created once per call, immutable, owned by the caller.
/// Two calls on identical text produce identical records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Overall sentiment category.
    pub sentiment: Sentiment,
    /// Continuous mood score in [0, 1].
    pub sentiment_score: f64,
    /// Up to five categories with nonzero counts, descending by count.
    pub top_emotions: Vec<Emotion>,
    /// Full per-category match counts.
    pub emotion_counts: EmotionCounts,
    /// Secondary descriptive metrics.
    pub complexity: Complexity,
    /// Generated observations, in rule-table order.
    pub insights: Vec<String>,
    /// Generated suggestions, in rule-table order.
    pub suggestions: Vec<String>,
    /// Sum of all category match counts.
    pub total_emotion_words: u32,
}

/// Lexicon-based multi-factor emotion analyzer.
///
/// Pure and synchronous: no I/O, no shared mutable state. The registry is
/// read-only after construction, so one analyzer can serve any number of
/// concurrent callers without locking.
pub struct Analyzer {
    lexicon: Lexicon,
}

impl Analyzer {
    /// Creates an analyzer over a custom registry.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Creates an analyzer over the built-in registry.
    pub fn with_defaults() -> Self {
        Self::new(Lexicon::default())
    }

    /// Returns the registry this analyzer matches against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyzes free-form text into an [`Analysis`] record.
    ///
    /// Never fails: empty or non-linguistic input produces a well-formed
    /// neutral record with zero counts.
    pub fn analyze(&self, text: &str) -> Analysis {
        let start = Instant::now();

        let counts = self.lexicon.count(text);
        let mood = score(&counts, text.chars().count(), &self.lexicon);
        let complexity = classify(&counts, mood.sentiment);
        let report = generate(&counts, &complexity, mood.sentiment);

        debug!(
            total_emotion_words = counts.total(),
            sentiment = mood.sentiment.name(),
            score = mood.value,
            duration_us = start.elapsed().as_micros() as u64,
            "analyzed journal text"
        );

        Analysis {
            sentiment: mood.sentiment,
            sentiment_score: mood.value,
            top_emotions: counts.top(5),
            total_emotion_words: counts.total(),
            emotion_counts: counts,
            complexity,
            insights: report.insights,
            suggestions: report.suggestions,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::{EmotionalState, IntensityTier};

    fn analyzer() -> Analyzer {
        Analyzer::with_defaults()
    }

    #[test]
    fn empty_text_produces_neutral_record() {
        let analysis = analyzer().analyze("");
        assert_eq!(analysis.total_emotion_words, 0);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.complexity.primary_emotion, None);
        assert!(analysis.top_emotions.is_empty());
    }

    #[test]
    fn analysis_is_idempotent() {
        let a = analyzer();
        let text = "I'm stressed about the deadline but grateful for my team. \
                    Really grateful, even when I'm this stressed.";
        assert_eq!(a.analyze(text), a.analyze(text));
    }

    #[test]
    fn score_is_clamped_for_arbitrary_input() {
        let a = analyzer();
        for text in ["", "happy", "@@##!!", "sad ".repeat(100).as_str()] {
            let analysis = a.analyze(text);
            assert!((0.0..=1.0).contains(&analysis.sentiment_score));
        }
    }

    #[test]
    fn sentiment_matches_score_thresholds() {
        let a = analyzer();
        for text in [
            "happy happy happy",
            "a long plain sentence about nothing in particular",
            "I am so mad about this madrigal concert",
        ] {
            let analysis = a.analyze(text);
            let expected = if analysis.sentiment_score > 0.65 {
                Sentiment::Positive
            } else if analysis.sentiment_score < 0.35 {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            };
            assert_eq!(analysis.sentiment, expected);
        }
    }

    #[test]
    fn diversity_invariant_holds() {
        let analysis = analyzer().analyze("sad but hopeful and a little nervous");
        let nonzero = analysis
            .emotion_counts
            .iter()
            .filter(|(_, c)| *c > 0)
            .count();
        assert_eq!(analysis.complexity.diversity, nonzero);
    }

    #[test]
    fn primary_emotion_is_first_of_top_emotions() {
        let analysis = analyzer().analyze("grateful grateful grateful and a bit worried");
        assert_eq!(
            analysis.complexity.primary_emotion,
            analysis.top_emotions.first().copied()
        );
    }

    #[test]
    fn triple_happy_end_to_end() {
        let analysis = analyzer().analyze("happy happy happy");
        assert_eq!(analysis.emotion_counts.get(Emotion::Joy), 3);
        assert_eq!(analysis.total_emotion_words, 3);
        assert_eq!(analysis.complexity.diversity, 1);
        assert_eq!(analysis.complexity.intensity, IntensityTier::Low);
        assert_eq!(analysis.complexity.primary_emotion, Some(Emotion::Joy));
        assert_eq!(analysis.sentiment, Sentiment::Positive);
    }

    #[test]
    fn overwhelmed_state_end_to_end() {
        let analysis = analyzer()
            .analyze("So much anxiety lately, the anxiety is constant and the stress never stops, stress everywhere.");
        assert!(analysis.emotion_counts.get(Emotion::Anxiety) > 1);
        assert!(analysis.emotion_counts.get(Emotion::Stress) > 1);
        assert_eq!(analysis.complexity.state, EmotionalState::Overwhelmed);
    }

    #[test]
    fn analysis_round_trips_through_json() {
        let analysis = analyzer().analyze("thrilled about the project but a bit nervous");
        let json = serde_json::to_string(&analysis).unwrap();
        let back: Analysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }

    #[test]
    fn analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
    }
}
