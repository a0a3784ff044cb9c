//! Multi-factor mood scoring.
//!
//! Four weighted factors combine into a single continuous score in [0, 1]:
//!
//! - **Emotion ratio (40%)**: weighted positive vs. negative partition sums
//! - **Intensity balance (30%)**: the registry-wide maximum weight
//! - **Diversity (20%)**: number of distinct active categories
//! - **Contextual (10%)**: emotion-word density in the text
//!
//! The score then classifies into a sentiment category: above 0.65 is
//! positive, below 0.35 is negative, everything between is neutral.

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, Polarity};
use crate::matcher::EmotionCounts;

/// Overall sentiment classification of one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Returns a human-readable name for this sentiment.
    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Score above which a text classifies as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.65;
/// Score below which a text classifies as negative.
pub const NEGATIVE_THRESHOLD: f64 = 0.35;

/// The continuous mood score and the factors that produced it.
///
/// `value` is always clamped to [0, 1]; 0 is most negative, 1 most
/// positive, 0.5 the neutral midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodScore {
    /// Sentiment category derived from `value`.
    pub sentiment: Sentiment,
    /// Combined score in [0, 1].
    pub value: f64,
    /// Weighted positive/negative balance factor (40% of the score).
    pub emotion_ratio: f64,
    /// Registry-wide maximum intensity weight (30% of the score).
    pub intensity_balance: f64,
    /// Active-category diversity factor (20% of the score).
    pub diversity_factor: f64,
    /// Emotion-density factor (10% of the score).
    pub contextual: f64,
}

/// Aggregates per-category counts into a mood score.
///
/// `text_chars` is the analyzed text's length in characters; it feeds the
/// density factor only.
pub fn score(counts: &EmotionCounts, text_chars: usize, lexicon: &Lexicon) -> MoodScore {
    let mut weighted_positive = 0.0f64;
    let mut weighted_negative = 0.0f64;
    let mut weighted_neutral = 0.0f64;

    for (emotion, intensity) in lexicon.weights() {
        let count = counts.get(emotion);
        if count == 0 {
            continue;
        }
        let contribution = count as f64 * intensity;
        match emotion.polarity() {
            Polarity::Positive => weighted_positive += contribution,
            Polarity::Negative => weighted_negative += contribution,
            Polarity::Neutral => weighted_neutral += contribution,
        }
    }

    let total = weighted_positive + weighted_negative + weighted_neutral;

    let mut emotion_ratio = 0.5;
    if total > 0.0 {
        if weighted_positive > weighted_negative {
            emotion_ratio = 0.5 + (weighted_positive / total) * 0.3;
        } else if weighted_negative > weighted_positive {
            emotion_ratio = 0.5 - (weighted_negative / total) * 0.3;
        }
    }

    // Registry-wide constant for a given lexicon, not derived from the
    // text. Kept as-is for score parity with existing records.
    let max_intensity = lexicon.max_intensity();
    let intensity_balance = if max_intensity > 0.0 { max_intensity } else { 0.5 };

    let diversity_factor = (counts.active_len() as f64 / 10.0).min(1.0);

    let density = counts.total() as f64 / text_chars.max(1) as f64;
    let contextual = if density > 0.1 {
        0.6
    } else if density > 0.05 {
        0.5
    } else {
        0.4
    };

    let value = (emotion_ratio * 0.4
        + intensity_balance * 0.3
        + diversity_factor * 0.2
        + contextual * 0.1)
        .clamp(0.0, 1.0);

    let sentiment = if value > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if value < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    MoodScore {
        sentiment,
        value,
        emotion_ratio,
        intensity_balance,
        diversity_factor,
        contextual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Emotion, EmotionEntry};

    fn lexicon() -> Lexicon {
        Lexicon::default()
    }

    #[test]
    fn empty_counts_score_is_neutral() {
        let counts = EmotionCounts::default();
        let mood = score(&counts, 0, &lexicon());
        assert_eq!(mood.emotion_ratio, 0.5);
        assert_eq!(mood.diversity_factor, 0.0);
        assert_eq!(mood.contextual, 0.4);
        assert_eq!(mood.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn zero_match_long_text_regression_fixture() {
        // For the built-in registry: 0.5*0.4 + 1.0*0.3 + 0.0*0.2 + 0.4*0.1.
        let counts = lexicon().count(&"the quick brown fox. ".repeat(50));
        assert_eq!(counts.total(), 0);
        let mood = score(&counts, 1000, &lexicon());
        assert!((mood.value - 0.54).abs() < 1e-12);
        assert_eq!(mood.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn triple_happy_scenario() {
        let text = "happy happy happy";
        let counts = lexicon().count(text);
        assert_eq!(counts.get(Emotion::Joy), 3);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.active_len(), 1);

        let mood = score(&counts, text.chars().count(), &lexicon());
        // weighted(positive) = 3 * weight(joy) = 3, everything else zero.
        assert!((mood.emotion_ratio - 0.8).abs() < 1e-12);
        // density 3/17 > 0.1
        assert_eq!(mood.contextual, 0.6);
        // 0.8*0.4 + 1.0*0.3 + 0.1*0.2 + 0.6*0.1 = 0.70
        assert!((mood.value - 0.70).abs() < 1e-12);
        assert_eq!(mood.sentiment, Sentiment::Positive);
    }

    #[test]
    fn negative_dominant_counts_pull_ratio_down() {
        let mut counts = EmotionCounts::default();
        counts.insert(Emotion::Sadness, 4);
        let mood = score(&counts, 200, &lexicon());
        // weighted(negative)/total = 1, so ratio bottoms out at 0.2.
        assert!((mood.emotion_ratio - 0.2).abs() < 1e-12);
        assert!(mood.value < 0.5);
    }

    #[test]
    fn score_is_always_within_bounds() {
        let texts = [
            "",
            "happy grateful blessed thrilled delighted joyful",
            "sad angry scared lonely ashamed guilty devastated hopeless",
            "stressed stressed stressed deadline deadline crisis chaos",
            "the weather is unremarkable",
        ];
        for text in texts {
            let counts = lexicon().count(text);
            let mood = score(&counts, text.chars().count(), &lexicon());
            assert!((0.0..=1.0).contains(&mood.value), "out of bounds for {text:?}");
        }
    }

    #[test]
    fn classification_thresholds_are_exhaustive() {
        for value in [0.0, 0.34, 0.35, 0.5, 0.65, 0.66, 1.0] {
            let sentiment = if value > POSITIVE_THRESHOLD {
                Sentiment::Positive
            } else if value < NEGATIVE_THRESHOLD {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            };
            // Boundary values classify neutral, never two categories.
            if value == 0.35 || value == 0.65 {
                assert_eq!(sentiment, Sentiment::Neutral);
            }
        }
    }

    #[test]
    fn diversity_factor_caps_at_one() {
        let mut counts = EmotionCounts::default();
        for emotion in Emotion::all().iter().take(15) {
            counts.insert(*emotion, 1);
        }
        let mood = score(&counts, 100, &lexicon());
        assert_eq!(mood.diversity_factor, 1.0);
    }

    #[test]
    fn density_tiers_select_contextual_factor() {
        let mut counts = EmotionCounts::default();
        counts.insert(Emotion::Joy, 6);
        // 6/100 = 0.06 -> middle tier
        assert_eq!(score(&counts, 100, &lexicon()).contextual, 0.5);
        // 6/50 = 0.12 -> top tier
        assert_eq!(score(&counts, 50, &lexicon()).contextual, 0.6);
        // 6/1000 = 0.006 -> bottom tier
        assert_eq!(score(&counts, 1000, &lexicon()).contextual, 0.4);
    }

    #[test]
    fn intensity_balance_tracks_registry_maximum() {
        let custom = Lexicon::from_entries(vec![EmotionEntry {
            emotion: Emotion::Contentment,
            triggers: vec!["calm".to_string()],
            intensity: 0.6,
        }])
        .unwrap();
        let counts = custom.count("");
        let mood = score(&counts, 0, &custom);
        assert_eq!(mood.intensity_balance, 0.6);
    }
}
