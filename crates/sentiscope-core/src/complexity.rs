//! Emotional complexity metrics and the coarse state label.

use serde::{Deserialize, Serialize};

use crate::lexicon::Emotion;
use crate::matcher::EmotionCounts;
use crate::score::Sentiment;

/// How many emotion words were found overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    Low,
    Medium,
    High,
}

impl IntensityTier {
    /// Derives the tier from the total emotion-word count.
    pub fn from_total(total: u32) -> IntensityTier {
        if total > 10 {
            IntensityTier::High
        } else if total > 5 {
            IntensityTier::Medium
        } else {
            IntensityTier::Low
        }
    }

    /// Returns a human-readable name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            IntensityTier::Low => "Low",
            IntensityTier::Medium => "Medium",
            IntensityTier::High => "High",
        }
    }
}

/// Coarse descriptive label for the writer's overall emotional state.
///
/// Derived by a fixed priority list over category counts; the first
/// matching rule wins, with the overall sentiment as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    Overwhelmed,
    Energized,
    Agitated,
    Fearful,
    Peaceful,
    Uncertain,
    Frustrated,
    Content,
    Distressed,
    Neutral,
}

impl EmotionalState {
    /// Returns the snake_case identifier used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::Overwhelmed => "overwhelmed",
            EmotionalState::Energized => "energized",
            EmotionalState::Agitated => "agitated",
            EmotionalState::Fearful => "fearful",
            EmotionalState::Peaceful => "peaceful",
            EmotionalState::Uncertain => "uncertain",
            EmotionalState::Frustrated => "frustrated",
            EmotionalState::Content => "content",
            EmotionalState::Distressed => "distressed",
            EmotionalState::Neutral => "neutral",
        }
    }

    /// First matching rule wins; rule order is part of the contract.
    pub fn derive(counts: &EmotionCounts, sentiment: Sentiment) -> EmotionalState {
        if counts.get(Emotion::Anxiety) > 1 || counts.get(Emotion::Stress) > 1 {
            EmotionalState::Overwhelmed
        } else if counts.get(Emotion::Excitement) > 1 {
            EmotionalState::Energized
        } else if counts.get(Emotion::Anger) > 1 {
            EmotionalState::Agitated
        } else if counts.get(Emotion::Fear) > 1 {
            EmotionalState::Fearful
        } else if counts.get(Emotion::Contentment) > 1 || counts.get(Emotion::Gratitude) > 1 {
            EmotionalState::Peaceful
        } else if counts.get(Emotion::Confusion) > 1 {
            EmotionalState::Uncertain
        } else if counts.get(Emotion::Frustration) > 1 {
            EmotionalState::Frustrated
        } else {
            match sentiment {
                Sentiment::Positive => EmotionalState::Content,
                Sentiment::Negative => EmotionalState::Distressed,
                Sentiment::Neutral => EmotionalState::Neutral,
            }
        }
    }
}

impl std::fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary descriptive metrics for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complexity {
    /// Intensity tier from the total emotion-word count.
    pub intensity: IntensityTier,
    /// Number of categories with a nonzero count.
    pub diversity: usize,
    /// Highest-ranked emotion; serialized as "neutral" when nothing matched.
    #[serde(with = "primary_emotion_serde")]
    pub primary_emotion: Option<Emotion>,
    /// Ranked emotions two and three, when present.
    pub secondary_emotions: Vec<Emotion>,
    /// Coarse overall state label.
    pub state: EmotionalState,
}

/// Derives the complexity metrics from per-category counts.
pub fn classify(counts: &EmotionCounts, sentiment: Sentiment) -> Complexity {
    let top = counts.top(5);
    Complexity {
        intensity: IntensityTier::from_total(counts.total()),
        diversity: counts.active_len(),
        primary_emotion: top.first().copied(),
        secondary_emotions: top.iter().skip(1).take(2).copied().collect(),
        state: EmotionalState::derive(counts, sentiment),
    }
}

mod primary_emotion_serde {
    //! Serializes the primary emotion as its identifier, or "neutral"
    //! when no category matched.

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::lexicon::Emotion;

    pub fn serialize<S: Serializer>(
        value: &Option<Emotion>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(emotion) => serializer.serialize_str(emotion.as_str()),
            None => serializer.serialize_str("neutral"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Emotion>, D::Error> {
        let id = String::deserialize(deserializer)?;
        if id == "neutral" {
            return Ok(None);
        }
        Emotion::from_id(&id)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown emotion category: {id}")))
    }
}
