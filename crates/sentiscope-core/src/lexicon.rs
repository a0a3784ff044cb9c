//! Emotion lexicon registry.
//!
//! The registry maps each emotion category to a trigger list (words and
//! multi-word phrases) and a fixed intensity weight. It is pure
//! configuration: defined once, never mutated at runtime, and shared by
//! read-only reference across any number of concurrent analyses.
//!
//! Every category belongs to exactly one [`Polarity`] partition, which the
//! score aggregator uses for the weighted positive/negative/neutral sums.

use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// Emotion categories recognized by the engine.
///
/// Declaration order is registry order; it decides tie-breaks when
/// emotions are ranked by match count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Anxiety,
    Stress,
    WorkStress,
    Excitement,
    Nervousness,
    Contentment,
    Confusion,
    Frustration,
    Hope,
    Love,
    Gratitude,
    Pride,
    Shame,
    Guilt,
    Envy,
    Loneliness,
    Boredom,
    Curiosity,
    Determination,
    Relief,
    Disappointment,
    Satisfaction,
    Inspiration,
}

impl Emotion {
    /// Returns all categories in registry order.
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Joy,
            Emotion::Sadness,
            Emotion::Anger,
            Emotion::Fear,
            Emotion::Surprise,
            Emotion::Disgust,
            Emotion::Anxiety,
            Emotion::Stress,
            Emotion::WorkStress,
            Emotion::Excitement,
            Emotion::Nervousness,
            Emotion::Contentment,
            Emotion::Confusion,
            Emotion::Frustration,
            Emotion::Hope,
            Emotion::Love,
            Emotion::Gratitude,
            Emotion::Pride,
            Emotion::Shame,
            Emotion::Guilt,
            Emotion::Envy,
            Emotion::Loneliness,
            Emotion::Boredom,
            Emotion::Curiosity,
            Emotion::Determination,
            Emotion::Relief,
            Emotion::Disappointment,
            Emotion::Satisfaction,
            Emotion::Inspiration,
        ]
    }

    /// Returns the snake_case identifier used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Anxiety => "anxiety",
            Emotion::Stress => "stress",
            Emotion::WorkStress => "work_stress",
            Emotion::Excitement => "excitement",
            Emotion::Nervousness => "nervousness",
            Emotion::Contentment => "contentment",
            Emotion::Confusion => "confusion",
            Emotion::Frustration => "frustration",
            Emotion::Hope => "hope",
            Emotion::Love => "love",
            Emotion::Gratitude => "gratitude",
            Emotion::Pride => "pride",
            Emotion::Shame => "shame",
            Emotion::Guilt => "guilt",
            Emotion::Envy => "envy",
            Emotion::Loneliness => "loneliness",
            Emotion::Boredom => "boredom",
            Emotion::Curiosity => "curiosity",
            Emotion::Determination => "determination",
            Emotion::Relief => "relief",
            Emotion::Disappointment => "disappointment",
            Emotion::Satisfaction => "satisfaction",
            Emotion::Inspiration => "inspiration",
        }
    }

    /// Parses a snake_case identifier back into a category.
    pub fn from_id(id: &str) -> Option<Emotion> {
        Emotion::all().iter().copied().find(|e| e.as_str() == id)
    }

    /// Returns a human-readable name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Emotion::WorkStress => "Work Stress",
            Emotion::Joy => "Joy",
            Emotion::Sadness => "Sadness",
            Emotion::Anger => "Anger",
            Emotion::Fear => "Fear",
            Emotion::Surprise => "Surprise",
            Emotion::Disgust => "Disgust",
            Emotion::Anxiety => "Anxiety",
            Emotion::Stress => "Stress",
            Emotion::Excitement => "Excitement",
            Emotion::Nervousness => "Nervousness",
            Emotion::Contentment => "Contentment",
            Emotion::Confusion => "Confusion",
            Emotion::Frustration => "Frustration",
            Emotion::Hope => "Hope",
            Emotion::Love => "Love",
            Emotion::Gratitude => "Gratitude",
            Emotion::Pride => "Pride",
            Emotion::Shame => "Shame",
            Emotion::Guilt => "Guilt",
            Emotion::Envy => "Envy",
            Emotion::Loneliness => "Loneliness",
            Emotion::Boredom => "Boredom",
            Emotion::Curiosity => "Curiosity",
            Emotion::Determination => "Determination",
            Emotion::Relief => "Relief",
            Emotion::Disappointment => "Disappointment",
            Emotion::Satisfaction => "Satisfaction",
            Emotion::Inspiration => "Inspiration",
        }
    }

    /// Returns the fixed partition this category belongs to.
    pub fn polarity(&self) -> Polarity {
        match self {
            Emotion::Joy
            | Emotion::Excitement
            | Emotion::Contentment
            | Emotion::Hope
            | Emotion::Love
            | Emotion::Gratitude
            | Emotion::Pride
            | Emotion::Curiosity
            | Emotion::Determination
            | Emotion::Relief
            | Emotion::Satisfaction
            | Emotion::Inspiration => Polarity::Positive,
            Emotion::Sadness
            | Emotion::Anger
            | Emotion::Fear
            | Emotion::Disgust
            | Emotion::Anxiety
            | Emotion::Stress
            | Emotion::WorkStress
            | Emotion::Nervousness
            | Emotion::Confusion
            | Emotion::Frustration
            | Emotion::Shame
            | Emotion::Guilt
            | Emotion::Envy
            | Emotion::Loneliness
            | Emotion::Boredom
            | Emotion::Disappointment => Polarity::Negative,
            Emotion::Surprise => Polarity::Neutral,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed scoring partitions. Author-curated, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// One category's configuration: its triggers and intensity weight.
///
/// Serde-enabled so lexicons can live in configuration files and be
/// audited or extended without touching matching or scoring logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionEntry {
    /// The category this entry configures.
    pub emotion: Emotion,
    /// Trigger words and phrases, matched case-insensitively as whole
    /// words or whole phrases.
    pub triggers: Vec<String>,
    /// Intensity weight in [0, 1], author-assigned per category.
    pub intensity: f64,
}

/// A compiled registry entry.
pub(crate) struct CompiledEntry {
    pub(crate) emotion: Emotion,
    pub(crate) intensity: f64,
    /// Fast prefilter over all of this category's triggers.
    pub(crate) prefilter: RegexSet,
    /// One regex per trigger, for per-occurrence counting.
    pub(crate) triggers: Vec<Regex>,
}

/// The emotion lexicon registry.
///
/// Immutable after construction. [`Lexicon::default`] builds the built-in
/// registry; [`Lexicon::from_entries`] compiles a custom one.
pub struct Lexicon {
    pub(crate) entries: Vec<CompiledEntry>,
    max_intensity: f64,
}

impl Lexicon {
    /// Compiles a custom registry from configuration entries.
    pub fn from_entries(entries: Vec<EmotionEntry>) -> Result<Lexicon, LexiconError> {
        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        let mut compiled = Vec::with_capacity(entries.len());

        for entry in &entries {
            if !seen.insert(entry.emotion) {
                return Err(LexiconError::DuplicateCategory(entry.emotion.as_str()));
            }
            if entry.triggers.is_empty() {
                return Err(LexiconError::EmptyTriggers(entry.emotion.as_str()));
            }
            if !(0.0..=1.0).contains(&entry.intensity) {
                return Err(LexiconError::IntensityOutOfRange {
                    category: entry.emotion.as_str(),
                    intensity: entry.intensity,
                });
            }
            compiled.push(Self::compile_entry(
                entry.emotion,
                entry.intensity,
                entry.triggers.iter().map(String::as_str),
            )?);
        }

        // Registry order, regardless of configuration order.
        compiled.sort_by_key(|e| e.emotion);

        let max_intensity = compiled
            .iter()
            .map(|e| e.intensity)
            .fold(0.0f64, f64::max);

        Ok(Lexicon {
            entries: compiled,
            max_intensity,
        })
    }

    fn compile_entry<'a>(
        emotion: Emotion,
        intensity: f64,
        triggers: impl Iterator<Item = &'a str>,
    ) -> Result<CompiledEntry, LexiconError> {
        let patterns: Vec<String> = triggers
            .map(|t| format!(r"(?i)\b{}\b", regex::escape(t)))
            .collect();

        let prefilter = RegexSet::new(&patterns)?;
        let triggers = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledEntry {
            emotion,
            intensity,
            prefilter,
            triggers,
        })
    }

    /// Returns the intensity weight for a category, if it is registered.
    pub fn intensity(&self, emotion: Emotion) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.emotion == emotion)
            .map(|e| e.intensity)
    }

    /// Iterates (category, intensity) pairs in registry order.
    pub fn weights(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        self.entries.iter().map(|e| (e.emotion, e.intensity))
    }

    /// Categories present in this registry, in registry order.
    pub fn emotions(&self) -> impl Iterator<Item = Emotion> + '_ {
        self.entries.iter().map(|e| e.emotion)
    }

    /// The largest intensity weight configured anywhere in the registry.
    pub fn max_intensity(&self) -> f64 {
        self.max_intensity
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    /// Builds the built-in registry.
    fn default() -> Self {
        let compiled = builtin_table()
            .iter()
            .map(|(emotion, intensity, triggers)| {
                Lexicon::compile_entry(*emotion, *intensity, triggers.iter().copied())
                    .expect("Invalid built-in trigger pattern")
            })
            .collect::<Vec<_>>();

        let max_intensity = compiled
            .iter()
            .map(|e| e.intensity)
            .fold(0.0f64, f64::max);

        Lexicon {
            entries: compiled,
            max_intensity,
        }
    }
}

/// The built-in registry: 29 categories, in registry order.
///
/// Trigger lists are duplicate-free within a category, but the same word
/// may appear under several categories; matching treats categories as
/// independent.
#[rustfmt::skip]
fn builtin_table() -> &'static [(Emotion, f64, &'static [&'static str])] {
    &[
        (Emotion::Joy, 1.0, &[
            "happy", "joy", "excited", "thrilled", "delighted", "ecstatic",
            "elated", "cheerful", "gleeful", "jubilant", "euphoric", "blissful",
            "content", "pleased", "satisfied", "grateful", "blessed",
            "fortunate", "lucky",
        ]),
        (Emotion::Sadness, 1.0, &[
            "sad", "depressed", "melancholy", "gloomy", "sorrowful",
            "heartbroken", "devastated", "crushed", "disappointed", "let down",
            "hopeless", "despair", "grief", "mourning", "lamenting", "weeping",
            "crying",
        ]),
        (Emotion::Anger, 1.0, &[
            "angry", "furious", "mad", "enraged", "irritated", "annoyed",
            "frustrated", "livid", "outraged", "fuming", "seething", "hostile",
            "aggressive", "bitter", "resentful", "vengeful", "hateful",
        ]),
        (Emotion::Fear, 1.0, &[
            "fear", "scared", "afraid", "terrified", "panicked", "anxious",
            "worried", "nervous", "uneasy", "apprehensive", "dread", "horror",
            "terror", "alarm", "distress", "frightened", "startled",
        ]),
        (Emotion::Surprise, 0.7, &[
            "surprised", "shocked", "amazed", "astonished", "stunned",
            "bewildered", "confused", "perplexed", "baffled", "dumbfounded",
            "flabbergasted", "taken aback", "caught off guard",
        ]),
        (Emotion::Disgust, 0.9, &[
            "disgusted", "revolted", "repulsed", "sickened", "appalled",
            "horrified", "nauseated", "offended", "outraged", "contempt",
            "loathing", "abhorrence",
        ]),
        (Emotion::Anxiety, 0.8, &[
            "anxiety", "anxious", "worried", "concerned", "uneasy", "restless",
            "jittery", "on edge", "tense", "stressed", "overwhelmed",
            "panicked", "fearful", "apprehensive", "dread", "nervousness",
            "nervous", "agitation", "distress",
        ]),
        (Emotion::Stress, 0.8, &[
            "stress", "stressed", "overwhelmed", "burdened", "pressured",
            "strained", "tension", "tense", "exhausted", "drained",
            "burned out", "frazzled", "wound up", "keyed up", "high strung",
            "swamped", "busy", "hectic", "crazy", "insane", "nuts", "mad",
            "stressed out", "under pressure", "deadline", "rushed", "hurried",
            "pressed for time", "time crunch", "crunch time", "last minute",
            "urgent", "emergency", "crisis", "chaos", "mess", "disorganized",
            "scattered", "all over the place", "pulled in different directions",
            "spread thin", "too much", "can't handle", "breaking point",
            "at my limit", "maxed out", "overloaded", "drowning", "sinking",
            "struggling", "barely keeping up", "falling behind",
            "playing catch up", "running around", "nonstop", "never ending",
            "endless", "infinite", "too many things", "too much going on",
            "crazy busy", "insanely busy", "ridiculously busy", "absurdly busy",
            "unbelievably busy", "extremely busy", "super busy", "very busy",
            "so busy", "really busy", "pretty busy", "quite busy",
            "fairly busy", "somewhat busy", "a bit busy", "a little busy",
            "kind of busy", "sort of busy", "rather busy", "quite stressed",
            "very stressed", "really stressed", "so stressed",
            "pretty stressed", "fairly stressed", "somewhat stressed",
            "a bit stressed", "a little stressed", "kind of stressed",
            "sort of stressed", "rather stressed", "extremely stressed",
            "super stressed", "unbelievably stressed", "ridiculously stressed",
            "insanely stressed", "crazy stressed", "mad stressed",
            "nuts stressed", "insane stressed", "absurdly stressed",
        ]),
        (Emotion::WorkStress, 0.9, &[
            "workload", "deadline", "meeting", "presentation", "project",
            "assignment", "homework", "study", "exam", "test", "quiz", "paper",
            "report", "proposal", "review", "evaluation", "performance",
            "target", "goal", "objective", "milestone", "deliverable",
            "submission", "due date", "cutoff", "time limit", "overtime",
            "extra hours", "weekend work", "late night", "early morning",
            "all nighter", "pulling all nighters", "burning the midnight oil",
            "working late", "staying late", "coming in early",
            "working weekends", "working holidays", "no breaks", "no lunch",
            "no time off", "no vacation", "no sick days", "no personal time",
            "always working", "never stopping", "nonstop work", "endless work",
            "infinite work", "too much work", "work overload", "work pressure",
            "work stress", "job stress", "career stress", "professional stress",
            "academic stress", "school stress", "college stress",
            "university stress", "student stress", "work life balance",
            "work life imbalance", "no work life balance",
            "poor work life balance", "terrible work life balance",
            "horrible work life balance", "awful work life balance",
            "bad work life balance", "stressful job", "stressful work",
            "stressful career", "stressful environment", "toxic workplace",
            "hostile environment", "unhealthy workplace", "unsafe workplace",
            "dangerous workplace", "risky workplace", "challenging workplace",
            "difficult workplace", "hard workplace", "tough workplace",
            "rough workplace", "rough job", "tough job", "hard job",
            "difficult job", "challenging job", "demanding job",
            "stressful position", "stressful role", "stressful responsibility",
            "stressful duty", "stressful task", "stressful assignment",
            "stressful project", "stressful deadline", "stressful meeting",
            "stressful presentation", "stressful review",
            "stressful evaluation", "stressful performance",
            "stressful target", "stressful goal", "stressful objective",
            "stressful milestone", "stressful deliverable",
            "stressful submission", "stressful due date", "stressful cutoff",
            "stressful time limit", "stressful overtime",
            "stressful extra hours", "stressful weekend work",
            "stressful late night", "stressful early morning",
            "stressful all nighter", "stressful pulling all nighters",
            "stressful burning the midnight oil", "stressful working late",
            "stressful staying late", "stressful coming in early",
            "stressful working weekends", "stressful working holidays",
            "stressful no breaks", "stressful no lunch",
            "stressful no time off", "stressful no vacation",
            "stressful no sick days", "stressful no personal time",
            "stressful always working", "stressful never stopping",
            "stressful nonstop work", "stressful endless work",
            "stressful infinite work", "stressful too much work",
            "stressful work overload", "stressful work pressure",
            "stressful work stress", "stressful job stress",
            "stressful career stress", "stressful professional stress",
            "stressful academic stress", "stressful school stress",
            "stressful college stress", "stressful university stress",
            "stressful student stress", "stressful work life balance",
            "stressful work life imbalance",
            "stressful no work life balance",
            "stressful poor work life balance",
            "stressful terrible work life balance",
            "stressful horrible work life balance",
            "stressful awful work life balance",
            "stressful bad work life balance",
        ]),
        (Emotion::Excitement, 0.9, &[
            "excitement", "excited", "thrilled", "enthusiastic", "eager",
            "anticipating", "looking forward", "can't wait", "buzzing",
            "pumped", "stoked", "amped", "fired up", "motivated", "inspired",
        ]),
        (Emotion::Nervousness, 0.7, &[
            "nervous", "nervousness", "jittery", "shaky", "trembling",
            "quivering", "butterflies", "on edge", "tense", "anxious",
            "worried", "uneasy", "restless", "fidgety", "twitchy",
        ]),
        (Emotion::Contentment, 0.6, &[
            "content", "contentment", "satisfied", "fulfilled", "at peace",
            "serene", "calm", "tranquil", "relaxed", "comfortable", "cozy",
            "secure", "safe", "stable",
        ]),
        (Emotion::Confusion, 0.5, &[
            "confused", "confusion", "bewildered", "perplexed", "baffled",
            "puzzled", "uncertain", "unsure", "doubtful", "questioning",
            "mystified", "clueless", "lost", "disoriented",
        ]),
        (Emotion::Frustration, 0.8, &[
            "frustrated", "frustration", "annoyed", "irritated", "exasperated",
            "fed up", "sick of", "tired of", "had enough", "at wit's end",
            "discouraged", "disheartened", "demotivated",
        ]),
        (Emotion::Hope, 0.7, &[
            "hope", "hopeful", "optimistic", "positive", "encouraged",
            "inspired", "motivated", "determined", "confident", "assured",
            "certain", "sure", "believing", "trusting",
        ]),
        (Emotion::Love, 0.9, &[
            "love", "loving", "affection", "affectionate", "caring", "tender",
            "warm", "fond", "adore", "cherish", "treasure", "appreciate",
            "grateful", "thankful", "blessed",
        ]),
        (Emotion::Gratitude, 0.7, &[
            "grateful", "gratitude", "thankful", "appreciative", "blessed",
            "fortunate", "lucky", "privileged", "honored", "humbled",
            "indebted", "obliged",
        ]),
        (Emotion::Pride, 0.8, &[
            "proud", "pride", "accomplished", "achieved", "successful",
            "victorious", "triumphant", "confident", "assured", "self-assured",
            "self-confident", "empowered",
        ]),
        (Emotion::Shame, 0.9, &[
            "ashamed", "shame", "embarrassed", "humiliated", "mortified",
            "disgraced", "dishonored", "guilty", "remorseful", "regretful",
            "sorry", "apologetic", "contrite",
        ]),
        (Emotion::Guilt, 0.8, &[
            "guilty", "guilt", "remorseful", "regretful", "sorry",
            "apologetic", "contrite", "ashamed", "conscience-stricken",
            "penitent", "repentant", "self-reproachful",
        ]),
        (Emotion::Envy, 0.8, &[
            "envious", "envy", "jealous", "jealousy", "covetous", "resentful",
            "bitter", "spiteful", "malicious", "begrudging", "grudging",
        ]),
        (Emotion::Loneliness, 0.9, &[
            "lonely", "loneliness", "isolated", "alone", "abandoned",
            "forsaken", "deserted", "neglected", "ignored", "unwanted",
            "unloved", "friendless", "solitary",
        ]),
        (Emotion::Boredom, 0.5, &[
            "bored", "boredom", "uninterested", "apathetic", "indifferent",
            "unmotivated", "uninspired", "dull", "tedious", "monotonous",
            "repetitive", "mundane",
        ]),
        (Emotion::Curiosity, 0.6, &[
            "curious", "curiosity", "interested", "intrigued", "fascinated",
            "captivated", "absorbed", "engaged", "involved", "attentive",
            "focused", "concentrated",
        ]),
        (Emotion::Determination, 0.7, &[
            "determined", "determination", "resolved", "committed",
            "dedicated", "persistent", "tenacious", "steadfast", "unwavering",
            "firm", "strong-willed", "stubborn",
        ]),
        (Emotion::Relief, 0.6, &[
            "relieved", "relief", "eased", "unburdened", "unloaded", "freed",
            "liberated", "released", "unwound", "relaxed", "calmed", "soothed",
            "comforted",
        ]),
        (Emotion::Disappointment, 0.8, &[
            "disappointed", "disappointment", "let down", "discouraged",
            "disheartened", "crushed", "devastated", "shattered", "broken",
            "defeated", "beaten", "overcome",
        ]),
        (Emotion::Satisfaction, 0.7, &[
            "satisfied", "satisfaction", "fulfilled", "content", "pleased",
            "gratified", "rewarded", "accomplished", "achieved", "completed",
            "finished",
        ]),
        (Emotion::Inspiration, 0.8, &[
            "inspired", "inspiration", "motivated", "encouraged", "stimulated",
            "sparked", "ignited", "fired up", "energized", "vitalized",
            "revitalized", "renewed",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_all_returns_29_categories() {
        assert_eq!(Emotion::all().len(), 29);
    }

    #[test]
    fn every_emotion_round_trips_through_id() {
        for emotion in Emotion::all() {
            assert_eq!(Emotion::from_id(emotion.as_str()), Some(*emotion));
        }
    }

    #[test]
    fn every_emotion_has_exactly_one_polarity() {
        // Exhaustive by construction; spot-check the partition edges.
        assert_eq!(Emotion::Confusion.polarity(), Polarity::Negative);
        assert_eq!(Emotion::Surprise.polarity(), Polarity::Neutral);
        assert_eq!(Emotion::Joy.polarity(), Polarity::Positive);
        assert_eq!(Emotion::WorkStress.polarity(), Polarity::Negative);
    }

    #[test]
    fn builtin_lexicon_covers_all_categories() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.len(), Emotion::all().len());
        for emotion in Emotion::all() {
            assert!(lexicon.intensity(*emotion).is_some());
        }
    }

    #[test]
    fn builtin_max_intensity_is_one() {
        assert_eq!(Lexicon::default().max_intensity(), 1.0);
    }

    #[test]
    fn builtin_intensities_are_in_range() {
        for (_, intensity) in Lexicon::default().weights() {
            assert!((0.0..=1.0).contains(&intensity));
        }
    }

    #[test]
    fn builtin_triggers_have_no_duplicates_within_category() {
        for (emotion, _, triggers) in builtin_table() {
            let unique: std::collections::HashSet<_> = triggers.iter().collect();
            assert_eq!(
                unique.len(),
                triggers.len(),
                "duplicate trigger in {}",
                emotion.as_str()
            );
        }
    }

    #[test]
    fn from_entries_rejects_empty_registry() {
        assert!(matches!(
            Lexicon::from_entries(vec![]),
            Err(LexiconError::Empty)
        ));
    }

    #[test]
    fn from_entries_rejects_empty_triggers() {
        let result = Lexicon::from_entries(vec![EmotionEntry {
            emotion: Emotion::Joy,
            triggers: vec![],
            intensity: 1.0,
        }]);
        assert!(matches!(result, Err(LexiconError::EmptyTriggers("joy"))));
    }

    #[test]
    fn from_entries_rejects_out_of_range_intensity() {
        let result = Lexicon::from_entries(vec![EmotionEntry {
            emotion: Emotion::Joy,
            triggers: vec!["happy".to_string()],
            intensity: 1.5,
        }]);
        assert!(matches!(
            result,
            Err(LexiconError::IntensityOutOfRange { category: "joy", .. })
        ));
    }

    #[test]
    fn from_entries_rejects_duplicate_category() {
        let entry = EmotionEntry {
            emotion: Emotion::Joy,
            triggers: vec!["happy".to_string()],
            intensity: 1.0,
        };
        let result = Lexicon::from_entries(vec![entry.clone(), entry]);
        assert!(matches!(result, Err(LexiconError::DuplicateCategory("joy"))));
    }

    #[test]
    fn from_entries_orders_by_registry() {
        let lexicon = Lexicon::from_entries(vec![
            EmotionEntry {
                emotion: Emotion::Stress,
                triggers: vec!["stressed".to_string()],
                intensity: 0.8,
            },
            EmotionEntry {
                emotion: Emotion::Joy,
                triggers: vec!["happy".to_string()],
                intensity: 1.0,
            },
        ])
        .unwrap();
        let order: Vec<Emotion> = lexicon.emotions().collect();
        assert_eq!(order, vec![Emotion::Joy, Emotion::Stress]);
    }

    #[test]
    fn emotion_entry_round_trips_through_json() {
        let entry = EmotionEntry {
            emotion: Emotion::WorkStress,
            triggers: vec!["deadline".to_string(), "due date".to_string()],
            intensity: 0.9,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"work_stress\""));
        let back: EmotionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.emotion, Emotion::WorkStress);
        assert_eq!(back.triggers.len(), 2);
    }
}
