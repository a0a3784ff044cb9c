//! SentiScope Core - Lexicon-based multi-factor emotion analysis.
//!
//! This crate turns free-form journal text into a structured emotional
//! record: sentiment category, continuous mood score, dominant emotions,
//! complexity metrics, and generated insights and suggestions. It is a
//! deterministic rule engine, not a statistical classifier: all of its
//! intelligence is hand-authored thresholds and weighted lexicons.
//!
//! The engine is pure and infallible - any input, including empty text,
//! yields a well-formed [`Analysis`].
//!
//! # Example
//!
//! ```
//! use sentiscope_core::Analyzer;
//!
//! let analyzer = Analyzer::with_defaults();
//! let analysis = analyzer.analyze("So grateful today, really happy with how things went!");
//!
//! assert!(analysis.total_emotion_words > 0);
//! assert!((0.0..=1.0).contains(&analysis.sentiment_score));
//! ```

mod analyzer;
mod complexity;
pub mod error;
mod insight;
mod lexicon;
mod matcher;
mod score;

pub use analyzer::{Analysis, Analyzer};
pub use complexity::{classify, Complexity, EmotionalState, IntensityTier};
pub use error::LexiconError;
pub use insight::{generate, Report};
pub use lexicon::{Emotion, EmotionEntry, Lexicon, Polarity};
pub use matcher::EmotionCounts;
pub use score::{score, MoodScore, Sentiment, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
