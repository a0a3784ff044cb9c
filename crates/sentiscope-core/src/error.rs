//! Core error types.

use thiserror::Error;

/// Errors that can occur while building a custom lexicon.
///
/// Analysis itself has no error taxonomy: every input, including empty or
/// non-linguistic text, produces a well-formed result.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The registry has no categories at all.
    #[error("lexicon has no categories")]
    Empty,

    /// A category was configured more than once.
    #[error("category {0} appears more than once")]
    DuplicateCategory(&'static str),

    /// A category has an empty trigger list.
    #[error("category {0} has no triggers")]
    EmptyTriggers(&'static str),

    /// A category's intensity weight is outside [0, 1].
    #[error("intensity {intensity} for category {category} is outside [0, 1]")]
    IntensityOutOfRange {
        /// The offending category's identifier.
        category: &'static str,
        /// The configured weight.
        intensity: f64,
    },

    /// A trigger failed to compile into a match pattern.
    #[error("invalid trigger pattern: {0}")]
    Pattern(#[from] regex::Error),
}
