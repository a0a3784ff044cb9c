//! Rotating daily journaling prompts.

use chrono::{Datelike, NaiveDate};

/// The prompt rotation, cycled by day of year.
pub const DAILY_PROMPTS: [&str; 10] = [
    "How are you feeling today? What's on your mind?",
    "What's something you're grateful for right now?",
    "Describe a challenge you're facing and how you're handling it.",
    "What's something you're looking forward to?",
    "Reflect on a recent interaction that made an impact on you.",
    "What's something you've learned about yourself recently?",
    "Describe your ideal day and what makes it special.",
    "What's a goal you're working towards? How's it going?",
    "Reflect on a mistake you made and what you learned from it.",
    "What's something that's been bothering you lately?",
];

/// Returns the prompt for a calendar day. The same day always yields the
/// same prompt; consecutive days walk the rotation.
pub fn daily_prompt(date: NaiveDate) -> &'static str {
    DAILY_PROMPTS[date.ordinal() as usize % DAILY_PROMPTS.len()]
}
