//! Insight and suggestion generation.
//!
//! A fixed, ordered table of independent rules. Each rule inspects the
//! per-category counts and derived metrics and appends its template
//! strings; no rule suppresses another, and output order is table order,
//! not relevance.

use serde::{Deserialize, Serialize};

use crate::complexity::{Complexity, IntensityTier};
use crate::lexicon::Emotion;
use crate::matcher::EmotionCounts;
use crate::score::Sentiment;

/// Generated observations and actionable suggestions, in rule-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Human-readable observations about the emotional content.
    pub insights: Vec<String>,
    /// Actionable suggestions keyed off the same signals.
    pub suggestions: Vec<String>,
}

impl Report {
    fn insight(&mut self, text: impl Into<String>) {
        self.insights.push(text.into());
    }

    fn suggest(&mut self, text: impl Into<String>) {
        self.suggestions.push(text.into());
    }
}

/// Everything a rule may look at.
struct RuleContext<'a> {
    counts: &'a EmotionCounts,
    complexity: &'a Complexity,
    sentiment: Sentiment,
}

impl RuleContext<'_> {
    fn count(&self, emotion: Emotion) -> u32 {
        self.counts.get(emotion)
    }

    fn primary_label(&self) -> &'static str {
        self.complexity
            .primary_emotion
            .map_or("neutral", |e| e.as_str())
    }
}

type Rule = fn(&RuleContext<'_>, &mut Report);

/// The rule table. Order is part of the contract.
const RULES: &[Rule] = &[
    primary_focus,
    rich_landscape,
    focused_state,
    anxiety_signals,
    stress_signals,
    work_stress_signals,
    excitement_signals,
    gratitude_signals,
    frustration_signals,
    sadness_signals,
    anger_signals,
    fear_signals,
    high_intensity,
    low_intensity,
    positive_resilience,
    negative_undercurrent,
    pattern_tracking,
    stress_reduction,
    work_life_balance,
    savor_positives,
];

/// Walks the rule table over one analysis.
pub fn generate(
    counts: &EmotionCounts,
    complexity: &Complexity,
    sentiment: Sentiment,
) -> Report {
    let ctx = RuleContext {
        counts,
        complexity,
        sentiment,
    };
    let mut report = Report::default();
    for rule in RULES {
        rule(&ctx, &mut report);
    }
    report
}

fn primary_focus(ctx: &RuleContext<'_>, report: &mut Report) {
    if let Some(primary) = ctx.complexity.primary_emotion {
        report.insight(format!(
            "Your primary emotion is {primary}, indicating a strong focus on this feeling."
        ));
    }
}

fn rich_landscape(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.complexity.diversity > 5 {
        report.insight(format!(
            "You're experiencing a complex mix of {} different emotions, suggesting a rich emotional landscape.",
            ctx.complexity.diversity
        ));
    }
}

fn focused_state(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.complexity.diversity == 1 {
        report.insight(format!(
            "You're experiencing a focused emotional state with {} as the dominant feeling.",
            ctx.primary_label()
        ));
    }
}

fn anxiety_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Anxiety) > 1 {
        report.insight(
            "Anxiety appears multiple times, suggesting you may be feeling worried or uncertain about something.",
        );
        report.suggest(
            "Consider practicing deep breathing exercises or mindfulness meditation to help calm your mind.",
        );
        report.suggest(
            "Try writing down your specific worries to identify what you can control vs. what you can't.",
        );
    }
}

fn stress_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Stress) > 1 {
        report.insight("Stress indicators suggest you're feeling overwhelmed or under pressure.");
        report.suggest(
            "Take regular breaks throughout your day - even 5-minute walks can help reduce stress.",
        );
        report.suggest(
            "Consider time management techniques like the Pomodoro method to break tasks into manageable chunks.",
        );
        report.suggest(
            "Practice the 4-7-8 breathing technique: inhale for 4, hold for 7, exhale for 8.",
        );
    }
}

fn work_stress_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::WorkStress) > 1 {
        report.insight(
            "Work-related stress is prominent, indicating pressure from professional or academic responsibilities.",
        );
        report.suggest("Break large projects into smaller, manageable tasks with realistic deadlines.");
        report.suggest(
            "Set clear boundaries between work and personal time - avoid checking emails after hours.",
        );
        report.suggest(
            "Consider using productivity tools like time-blocking or the Eisenhower Matrix to prioritize tasks.",
        );
        report.suggest(
            "Don't hesitate to ask for help or delegate when possible - teamwork reduces individual burden.",
        );
    }
}

fn excitement_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Excitement) > 1 {
        report.insight("Excitement shows you're looking forward to something with positive anticipation.");
        report.suggest("Channel this energy into planning and preparation for what excites you.");
        report.suggest(
            "Share your excitement with others - positive emotions are contagious and strengthen relationships.",
        );
    }
}

fn gratitude_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Gratitude) > 1 {
        report.insight("Gratitude appears frequently, indicating a thankful and appreciative mindset.");
        report.suggest(
            "Continue practicing gratitude - it's linked to better mental health and life satisfaction.",
        );
        report.suggest(
            "Consider starting a gratitude journal or sharing your appreciation with others.",
        );
    }
}

fn frustration_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Frustration) > 1 {
        report.insight("Frustration suggests you're dealing with obstacles or unmet expectations.");
        report.suggest("Take a step back and identify the root cause of your frustration.");
        report.suggest(
            "Consider if your expectations are realistic and what you can learn from this situation.",
        );
    }
}

fn sadness_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Sadness) > 1 {
        report.insight("Sadness indicates you may be processing a loss or difficult experience.");
        report.suggest("Allow yourself to feel sad - it's a natural and necessary emotion.");
        report.suggest(
            "Consider talking to a trusted friend or professional about what's troubling you.",
        );
    }
}

fn anger_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Anger) > 1 {
        report.insight("Anger suggests you're feeling wronged or frustrated with a situation.");
        report.suggest("Take time to cool down before addressing the situation.");
        report.suggest(
            "Identify what specifically triggered your anger and what you can do about it constructively.",
        );
    }
}

fn fear_signals(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Fear) > 1 {
        report.insight("Fear indicates you may be feeling threatened or uncertain about the future.");
        report.suggest("Identify what specifically you're afraid of and assess if the threat is real.");
        report.suggest("Consider developing a plan to address your fears step by step.");
    }
}

fn high_intensity(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.complexity.intensity == IntensityTier::High {
        report.insight("High emotional intensity suggests this is a significant experience for you.");
        report.suggest(
            "High emotions can be overwhelming - consider taking time to process before making decisions.",
        );
        report.suggest(
            "This intensity might indicate something important to you - pay attention to what it's telling you.",
        );
    }
}

fn low_intensity(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.complexity.intensity == IntensityTier::Low {
        report.insight("Lower emotional intensity suggests a more measured or calm emotional state.");
        report.suggest("Use this calm state to reflect on your goals and make thoughtful decisions.");
        report.suggest("Consider if this calmness is healthy or if you might be suppressing emotions.");
    }
}

fn positive_resilience(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.sentiment == Sentiment::Positive && ctx.complexity.primary_emotion != Some(Emotion::Joy) {
        report.insight("Despite mixed emotions, your overall sentiment is positive, showing resilience.");
        report.suggest("Your resilience is a strength - consider what helped you maintain positivity.");
        report.suggest("Build on this positive foundation by setting small, achievable goals.");
    }
}

fn negative_undercurrent(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.sentiment == Sentiment::Negative
        && ctx.complexity.primary_emotion != Some(Emotion::Sadness)
    {
        report.insight("Your negative sentiment may be influenced by underlying concerns or stressors.");
        report.suggest("Identify one small positive action you can take today to improve your mood.");
        report.suggest(
            "Consider what would help you feel more supported or understood right now.",
        );
    }
}

fn pattern_tracking(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.complexity.diversity > 3 {
        report.suggest(format!(
            "With {} different emotions, consider journaling regularly to track patterns.",
            ctx.complexity.diversity
        ));
    }
}

fn stress_reduction(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Stress) > 0 || ctx.count(Emotion::Anxiety) > 0 {
        report.suggest(
            "Consider incorporating stress-reduction activities like exercise, meditation, or nature walks.",
        );
    }
}

fn work_life_balance(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::WorkStress) > 0 {
        report.suggest(
            "Work stress can be managed through better organization, time management, and work-life balance.",
        );
    }
}

fn savor_positives(ctx: &RuleContext<'_>, report: &mut Report) {
    if ctx.count(Emotion::Gratitude) > 0 || ctx.count(Emotion::Joy) > 0 {
        report.suggest(
            "Your positive emotions are valuable - consider how to create more moments like this.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::classify;

    fn counts_of(pairs: &[(Emotion, u32)]) -> EmotionCounts {
        let mut counts = EmotionCounts::default();
        for (emotion, count) in pairs {
            counts.insert(*emotion, *count);
        }
        counts
    }

    fn report_for(pairs: &[(Emotion, u32)], sentiment: Sentiment) -> Report {
        let counts = counts_of(pairs);
        let complexity = classify(&counts, sentiment);
        generate(&counts, &complexity, sentiment)
    }

    #[test]
    fn empty_counts_still_fire_low_intensity_rule() {
        let report = report_for(&[], Sentiment::Neutral);
        // No primary, no category rules; only the low-intensity pair.
        assert_eq!(report.insights.len(), 1);
        assert!(report.insights[0].contains("Lower emotional intensity"));
        assert_eq!(report.suggestions.len(), 2);
    }

    #[test]
    fn primary_emotion_insight_uses_category_id() {
        let report = report_for(&[(Emotion::WorkStress, 1)], Sentiment::Neutral);
        assert!(report.insights[0]
            .starts_with("Your primary emotion is work_stress"));
    }

    #[test]
    fn anxiety_rule_needs_more_than_one_match() {
        let single = report_for(&[(Emotion::Anxiety, 1)], Sentiment::Neutral);
        assert!(!single
            .insights
            .iter()
            .any(|i| i.contains("Anxiety appears multiple times")));

        let repeated = report_for(&[(Emotion::Anxiety, 2)], Sentiment::Neutral);
        assert!(repeated
            .insights
            .iter()
            .any(|i| i.contains("Anxiety appears multiple times")));
    }

    #[test]
    fn work_stress_rule_contributes_four_suggestions() {
        let report = report_for(&[(Emotion::WorkStress, 2)], Sentiment::Neutral);
        let work_related = report
            .suggestions
            .iter()
            .filter(|s| {
                s.contains("Break large projects")
                    || s.contains("clear boundaries")
                    || s.contains("Eisenhower")
                    || s.contains("delegate")
            })
            .count();
        assert_eq!(work_related, 4);
        // The closing balance rule fires too (count > 0).
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("Work stress can be managed")));
    }

    #[test]
    fn rules_do_not_suppress_each_other() {
        let report = report_for(
            &[(Emotion::Anxiety, 2), (Emotion::Stress, 2), (Emotion::Sadness, 2)],
            Sentiment::Negative,
        );
        assert!(report.insights.iter().any(|i| i.contains("Anxiety appears")));
        assert!(report.insights.iter().any(|i| i.contains("Stress indicators")));
        assert!(report.insights.iter().any(|i| i.contains("Sadness indicates")));
    }

    #[test]
    fn insights_come_out_in_table_order() {
        let report = report_for(
            &[(Emotion::Stress, 2), (Emotion::Anxiety, 2)],
            Sentiment::Neutral,
        );
        let anxiety_pos = report
            .insights
            .iter()
            .position(|i| i.contains("Anxiety appears"))
            .unwrap();
        let stress_pos = report
            .insights
            .iter()
            .position(|i| i.contains("Stress indicators"))
            .unwrap();
        assert!(anxiety_pos < stress_pos);
    }

    #[test]
    fn resilience_rule_skips_joy_primary() {
        let joyful = report_for(&[(Emotion::Joy, 3)], Sentiment::Positive);
        assert!(!joyful
            .insights
            .iter()
            .any(|i| i.contains("showing resilience")));

        let mixed = report_for(&[(Emotion::Gratitude, 3)], Sentiment::Positive);
        assert!(mixed
            .insights
            .iter()
            .any(|i| i.contains("showing resilience")));
    }

    #[test]
    fn negative_undercurrent_skips_sadness_primary() {
        let sad = report_for(&[(Emotion::Sadness, 3)], Sentiment::Negative);
        assert!(!sad
            .insights
            .iter()
            .any(|i| i.contains("underlying concerns")));

        let stressed = report_for(&[(Emotion::Stress, 3)], Sentiment::Negative);
        assert!(stressed
            .insights
            .iter()
            .any(|i| i.contains("underlying concerns")));
    }

    #[test]
    fn closing_rules_fire_on_any_presence() {
        let report = report_for(&[(Emotion::Joy, 1)], Sentiment::Neutral);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("positive emotions are valuable")));
    }

    #[test]
    fn pattern_tracking_interpolates_diversity() {
        let report = report_for(
            &[
                (Emotion::Joy, 1),
                (Emotion::Sadness, 1),
                (Emotion::Anger, 1),
                (Emotion::Fear, 1),
            ],
            Sentiment::Neutral,
        );
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("With 4 different emotions")));
    }

    #[test]
    fn rich_landscape_fires_above_five_categories() {
        let report = report_for(
            &[
                (Emotion::Joy, 1),
                (Emotion::Sadness, 1),
                (Emotion::Anger, 1),
                (Emotion::Fear, 1),
                (Emotion::Guilt, 1),
                (Emotion::Envy, 1),
            ],
            Sentiment::Neutral,
        );
        assert!(report
            .insights
            .iter()
            .any(|i| i.contains("complex mix of 6 different emotions")));
    }

    #[test]
    fn focused_state_fires_on_single_category() {
        let report = report_for(&[(Emotion::Joy, 2)], Sentiment::Neutral);
        assert!(report
            .insights
            .iter()
            .any(|i| i.contains("focused emotional state with joy")));
    }
}
