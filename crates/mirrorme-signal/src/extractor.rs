//! Keyword-driven extraction of an emotional signal from journal text.

use mirrorme_core::{Emotion, EmotionalSignal, RiskLevel, Sentiment, SupportMode};

use crate::error::SignalError;
use crate::lexicon::{
    contains_any, count_present, CRISIS_PHRASES, EMOTION_RULES, NEGATIVE_WORDS, POSITIVE_WORDS,
};

/// Score drop per distinct negative word.
const NEGATIVE_STEP: f32 = 0.07;
/// Score gain per distinct positive word.
const POSITIVE_STEP: f32 = 0.1;
/// Lower clamp for negative scores.
const SCORE_FLOOR: f32 = 0.1;
/// Upper clamp for positive scores.
const SCORE_CEILING: f32 = 0.95;
/// More distinct negative words than this raise risk from low to medium.
const MEDIUM_RISK_THRESHOLD: usize = 4;

/// Analyze `text` and produce the emotional signal for it.
///
/// The pipeline is: lowercase once, scan for crisis phrases, count distinct
/// negative and positive vocabulary hits, derive sentiment and score, tag
/// emotions from the rule table, then grade risk. Emotion tags are never
/// empty: texts that trigger no rule fall back to stress when negative
/// vocabulary was seen and to loneliness otherwise.
///
/// # Errors
///
/// Returns [`SignalError::EmptyText`] when `text` is empty or whitespace.
pub fn extract_signal(
    text: &str,
    support_mode: SupportMode,
) -> Result<EmotionalSignal, SignalError> {
    if text.trim().is_empty() {
        return Err(SignalError::EmptyText);
    }

    let lower = text.to_lowercase();

    let crisis_flag = contains_any(&lower, CRISIS_PHRASES);
    let negative_count = count_present(&lower, NEGATIVE_WORDS);
    let positive_count = count_present(&lower, POSITIVE_WORDS);

    let (sentiment, sentiment_score) = score_sentiment(negative_count, positive_count);

    let mut emotions = Vec::new();
    for &(emotion, triggers) in EMOTION_RULES {
        if contains_any(&lower, triggers) {
            emotions.push(emotion);
        }
    }
    if emotions.is_empty() {
        emotions.push(if negative_count > 0 { Emotion::Stress } else { Emotion::Loneliness });
    }

    let risk_level = if crisis_flag {
        RiskLevel::High
    } else if negative_count > MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    if crisis_flag {
        // Entry text stays out of the logs on purpose.
        tracing::warn!(
            chars = text.chars().count(),
            negative_count,
            "crisis phrase detected in journal entry"
        );
    }

    Ok(EmotionalSignal {
        text: text.to_string(),
        emotions,
        sentiment,
        sentiment_score,
        risk_level,
        crisis_flag,
        support_mode,
    })
}

#[allow(clippy::cast_precision_loss)]
fn score_sentiment(negative: usize, positive: usize) -> (Sentiment, f32) {
    if negative > positive {
        let score = (0.5 - NEGATIVE_STEP * negative as f32).max(SCORE_FLOOR);
        (Sentiment::Negative, score)
    } else if positive > negative {
        let score = (0.5 + POSITIVE_STEP * positive as f32).min(SCORE_CEILING);
        (Sentiment::Positive, score)
    } else {
        (Sentiment::Neutral, 0.5)
    }
}
