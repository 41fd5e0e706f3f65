use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of support a user is asking for when they write an entry.
///
/// Supplied by the caller alongside the journal text; never derived from
/// the text itself. Gates which peers are eligible for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportMode {
    Vent,
    Advice,
    Accountability,
}

impl SupportMode {
    /// Display label shown on peer cards, e.g. `"Vent Mode"`.
    ///
    /// This is the one place the mode→label mapping lives; every surface
    /// that needs the label goes through it.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SupportMode::Vent => "Vent Mode",
            SupportMode::Advice => "Advice Mode",
            SupportMode::Accountability => "Accountability Mode",
        }
    }
}

impl std::fmt::Display for SupportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupportMode::Vent => write!(f, "vent"),
            SupportMode::Advice => write!(f, "advice"),
            SupportMode::Accountability => write!(f, "accountability"),
        }
    }
}

/// Mode filter accepted by the list-view ranking operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFilter {
    #[default]
    All,
    Vent,
    Advice,
    Accountability,
}

impl MatchFilter {
    /// Whether a peer in `mode` passes this filter.
    #[must_use]
    pub fn allows(self, mode: SupportMode) -> bool {
        match self {
            MatchFilter::All => true,
            MatchFilter::Vent => mode == SupportMode::Vent,
            MatchFilter::Advice => mode == SupportMode::Advice,
            MatchFilter::Accountability => mode == SupportMode::Accountability,
        }
    }
}

impl From<SupportMode> for MatchFilter {
    fn from(mode: SupportMode) -> Self {
        match mode {
            SupportMode::Vent => MatchFilter::Vent,
            SupportMode::Advice => MatchFilter::Advice,
            SupportMode::Accountability => MatchFilter::Accountability,
        }
    }
}

/// Overall sentiment class of one journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk classification of one journal entry.
///
/// `High` is driven by the crisis flag; callers must still check
/// [`EmotionalSignal::crisis_flag`] separately; the two fields are
/// surfaced independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion tags the extractor can assign, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxiety,
    Stress,
    Grief,
    Loneliness,
    Burnout,
}

impl Emotion {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anxiety => "anxiety",
            Emotion::Stress => "stress",
            Emotion::Grief => "grief",
            Emotion::Loneliness => "loneliness",
            Emotion::Burnout => "burnout",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured emotional/risk profile derived from one journal text.
///
/// Produced once per submitted text and immutable thereafter. `emotions`
/// is never empty (the extractor's fallback rules guarantee a tag) and
/// `sentiment_score` is hard-clamped to `[0.1, 0.95]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalSignal {
    /// The submitted text, exactly as received.
    pub text: String,
    /// Emotion tags in extractor priority order.
    pub emotions: Vec<Emotion>,
    pub sentiment: Sentiment,
    pub sentiment_score: f32,
    pub risk_level: RiskLevel,
    /// True iff a crisis phrase matched. Reported independently of
    /// `risk_level` even though it drives it.
    pub crisis_flag: bool,
    /// The support mode the caller asked for; never derived from the text.
    pub support_mode: SupportMode,
}

/// One stored journal entry: a signal plus the identifier and timestamp
/// its owning store assigned. The id and timestamp are the only
/// non-deterministic parts; the signal itself is a pure function of the
/// text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub signal: EmotionalSignal,
}

impl JournalEntry {
    /// Wrap a freshly extracted signal with a new id and timestamp.
    #[must_use]
    pub fn new(signal: EmotionalSignal) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_mode_labels_are_exhaustive() {
        assert_eq!(SupportMode::Vent.label(), "Vent Mode");
        assert_eq!(SupportMode::Advice.label(), "Advice Mode");
        assert_eq!(SupportMode::Accountability.label(), "Accountability Mode");
    }

    #[test]
    fn support_mode_serializes_lowercase() {
        let json = serde_json::to_string(&SupportMode::Accountability).expect("serialize");
        assert_eq!(json, "\"accountability\"");
    }

    #[test]
    fn match_filter_all_allows_every_mode() {
        for mode in [
            SupportMode::Vent,
            SupportMode::Advice,
            SupportMode::Accountability,
        ] {
            assert!(MatchFilter::All.allows(mode), "All should allow {mode}");
        }
    }

    #[test]
    fn match_filter_specific_mode_excludes_others() {
        assert!(MatchFilter::Advice.allows(SupportMode::Advice));
        assert!(!MatchFilter::Advice.allows(SupportMode::Vent));
        assert!(!MatchFilter::Advice.allows(SupportMode::Accountability));
    }

    #[test]
    fn match_filter_from_support_mode_round_trips() {
        assert_eq!(MatchFilter::from(SupportMode::Vent), MatchFilter::Vent);
        assert_eq!(MatchFilter::from(SupportMode::Advice), MatchFilter::Advice);
        assert_eq!(
            MatchFilter::from(SupportMode::Accountability),
            MatchFilter::Accountability
        );
    }

    #[test]
    fn match_filter_defaults_to_all() {
        assert_eq!(MatchFilter::default(), MatchFilter::All);
    }

    #[test]
    fn emotion_deserializes_from_lowercase() {
        let emotion: Emotion = serde_json::from_str("\"loneliness\"").expect("deserialize");
        assert_eq!(emotion, Emotion::Loneliness);
    }

    #[test]
    fn journal_entry_flattens_signal_fields() {
        let entry = JournalEntry::new(EmotionalSignal {
            text: "quiet day".to_string(),
            emotions: vec![Emotion::Loneliness],
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.5,
            risk_level: RiskLevel::Low,
            crisis_flag: false,
            support_mode: SupportMode::Vent,
        });
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["text"].as_str(), Some("quiet day"));
        assert_eq!(json["sentiment"].as_str(), Some("neutral"));
        assert!(json["id"].is_string());
        assert!(json.get("signal").is_none(), "signal should be flattened");
    }

    #[test]
    fn risk_level_orders_low_to_high() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }
}
