//! Keyword moderation of outgoing chat messages.

use serde::{Deserialize, Serialize};

/// Crisis terms for chat messages. Shorter than the journal crisis list on
/// purpose: chat moderation answers "should this message be sent", not
/// "how is this person doing overall".
pub const CRISIS_TERMS: &[&str] = &["suicide", "kill myself", "end it all", "self-harm"];

/// Generic toxicity terms.
pub const TOXIC_TERMS: &[&str] = &[
    "hate",
    "kill",
    "stupid",
    "idiot",
    "worthless",
    "shut up",
    "loser",
];

/// Warning shown when a message is blocked for crisis content.
pub const CRISIS_WARNING: &str =
    "This message has been flagged for containing crisis content. Please call 988 for immediate support.";

/// Warning shown when a message is blocked for toxicity.
pub const TOXIC_WARNING: &str = "Message blocked: Please keep our space supportive and kind.";

/// Why a message was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockReason {
    Crisis,
    Toxicity,
}

/// Outcome of moderating one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationVerdict {
    Allowed,
    Blocked {
        reason: BlockReason,
        warning: &'static str,
    },
}

impl ModerationVerdict {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, ModerationVerdict::Blocked { .. })
    }

    /// The user-facing warning, when blocked.
    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            ModerationVerdict::Allowed => None,
            ModerationVerdict::Blocked { warning, .. } => Some(warning),
        }
    }
}

/// Scan a message before it is sent.
///
/// Case-insensitive substring scan. The crisis list runs first because its
/// phrases contain toxicity terms ("kill myself" must flag as crisis, not as
/// generic toxicity). Message text itself stays out of the logs.
#[must_use]
pub fn moderate_message(text: &str) -> ModerationVerdict {
    let lower = text.to_lowercase();
    if CRISIS_TERMS.iter().any(|term| lower.contains(term)) {
        tracing::warn!(chars = text.chars().count(), "chat message blocked for crisis content");
        return ModerationVerdict::Blocked {
            reason: BlockReason::Crisis,
            warning: CRISIS_WARNING,
        };
    }
    if TOXIC_TERMS.iter().any(|term| lower.contains(term)) {
        tracing::debug!("chat message blocked for toxicity");
        return ModerationVerdict::Blocked {
            reason: BlockReason::Toxicity,
            warning: TOXIC_WARNING,
        };
    }
    ModerationVerdict::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_message_is_allowed() {
        let verdict = moderate_message("Today was hard but I got through it");
        assert_eq!(verdict, ModerationVerdict::Allowed);
        assert!(!verdict.is_blocked());
        assert_eq!(verdict.warning(), None);
    }

    #[test]
    fn crisis_term_blocks_with_lifeline_warning() {
        let verdict = moderate_message("I keep thinking about suicide");
        assert_eq!(
            verdict,
            ModerationVerdict::Blocked {
                reason: BlockReason::Crisis,
                warning: CRISIS_WARNING,
            }
        );
        assert!(verdict.warning().is_some_and(|w| w.contains("988")));
    }

    #[test]
    fn toxic_term_blocks_with_kindness_warning() {
        let verdict = moderate_message("you are such an idiot");
        assert_eq!(
            verdict,
            ModerationVerdict::Blocked {
                reason: BlockReason::Toxicity,
                warning: TOXIC_WARNING,
            }
        );
    }

    #[test]
    fn crisis_wins_over_toxicity() {
        // "kill myself" contains the toxic term "kill"; the crisis scan
        // must claim it first.
        let verdict = moderate_message("sometimes I want to kill myself");
        assert_eq!(
            verdict,
            ModerationVerdict::Blocked {
                reason: BlockReason::Crisis,
                warning: CRISIS_WARNING,
            }
        );
    }

    #[test]
    fn scan_ignores_case() {
        assert!(moderate_message("SHUT UP").is_blocked());
        assert!(moderate_message("Self-Harm").is_blocked());
    }

    #[test]
    fn scan_matches_substrings() {
        // "skillful" contains "kill". The scan is substring-based and that
        // includes false positives like this one.
        let verdict = moderate_message("she is very skillful");
        assert_eq!(
            verdict,
            ModerationVerdict::Blocked {
                reason: BlockReason::Toxicity,
                warning: TOXIC_WARNING,
            }
        );
    }
}
