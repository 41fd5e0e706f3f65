//! Ranking entry points and the shapes they return.

use mirrorme_core::peers::PeerProfile;
use mirrorme_core::{Emotion, EmotionalSignal, MatchFilter};
use serde::{Deserialize, Serialize};

use crate::pool::PeerDirectory;

/// At most this many shared-emotion tags are surfaced per match.
pub const SHARED_EMOTION_LIMIT: usize = 2;

/// Display grade for a pre-assigned compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Excellent,
    Strong,
    Good,
}

impl MatchQuality {
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        if score >= 85 {
            MatchQuality::Excellent
        } else if score >= 70 {
            MatchQuality::Strong
        } else {
            MatchQuality::Good
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MatchQuality::Excellent => "Excellent Match",
            MatchQuality::Strong => "Strong Match",
            MatchQuality::Good => "Good Match",
        }
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One ranked peer as surfaced to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub peer: PeerProfile,
    pub quality: MatchQuality,
    /// Emotions shown as "shared" on the match card. Copied from the query
    /// signal when one was supplied, the peer's own tags otherwise.
    pub shared_emotions: Vec<Emotion>,
}

fn shared_from(emotions: &[Emotion]) -> Vec<Emotion> {
    emotions.iter().copied().take(SHARED_EMOTION_LIMIT).collect()
}

fn ranked(peer: &PeerProfile, shared_emotions: Vec<Emotion>) -> RankedMatch {
    RankedMatch {
        quality: MatchQuality::for_score(peer.compatibility_score),
        shared_emotions,
        peer: peer.clone(),
    }
}

impl PeerDirectory {
    /// The browse-view ranking: roster filtered by `filter`, declaration
    /// order preserved, no re-sorting.
    ///
    /// Returns the filtered subset as-is. A filter that matches nobody
    /// yields an empty list; there is no fallback here, unlike
    /// [`find_best_match`](Self::find_best_match).
    #[must_use]
    pub fn rank_matches(
        &self,
        signal: Option<&EmotionalSignal>,
        filter: MatchFilter,
    ) -> Vec<RankedMatch> {
        self.peers()
            .iter()
            .filter(|peer| filter.allows(peer.support_mode))
            .map(|peer| {
                let shared = match signal {
                    Some(signal) => shared_from(&signal.emotions),
                    None => shared_from(&peer.base_emotions),
                };
                ranked(peer, shared)
            })
            .collect()
    }

    /// The single-match flow: first roster profile whose mode equals the
    /// signal's support mode, or the head of the roster when no profile
    /// matches. Shared emotions always come from the signal.
    #[must_use]
    pub fn find_best_match(&self, signal: &EmotionalSignal) -> RankedMatch {
        let filter = MatchFilter::from(signal.support_mode);
        let peer = self
            .peers()
            .iter()
            .find(|peer| filter.allows(peer.support_mode))
            // Roster is validated non-empty at construction.
            .unwrap_or(&self.peers()[0]);
        ranked(peer, shared_from(&signal.emotions))
    }
}
