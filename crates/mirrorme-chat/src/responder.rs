//! Canned peer replies for the simulated conversation partner.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The supportive replies a peer can send, picked uniformly at random.
pub const PEER_REPLIES: &[&str] = &[
    "I really understand what you're going through. It takes courage to share that.",
    "Thank you for opening up. I've been feeling something very similar lately.",
    "That resonates deeply with me. You're not alone in this.",
    "I hear you. The feelings you're describing are so valid.",
    "I went through something similar. What helped me was taking it one day at a time.",
    "It's okay to feel that way. How can I best support you right now?",
    "I appreciate you sharing that. It helps me feel less alone too.",
];

/// Minimum pause before a simulated reply lands.
pub const REPLY_DELAY_BASE_MS: u64 = 1800;
/// Extra random pause on top of the base, exclusive upper bound.
pub const REPLY_DELAY_JITTER_MS: u64 = 1200;

/// The message a peer opens a new session with.
#[must_use]
pub fn opening_message(peer_name: &str) -> String {
    format!(
        "Hi! I'm {peer_name}. I read that you're going through some tough emotions. \
         I've been there too. How are you doing right now?"
    )
}

/// Picks canned replies and pacing delays from an owned RNG.
///
/// Seed it explicitly to make the reply sequence reproducible; `default()`
/// seeds from OS entropy.
pub struct PeerResponder {
    rng: StdRng,
}

impl PeerResponder {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The next reply in this responder's sequence.
    pub fn next_reply(&mut self) -> &'static str {
        PEER_REPLIES[self.rng.random_range(0..PEER_REPLIES.len())]
    }

    /// How long the peer "types" before the reply lands.
    pub fn reply_delay(&mut self) -> Duration {
        Duration::from_millis(REPLY_DELAY_BASE_MS + self.rng.random_range(0..REPLY_DELAY_JITTER_MS))
    }
}

impl Default for PeerResponder {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_come_from_the_fixed_table() {
        let mut responder = PeerResponder::from_seed(7);
        for _ in 0..50 {
            let reply = responder.next_reply();
            assert!(PEER_REPLIES.contains(&reply));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = PeerResponder::from_seed(42);
        let mut b = PeerResponder::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.next_reply(), b.next_reply());
        }
    }

    #[test]
    fn reply_delay_stays_in_band() {
        let mut responder = PeerResponder::from_seed(3);
        for _ in 0..50 {
            let delay = responder.reply_delay();
            assert!(delay >= Duration::from_millis(REPLY_DELAY_BASE_MS));
            assert!(delay < Duration::from_millis(REPLY_DELAY_BASE_MS + REPLY_DELAY_JITTER_MS));
        }
    }

    #[test]
    fn opening_message_names_the_peer() {
        let message = opening_message("TranquilRiver42");
        assert!(message.starts_with("Hi! I'm TranquilRiver42."));
        assert!(message.ends_with("How are you doing right now?"));
    }
}
