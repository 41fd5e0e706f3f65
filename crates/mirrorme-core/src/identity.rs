//! Anonymous display identities.
//!
//! Every account is presented under a generated nature-themed name plus an
//! avatar URL; nothing user-identifying is ever shown to a peer. All picks
//! flow through a caller-supplied RNG so tests (and demos) can fix the seed.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::Rng;
use serde::{Deserialize, Serialize};

const NAME_STEMS: &[&str] = &[
    "CalmOcean",
    "GentleBreeze",
    "SoftMountain",
    "TranquilRiver",
    "QuietMeadow",
    "PeacefulSky",
    "SereneMoon",
    "StillWater",
    "WarmSunrise",
    "DawnHorizon",
    "CrystalDew",
    "MildWillow",
    "SoftEcho",
    "WhisperPine",
    "TenderCloud",
];

const AVATAR_COLORS: &[&str] = &["4f46e5", "7c3aed", "2563eb", "0891b2", "059669"];

/// A generated anonymous display identity: name plus avatar URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymousIdentity {
    pub name: String,
    pub avatar_url: String,
}

impl AnonymousIdentity {
    /// Generate a fresh identity: one of the fixed name stems with a
    /// numeric suffix in `0..999`, and a matching avatar URL.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stem = NAME_STEMS[rng.random_range(0..NAME_STEMS.len())];
        let suffix = rng.random_range(0..999u16);
        let name = format!("{stem}{suffix}");
        let avatar_url = avatar_url(&name, rng);
        Self { name, avatar_url }
    }
}

/// Build a ui-avatars URL for `name` with one of the fixed background colors.
///
/// The name is percent-encoded before it goes into the query string.
pub fn avatar_url<R: Rng + ?Sized>(name: &str, rng: &mut R) -> String {
    let color = AVATAR_COLORS[rng.random_range(0..AVATAR_COLORS.len())];
    let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC).to_string();
    format!(
        "https://ui-avatars.com/api/?name={encoded}&background={color}&color=fff&rounded=true&size=128"
    )
}
