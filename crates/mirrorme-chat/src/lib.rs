//! Chat safety layer for mirrorme.
//!
//! Two small pieces: keyword moderation of outgoing messages, and a canned
//! peer-reply picker for the simulated conversation partner. Moderation is a
//! total, deterministic function; reply selection draws from an owned RNG
//! seeded at construction so tests and demos can pin the sequence.

pub mod moderation;
pub mod responder;

pub use moderation::{moderate_message, BlockReason, ModerationVerdict};
pub use responder::{opening_message, PeerResponder};
