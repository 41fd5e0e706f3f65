//! Peer-compatibility ranking for mirrorme.
//!
//! Wraps a validated peer roster in a [`PeerDirectory`] and exposes the two
//! ranking entry points: [`PeerDirectory::rank_matches`] for the browse view
//! (filtered roster, declaration order, possibly empty) and
//! [`PeerDirectory::find_best_match`] for the single-match flow (always
//! produces a peer, falling back to the head of the roster). Scores are
//! pre-assigned reference data; nothing here computes similarity.

pub mod error;
pub mod pool;
pub mod ranker;

pub use error::DirectoryError;
pub use pool::{builtin_peers, PeerDirectory};
pub use ranker::{MatchQuality, RankedMatch, SHARED_EMOTION_LIMIT};
