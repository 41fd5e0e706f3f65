use mirrorme_core::ConfigError;
use thiserror::Error;

/// Failure modes of building a peer directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Best-match selection falls back to the first profile, so an empty
    /// roster can never be wrapped.
    #[error("peer roster must contain at least one profile")]
    EmptyRoster,

    #[error("failed to load peer roster")]
    Roster(#[from] ConfigError),
}
