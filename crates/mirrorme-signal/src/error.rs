use thiserror::Error;

/// Failure modes of signal extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    /// Input was empty or whitespace-only. Callers are expected to reject
    /// blank entries at their own boundary, so hitting this is a bug there.
    #[error("journal text must not be empty")]
    EmptyText,
}
