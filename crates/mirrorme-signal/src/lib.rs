//! Journal text analysis for mirrorme.
//!
//! Turns a free-text journal entry into a structured [`EmotionalSignal`]:
//! sentiment class with a score, emotion tags, a risk level, and a crisis
//! flag. Classification is driven entirely by fixed keyword lexicons, so the
//! same text always produces the same signal. No model, no network, no I/O.
//!
//! [`EmotionalSignal`]: mirrorme_core::EmotionalSignal

pub mod error;
pub mod extractor;
pub mod lexicon;

pub use error::SignalError;
pub use extractor::extract_signal;
