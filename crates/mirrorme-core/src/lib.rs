//! Shared domain types and configuration for the MirrorMe workspace.
//!
//! Holds the closed enums the whole system speaks in (support modes,
//! sentiment classes, risk levels, emotion tags), the analyzed-signal and
//! journal-entry records, the peer roster with its YAML loader, anonymous
//! identity generation, and env-based application configuration.

pub mod identity;
pub mod peers;

mod app_config;
mod config;
mod error;
mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use types::{
    Emotion, EmotionalSignal, JournalEntry, MatchFilter, RiskLevel, Sentiment, SupportMode,
};
