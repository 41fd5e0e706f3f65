use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML roster overriding the built-in peer pool.
    pub peers_path: Option<PathBuf>,
    /// Upper bound on journal entry length, counted in characters.
    pub max_entry_chars: usize,
    /// Simulated "AI is analyzing" latency. Presentation pacing only; has
    /// no effect on any output. 0 disables it.
    pub analysis_delay_ms: u64,
    /// Simulated "finding your match" latency. Same caveats as above.
    pub matching_delay_ms: u64,
    /// Fixed seed for the canned-reply picker. Unset means seed from
    /// entropy at startup.
    pub reply_seed: Option<u64>,
}
