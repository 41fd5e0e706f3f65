use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read peers file at {path}: {source}")]
    PeersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse peers file: {0}")]
    PeersFileParse(#[from] serde_yaml::Error),

    #[error("peers config validation failed: {0}")]
    Validation(String),
}
