use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Emotion, SupportMode};

/// One peer in the matching roster.
///
/// Static reference data: profiles are declared (built-in or via a YAML
/// roster file), never created by the matching engine itself. The
/// `compatibility_score` is pre-assigned display data in `[0, 100]`, not a
/// similarity computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerProfile {
    pub id: String,
    pub display_name: String,
    pub avatar_ref: String,
    pub support_mode: SupportMode,
    pub bio: String,
    /// Emotion tags this profile carries; shown when a query has no signal
    /// of its own.
    pub base_emotions: Vec<Emotion>,
    pub compatibility_score: u8,
}

#[derive(Debug, Deserialize)]
pub struct PeersFile {
    pub peers: Vec<PeerProfile>,
}

/// Load and validate a peer roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_peers(path: &Path) -> Result<PeersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PeersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let peers_file: PeersFile =
        serde_yaml::from_str(&content).map_err(ConfigError::PeersFileParse)?;

    validate_peers(&peers_file)?;

    Ok(peers_file)
}

/// Validate a roster: non-empty, well-formed profiles, no duplicates.
///
/// # Errors
///
/// Returns `ConfigError::Validation` naming the first offending profile.
pub fn validate_peers(peers_file: &PeersFile) -> Result<(), ConfigError> {
    if peers_file.peers.is_empty() {
        return Err(ConfigError::Validation(
            "peer roster must contain at least one profile".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for peer in &peers_file.peers {
        if peer.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "peer id must be non-empty".to_string(),
            ));
        }

        if peer.display_name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "peer '{}' must have a non-empty display name",
                peer.id
            )));
        }

        if peer.compatibility_score > 100 {
            return Err(ConfigError::Validation(format!(
                "peer '{}' has compatibility score {}; must be 0-100",
                peer.id, peer.compatibility_score
            )));
        }

        if peer.base_emotions.is_empty() {
            return Err(ConfigError::Validation(format!(
                "peer '{}' must carry at least one emotion tag",
                peer.id
            )));
        }

        if !seen_ids.insert(peer.id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate peer id: '{}'",
                peer.id
            )));
        }

        let lower_name = peer.display_name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate peer display name: '{}'",
                peer.display_name
            )));
        }
    }

    Ok(())
}
