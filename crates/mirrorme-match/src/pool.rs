//! The peer roster and the directory wrapper around it.

use std::path::Path;

use mirrorme_core::peers::{load_peers, PeerProfile};
use mirrorme_core::{Emotion, SupportMode};

use crate::error::DirectoryError;

/// The built-in four-profile roster, in ranking order: the profile with the
/// highest pre-assigned score is declared first and the ranker preserves
/// declaration order.
#[must_use]
pub fn builtin_peers() -> Vec<PeerProfile> {
    vec![
        PeerProfile {
            id: "1".to_string(),
            display_name: "TranquilRiver42".to_string(),
            avatar_ref:
                "https://ui-avatars.com/api/?name=TR&background=4f6ef7&color=fff&rounded=true&size=128"
                    .to_string(),
            support_mode: SupportMode::Vent,
            bio: "Going through a tough career transition. I know what burnout feels like and \
                  I'm here to listen without judgment."
                .to_string(),
            base_emotions: vec![Emotion::Anxiety, Emotion::Stress],
            compatibility_score: 91,
        },
        PeerProfile {
            id: "2".to_string(),
            display_name: "StillWater88".to_string(),
            avatar_ref:
                "https://ui-avatars.com/api/?name=SW&background=7c3aed&color=fff&rounded=true&size=128"
                    .to_string(),
            support_mode: SupportMode::Advice,
            bio: "Navigating grief and slowly finding meaning. I believe in sharing wisdom and \
                  coping strategies that actually work."
                .to_string(),
            base_emotions: vec![Emotion::Loneliness, Emotion::Grief],
            compatibility_score: 84,
        },
        PeerProfile {
            id: "3".to_string(),
            display_name: "GentleBreeze17".to_string(),
            avatar_ref:
                "https://ui-avatars.com/api/?name=GB&background=2563eb&color=fff&rounded=true&size=128"
                    .to_string(),
            support_mode: SupportMode::Accountability,
            bio: "Recovering from burnout, one day at a time. Accountability helps me immensely \
                  \u{2014} let's keep each other on track."
                .to_string(),
            base_emotions: vec![Emotion::Burnout, Emotion::Stress],
            compatibility_score: 78,
        },
        PeerProfile {
            id: "4".to_string(),
            display_name: "QuietMeadow55".to_string(),
            avatar_ref:
                "https://ui-avatars.com/api/?name=QM&background=059669&color=fff&rounded=true&size=128"
                    .to_string(),
            support_mode: SupportMode::Vent,
            bio: "Dealing with chronic anxiety and learning to sit with discomfort. Your \
                  feelings are always valid here."
                .to_string(),
            base_emotions: vec![Emotion::Anxiety],
            compatibility_score: 73,
        },
    ]
}

/// A validated, non-empty peer roster.
#[derive(Debug, Clone)]
pub struct PeerDirectory {
    peers: Vec<PeerProfile>,
}

impl PeerDirectory {
    /// Wrap an already-validated roster.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::EmptyRoster`] when `peers` is empty.
    pub fn new(peers: Vec<PeerProfile>) -> Result<Self, DirectoryError> {
        if peers.is_empty() {
            return Err(DirectoryError::EmptyRoster);
        }
        Ok(Self { peers })
    }

    /// Directory over the built-in roster.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            peers: builtin_peers(),
        }
    }

    /// Load and validate a roster from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Roster`] when the file cannot be read,
    /// parsed, or fails validation.
    pub fn from_yaml(path: &Path) -> Result<Self, DirectoryError> {
        let peers_file = load_peers(path)?;
        Self::new(peers_file.peers)
    }

    #[must_use]
    pub fn peers(&self) -> &[PeerProfile] {
        &self.peers
    }

    /// How many profiles the roster holds. Always at least one.
    #[must_use]
    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }
}

impl Default for PeerDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorme_core::peers::{validate_peers, PeersFile};

    #[test]
    fn builtin_roster_is_ordered_by_score() {
        let peers = builtin_peers();
        assert_eq!(peers.len(), 4);
        for pair in peers.windows(2) {
            assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
        }
    }

    #[test]
    fn builtin_roster_passes_validation() {
        let peers_file = PeersFile {
            peers: builtin_peers(),
        };
        assert!(validate_peers(&peers_file).is_ok());
    }

    #[test]
    fn empty_roster_is_rejected() {
        let err = PeerDirectory::new(vec![]).unwrap_err();
        assert!(matches!(err, DirectoryError::EmptyRoster));
    }

    #[test]
    fn directory_defaults_to_builtin_roster() {
        let directory = PeerDirectory::default();
        assert_eq!(directory.peer_count(), 4);
        assert_eq!(directory.peers()[0].display_name, "TranquilRiver42");
    }

    #[test]
    fn from_yaml_reports_missing_file() {
        let err = PeerDirectory::from_yaml(Path::new("/nonexistent/peers.yaml")).unwrap_err();
        assert!(matches!(err, DirectoryError::Roster(_)));
    }
}
