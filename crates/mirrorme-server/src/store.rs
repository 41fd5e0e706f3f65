//! In-memory stores backing the API.
//!
//! Nothing here survives a restart. The journal keeps entries newest first;
//! sessions are keyed by the id handed out at login.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mirrorme_core::JournalEntry;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// One logged-in user as the API sees them. The email is taken at face
/// value and never verified; the identity attached to it is fabricated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub anonymous_name: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

/// Journal history, newest entry first.
#[derive(Clone, Default)]
pub struct JournalStore {
    entries: Arc<RwLock<Vec<JournalEntry>>>,
}

impl JournalStore {
    pub async fn insert(&self, entry: JournalEntry) {
        self.entries.write().await.insert(0, entry);
    }

    pub async fn list(&self) -> Vec<JournalEntry> {
        self.entries.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<JournalEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }
}

/// Login sessions keyed by profile id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl SessionStore {
    pub async fn insert(&self, profile: UserProfile) {
        self.sessions.write().await.insert(profile.id, profile);
    }

    pub async fn get(&self, id: Uuid) -> Option<UserProfile> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn remove(&self, id: Uuid) -> Option<UserProfile> {
        self.sessions.write().await.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorme_core::{Emotion, EmotionalSignal, RiskLevel, Sentiment, SupportMode};

    fn entry(text: &str) -> JournalEntry {
        JournalEntry::new(EmotionalSignal {
            text: text.to_string(),
            emotions: vec![Emotion::Stress],
            sentiment: Sentiment::Negative,
            sentiment_score: 0.43,
            risk_level: RiskLevel::Low,
            crisis_flag: false,
            support_mode: SupportMode::Vent,
        })
    }

    #[tokio::test]
    async fn journal_lists_newest_first() {
        let store = JournalStore::default();
        store.insert(entry("first")).await;
        store.insert(entry("second")).await;

        let entries = store.list().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].signal.text, "second");
        assert_eq!(entries[1].signal.text, "first");
    }

    #[tokio::test]
    async fn journal_finds_entries_by_id() {
        let store = JournalStore::default();
        let stored = entry("hello");
        let id = stored.id;
        store.insert(stored).await;

        assert!(store.get(id).await.is_some());
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn sessions_can_be_removed_once() {
        let store = SessionStore::default();
        let profile = UserProfile {
            id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
            anonymous_name: "CalmOcean512".to_string(),
            avatar_url: "https://ui-avatars.com/api/?name=CalmOcean512".to_string(),
            created_at: Utc::now(),
        };
        let id = profile.id;
        store.insert(profile).await;

        assert!(store.get(id).await.is_some());
        assert!(store.remove(id).await.is_some());
        assert!(store.remove(id).await.is_none());
        assert!(store.get(id).await.is_none());
    }
}
