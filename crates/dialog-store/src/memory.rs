//! In-memory conversation store for testing

use crate::error::StoreResult;
use crate::ConversationStore;
use async_trait::async_trait;
use dialog_core::{AudioFields, ConversationDoc};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory conversation store
///
/// Backs tests and local development. Records which session ids were
/// created and which were partially updated so tests can assert the
/// upsert rule took the intended branch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<String, ConversationDoc>>,
    created: Mutex<Vec<String>>,
    updated: Mutex<Vec<String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing document
    pub fn insert(&self, doc: ConversationDoc) {
        self.docs
            .lock()
            .unwrap()
            .insert(doc.session_id.clone(), doc);
    }

    /// Session ids that were created, in order
    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    /// Session ids that had audio fields updated, in order
    pub fn updated(&self) -> Vec<String> {
        self.updated.lock().unwrap().clone()
    }

    /// Total number of writes (creates plus updates)
    pub fn write_count(&self) -> usize {
        self.created.lock().unwrap().len() + self.updated.lock().unwrap().len()
    }

    /// Fetch a document synchronously
    pub fn document(&self, session_id: &str) -> Option<ConversationDoc> {
        self.docs.lock().unwrap().get(session_id).cloned()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn get(&self, session_id: &str) -> StoreResult<Option<ConversationDoc>> {
        Ok(self.docs.lock().unwrap().get(session_id).cloned())
    }

    async fn update_audio(&self, session_id: &str, audio: &AudioFields) -> StoreResult<()> {
        let mut docs = self.docs.lock().unwrap();
        if let Some(doc) = docs.get_mut(session_id) {
            doc.audio = audio.clone();
        }
        drop(docs);

        self.updated.lock().unwrap().push(session_id.to_string());
        Ok(())
    }

    async fn create(&self, doc: &ConversationDoc) -> StoreResult<()> {
        self.docs
            .lock()
            .unwrap()
            .insert(doc.session_id.clone(), doc.clone());
        self.created.lock().unwrap().push(doc.session_id.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UpsertOutcome;
    use chrono::Utc;
    use dialog_core::ConversationTurn;
    use pretty_assertions::assert_eq;

    fn audio(transcript: &str) -> AudioFields {
        AudioFields::new("gs://recordings/s1.wav", transcript, Utc::now())
    }

    #[tokio::test]
    async fn test_upsert_creates_with_defaults() {
        let store = MemoryStore::new();
        let now = Utc::now();

        let outcome = store
            .upsert_audio("s1", audio("Speaker: hello"), now)
            .await
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Created);
        assert_eq!(store.created(), vec!["s1"]);
        assert!(store.updated().is_empty());

        let doc = store.document("s1").unwrap();
        assert_eq!(doc.channel, "Audio");
        assert_eq!(doc.status, "completed");
        assert_eq!(doc.start_time, now);
        assert!(doc.turns.is_empty());
        assert_eq!(doc.audio.audio_transcript, "Speaker: hello");
    }

    #[tokio::test]
    async fn test_upsert_updates_only_audio_fields() {
        let store = MemoryStore::new();
        let created_at = Utc::now();

        let mut existing =
            ConversationDoc::new("s1", audio("Speaker: old transcript"), created_at);
        existing.channel = "Chat".to_string();
        existing.status = "active".to_string();
        existing.turns.push(ConversationTurn {
            role: "student".to_string(),
            speaker: "Student".to_string(),
            text: "typed message".to_string(),
        });
        store.insert(existing);

        let outcome = store
            .upsert_audio("s1", audio("Student: new transcript"), Utc::now())
            .await
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(store.updated(), vec!["s1"]);
        assert!(store.created().is_empty());

        let doc = store.document("s1").unwrap();
        // Audio fields replaced
        assert_eq!(doc.audio.audio_transcript, "Student: new transcript");
        assert!(doc.audio.has_audio);
        // Everything else untouched
        assert_eq!(doc.channel, "Chat");
        assert_eq!(doc.status, "active");
        assert_eq!(doc.start_time, created_at);
        assert_eq!(doc.turns.len(), 1);
        assert_eq!(doc.turns[0].text, "typed message");
    }

    #[tokio::test]
    async fn test_write_count() {
        let store = MemoryStore::new();
        assert_eq!(store.write_count(), 0);

        store
            .upsert_audio("s1", audio("Speaker: a"), Utc::now())
            .await
            .unwrap();
        store
            .upsert_audio("s1", audio("Speaker: b"), Utc::now())
            .await
            .unwrap();

        assert_eq!(store.write_count(), 2);
        assert_eq!(store.created().len(), 1);
        assert_eq!(store.updated().len(), 1);
    }
}
