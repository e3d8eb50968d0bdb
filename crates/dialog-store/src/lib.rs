//! Conversation document store for the audio pipeline
//!
//! Provides a pluggable document store seam around the managed document
//! database: existence check, field-masked partial update, full set, and
//! the composed upsert rule the ingest path relies on (audio fields only
//! on existing documents, full record with defaults otherwise).

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::uninlined_format_args
)]

pub mod error;
pub mod fields;
pub mod firestore;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dialog_core::{AudioFields, ConversationDoc};

/// Names of the document fields the ingest path may overwrite
pub const AUDIO_FIELD_PATHS: &[&str] = &[
    "audioFileUrl",
    "audioTranscript",
    "audioTranscribedAt",
    "hasAudio",
];

/// How an upsert landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new document was created with the creation-time defaults
    Created,
    /// An existing document had only its audio fields overwritten
    Updated,
}

/// Core trait for conversation store implementations
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Fetch a document by session id, `None` if absent
    async fn get(&self, session_id: &str) -> StoreResult<Option<ConversationDoc>>;

    /// Overwrite only the audio fields of an existing document
    async fn update_audio(&self, session_id: &str, audio: &AudioFields) -> StoreResult<()>;

    /// Write a full document
    async fn create(&self, doc: &ConversationDoc) -> StoreResult<()>;

    /// Upsert the audio fields of a session's document
    ///
    /// If the document exists, only the audio fields are overwritten and
    /// everything else is untouched; otherwise a full record is created
    /// with the default start time (`now`), channel, status and an empty
    /// turn list.
    async fn upsert_audio(
        &self,
        session_id: &str,
        audio: AudioFields,
        now: DateTime<Utc>,
    ) -> StoreResult<UpsertOutcome> {
        if self.get(session_id).await?.is_some() {
            self.update_audio(session_id, &audio).await?;
            Ok(UpsertOutcome::Updated)
        } else {
            let doc = ConversationDoc::new(session_id, audio, now);
            self.create(&doc).await?;
            Ok(UpsertOutcome::Created)
        }
    }
}
