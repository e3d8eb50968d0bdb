//! Ingest handler implementation
//!
//! Orchestrates one storage-upload event end to end. Every failure past
//! the allow-list check is caught at the top and reported as an error
//! outcome; nothing is retried beyond the profile fallback and no partial
//! state is rolled back.

use crate::event::StorageEvent;
use crate::outcome::IngestOutcome;
use chrono::Utc;
use dialog_core::config::SpeechConfig;
use dialog_core::utils::{is_audio_object, session_id_from_object, storage_uri};
use dialog_core::AudioFields;
use dialog_speech::{RecognitionProfile, RecognizeResponse, SpeechClient, Transcript};
use dialog_store::{ConversationStore, UpsertOutcome};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{error, info, instrument, warn};

/// Skip reason reported for non-audio uploads
const NOT_AUDIO_REASON: &str = "not an audio file";

/// Error message reported when every profile fails
const PROFILES_EXHAUSTED: &str = "All audio configurations failed";

/// Handler for storage-upload events
pub struct IngestHandler {
    /// Recognition client
    speech: Arc<dyn SpeechClient>,

    /// Conversation document store
    store: Arc<dyn ConversationStore>,

    /// Recognition timing configuration
    speech_config: SpeechConfig,
}

impl std::fmt::Debug for IngestHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestHandler")
            .field("speech", &self.speech.name())
            .field("speech_config", &self.speech_config)
            .finish_non_exhaustive()
    }
}

impl IngestHandler {
    /// Create a new handler
    #[must_use]
    pub fn new(
        speech: Arc<dyn SpeechClient>,
        store: Arc<dyn ConversationStore>,
        speech_config: SpeechConfig,
    ) -> Self {
        Self {
            speech,
            store,
            speech_config,
        }
    }

    /// Handle one storage-upload event
    ///
    /// Returns a success outcome carrying the session id, a skip outcome
    /// for non-audio uploads, or an error outcome carrying a message.
    /// Never returns an error itself.
    #[instrument(skip(self), fields(bucket = %event.bucket, object = %event.name))]
    pub async fn handle(&self, event: &StorageEvent) -> IngestOutcome {
        if !is_audio_object(&event.name) {
            info!("Skipping non-audio upload");
            return IngestOutcome::skipped(NOT_AUDIO_REASON);
        }

        match self.process(event).await {
            Ok(session_id) => IngestOutcome::success(session_id),
            Err(e) => {
                error!(error = %e, "Audio ingest failed");
                IngestOutcome::error(e.to_string())
            }
        }
    }

    /// Process an audio upload
    ///
    /// # Errors
    ///
    /// Returns [`dialog_core::Error`] if every recognition profile fails
    /// or the document write fails.
    async fn process(&self, event: &StorageEvent) -> dialog_core::Result<String> {
        let session_id = session_id_from_object(&event.name);
        let audio_uri = storage_uri(&event.bucket, &event.name);

        info!(session_id, audio_uri, "Processing audio upload");

        let response = self.transcribe_with_fallback(&audio_uri).await?;
        let transcript = Transcript::assemble(&response);

        info!(lines = transcript.line_count(), "Assembled transcript");

        let now = Utc::now();
        let audio = AudioFields::new(audio_uri, transcript.text(), now);

        let outcome = self
            .store
            .upsert_audio(&session_id, audio, now)
            .await
            .map_err(dialog_core::Error::from)?;

        match outcome {
            UpsertOutcome::Created => info!(session_id, "Created new conversation"),
            UpsertOutcome::Updated => info!(session_id, "Updated existing conversation"),
        }

        Ok(session_id)
    }

    /// Try each recognition profile in order until one succeeds
    ///
    /// A failure or timeout on one profile is swallowed and the next is
    /// tried; if the whole chain fails the operation fails.
    async fn transcribe_with_fallback(
        &self,
        audio_uri: &str,
    ) -> dialog_core::Result<RecognizeResponse> {
        let attempt_timeout = self.speech_config.attempt_timeout();

        for (index, profile) in RecognitionProfile::fallback_chain().iter().enumerate() {
            let attempt = index + 1;
            info!(attempt, profile = %profile, "Trying recognition profile");

            match timeout(attempt_timeout, self.speech.recognize(audio_uri, profile)).await {
                Ok(Ok(response)) => {
                    info!(attempt, profile = %profile, "Recognition succeeded");
                    return Ok(response);
                }
                Ok(Err(e)) => {
                    warn!(attempt, profile = %profile, error = %e, "Recognition profile failed");
                }
                Err(_) => {
                    warn!(
                        attempt,
                        profile = %profile,
                        timeout_seconds = self.speech_config.attempt_timeout_seconds,
                        "Recognition attempt timed out"
                    );
                }
            }
        }

        Err(dialog_core::Error::Transcription(
            PROFILES_EXHAUSTED.to_string(),
        ))
    }
}
