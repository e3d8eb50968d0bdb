//! Core recognition client trait

use crate::error::SpeechResult;
use crate::profile::RecognitionProfile;
use crate::types::RecognizeResponse;
use async_trait::async_trait;

/// Core trait for recognition client implementations
///
/// This trait defines the interface every recognition backend must
/// implement, allowing the real service client and the mock to be used
/// interchangeably by the ingest handler.
#[async_trait]
pub trait SpeechClient: Send + Sync {
    /// Transcribe the audio at `audio_uri` using one recognition profile
    ///
    /// Blocks until the service completes the recognition or fails. The
    /// caller bounds each attempt with its own timeout; implementations do
    /// not enforce one themselves.
    async fn recognize(
        &self,
        audio_uri: &str,
        profile: &RecognitionProfile,
    ) -> SpeechResult<RecognizeResponse>;

    /// Get client name for logging
    fn name(&self) -> &str;
}
