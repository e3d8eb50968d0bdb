//! Mock recognition client for testing

use crate::client::SpeechClient;
use crate::error::{SpeechError, SpeechResult};
use crate::profile::RecognitionProfile;
use crate::types::{RecognitionAlternative, RecognizeResponse, WordInfo};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::{Duration, sleep};

/// Scripted outcome for one recognition attempt
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return this response
    Succeed(RecognizeResponse),
    /// Fail with this message
    Fail(String),
    /// Never complete (the caller's timeout fires)
    Hang,
}

/// A recorded recognition attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Audio source locator that was passed
    pub audio_uri: String,
    /// Profile summary (encoding @ rate)
    pub profile: String,
}

/// Mock recognition client with scripted per-attempt outcomes
///
/// Outcomes are consumed in order, one per `recognize` call. When the
/// script runs dry, the configured default response is returned if one is
/// set; otherwise the attempt fails.
#[derive(Debug, Default)]
pub struct MockSpeechClient {
    /// Scripted outcomes, consumed front to back
    outcomes: Mutex<VecDeque<MockOutcome>>,

    /// Response returned once the script is exhausted
    default_response: Option<RecognizeResponse>,

    /// Recorded attempts
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSpeechClient {
    /// Create a mock with no scripted outcomes (every attempt fails)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next attempt to succeed with `response`
    #[must_use]
    pub fn with_success(self, response: RecognizeResponse) -> Self {
        self.push(MockOutcome::Succeed(response))
    }

    /// Script the next attempt to fail
    #[must_use]
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(MockOutcome::Fail(message.into()))
    }

    /// Script the next attempt to hang past any timeout
    #[must_use]
    pub fn with_hang(self) -> Self {
        self.push(MockOutcome::Hang)
    }

    /// Return `response` for every attempt not covered by the script
    #[must_use]
    pub fn with_default_response(mut self, response: RecognizeResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    fn push(self, outcome: MockOutcome) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    /// Number of recognition attempts made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Recorded attempts, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Canned diarized response covering the common two-speaker exchange
    #[must_use]
    pub fn diarized_response() -> RecognizeResponse {
        RecognizeResponse::single(RecognitionAlternative {
            transcript: "hi there ok".to_string(),
            confidence: Some(0.9),
            words: vec![
                WordInfo::tagged("hi", 1),
                WordInfo::tagged("there", 1),
                WordInfo::tagged("ok", 2),
            ],
        })
    }
}

#[async_trait]
impl SpeechClient for MockSpeechClient {
    async fn recognize(
        &self,
        audio_uri: &str,
        profile: &RecognitionProfile,
    ) -> SpeechResult<RecognizeResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            audio_uri: audio_uri.to_string(),
            profile: profile.to_string(),
        });

        let outcome = self.outcomes.lock().unwrap().pop_front();

        match outcome {
            Some(MockOutcome::Succeed(response)) => Ok(response),
            Some(MockOutcome::Fail(message)) => Err(SpeechError::operation_failed(message)),
            Some(MockOutcome::Hang) => {
                sleep(Duration::from_secs(86_400)).await;
                Err(SpeechError::operation_failed("hang elapsed"))
            }
            None => match &self.default_response {
                Some(response) => Ok(response.clone()),
                None => Err(SpeechError::operation_failed("mock script exhausted")),
            },
        }
    }

    fn name(&self) -> &str {
        "mock-speech"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile() -> RecognitionProfile {
        RecognitionProfile::fallback_chain().remove(0)
    }

    #[tokio::test]
    async fn test_scripted_outcomes_in_order() {
        let mock = MockSpeechClient::new()
            .with_failure("first fails")
            .with_success(MockSpeechClient::diarized_response());

        let err = mock.recognize("gs://b/a.wav", &profile()).await.unwrap_err();
        assert!(format!("{err}").contains("first fails"));

        let response = mock.recognize("gs://b/a.wav", &profile()).await.unwrap();
        assert_eq!(response.results.len(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_script_fails_by_default() {
        let mock = MockSpeechClient::new();
        let err = mock.recognize("gs://b/a.wav", &profile()).await.unwrap_err();
        assert!(format!("{err}").contains("mock script exhausted"));
    }

    #[tokio::test]
    async fn test_default_response_after_script() {
        let mock = MockSpeechClient::new()
            .with_default_response(MockSpeechClient::diarized_response());

        let response = mock.recognize("gs://b/a.wav", &profile()).await.unwrap();
        assert_eq!(response.results[0].alternatives[0].transcript, "hi there ok");
    }

    #[tokio::test]
    async fn test_records_calls() {
        let mock = MockSpeechClient::new()
            .with_failure("nope")
            .with_default_response(MockSpeechClient::diarized_response());

        let _ = mock.recognize("gs://b/one.wav", &profile()).await;
        let _ = mock.recognize("gs://b/one.wav", &profile()).await;

        assert_eq!(mock.call_count(), 2);
        let calls = mock.calls();
        assert_eq!(calls[0].audio_uri, "gs://b/one.wav");
        assert_eq!(calls[0].profile, "LINEAR16 @ 44100Hz");
    }
}
