//! Google Cloud Speech-to-Text client implementation
//!
//! Talks to the service's public JSON surface: a long-running recognition
//! is started for the uploaded object's URI, then the returned operation
//! is polled until it completes. The whole attempt is bounded by the
//! caller's timeout, mirroring a blocking wait on the operation result.

use crate::client::SpeechClient;
use crate::error::{SpeechError, SpeechResult};
use crate::profile::RecognitionProfile;
use crate::types::RecognizeResponse;
use async_trait::async_trait;
use dialog_core::config::SpeechConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Recognition request body
#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    config: &'a RecognitionProfile,
    audio: RecognitionAudio<'a>,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio<'a> {
    uri: &'a str,
}

/// Long-running operation envelope
#[derive(Debug, Deserialize)]
struct Operation {
    name: Option<String>,
    #[serde(default)]
    done: bool,
    response: Option<OperationResponse>,
    error: Option<OperationError>,
}

#[derive(Debug, Deserialize)]
struct OperationResponse {
    #[serde(default)]
    results: Vec<crate::types::RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    message: Option<String>,
}

/// Error body returned on non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Speech-to-text client over the managed recognition service
#[derive(Debug, Clone)]
pub struct GoogleSpeechClient {
    /// Service endpoint (no trailing slash)
    endpoint: String,

    /// Bearer token, if configured
    token: Option<String>,

    /// Interval between operation polls
    poll_interval: Duration,

    /// HTTP client
    http: reqwest::Client,
}

impl GoogleSpeechClient {
    /// Create a new client from configuration
    #[must_use]
    pub fn new(config: &SpeechConfig, token: Option<String>) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token,
            poll_interval: config.poll_interval(),
            http: reqwest::Client::new(),
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Extract a readable message from a non-success response
    async fn api_error(response: reqwest::Response) -> SpeechError {
        let status = response.status().as_u16();
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "unknown error".to_string()),
            Err(_) => "unknown error".to_string(),
        };
        SpeechError::api(status, message)
    }

    /// Start a long-running recognition and return the operation name
    async fn start_recognition(
        &self,
        audio_uri: &str,
        profile: &RecognitionProfile,
    ) -> SpeechResult<String> {
        let url = format!("{}/speech:longrunningrecognize", self.endpoint);
        let body = RecognizeRequest {
            config: profile,
            audio: RecognitionAudio { uri: audio_uri },
        };

        let response = self.authorize(self.http.post(&url)).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let operation: Operation = response.json().await?;
        operation.name.ok_or(SpeechError::MissingOperation)
    }

    /// Poll the operation until it completes
    async fn wait_for_operation(&self, name: &str) -> SpeechResult<RecognizeResponse> {
        let url = format!("{}/operations/{name}", self.endpoint);

        loop {
            let response = self.authorize(self.http.get(&url)).send().await?;
            if !response.status().is_success() {
                return Err(Self::api_error(response).await);
            }

            let operation: Operation = response.json().await?;
            if operation.done {
                if let Some(error) = operation.error {
                    return Err(SpeechError::operation_failed(
                        error.message.unwrap_or_else(|| "unknown error".to_string()),
                    ));
                }

                let results = operation.response.map(|r| r.results).unwrap_or_default();
                return Ok(RecognizeResponse { results });
            }

            debug!(operation = name, "Recognition still running");
            sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl SpeechClient for GoogleSpeechClient {
    async fn recognize(
        &self,
        audio_uri: &str,
        profile: &RecognitionProfile,
    ) -> SpeechResult<RecognizeResponse> {
        debug!(audio_uri, profile = %profile, "Starting recognition");

        let operation = self.start_recognition(audio_uri, profile).await?;
        self.wait_for_operation(&operation).await
    }

    fn name(&self) -> &str {
        "google-speech"
    }
}
