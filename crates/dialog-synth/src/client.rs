//! Text-to-speech client implementation

use crate::error::{SynthesisError, SynthesisResult};
use base64::Engine;
use dialog_core::config::SynthesisConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Voice selection parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    /// Voice language code
    pub language_code: String,

    /// Voice gender
    pub ssml_gender: String,

    /// Voice name
    pub name: String,
}

impl VoiceSelection {
    /// Build the voice selection from configuration
    #[must_use]
    pub fn from_config(config: &SynthesisConfig) -> Self {
        Self {
            language_code: config.language_code.clone(),
            ssml_gender: config.voice_gender.clone(),
            name: config.voice_name.clone(),
        }
    }
}

/// Synthesis request body
#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: &'a VoiceSelection,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct AudioConfig<'a> {
    #[serde(rename = "audioEncoding")]
    audio_encoding: &'a str,
}

/// Synthesis response body
#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: Option<String>,
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

/// Text-to-speech client over the managed synthesis service
#[derive(Debug, Clone)]
pub struct GoogleSynthClient {
    /// Service endpoint (no trailing slash)
    endpoint: String,

    /// Bearer token, if configured
    token: Option<String>,

    /// HTTP client
    http: reqwest::Client,
}

impl GoogleSynthClient {
    /// LINEAR16 output encoding (WAV)
    pub const LINEAR16: &'static str = "LINEAR16";

    /// Create a new client from configuration
    #[must_use]
    pub fn new(config: &SynthesisConfig, token: Option<String>) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Synthesize `text` with the given voice and output encoding
    ///
    /// Returns the raw audio bytes, decoded from the wire representation.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError`] if the request fails, the service
    /// rejects it, or the audio payload is missing or undecodable.
    pub async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        audio_encoding: &str,
    ) -> SynthesisResult<Vec<u8>> {
        let url = format!("{}/text:synthesize", self.endpoint);
        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice,
            audio_config: AudioConfig { audio_encoding },
        };

        debug!(voice = voice.name, audio_encoding, "Requesting synthesis");

        let request = self.http.post(&url).json(&body);
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body
                    .error
                    .and_then(|e| e.message)
                    .unwrap_or_else(|| "unknown error".to_string()),
                Err(_) => "unknown error".to_string(),
            };
            return Err(SynthesisError::api(status, message));
        }

        let body: SynthesizeResponse = response.json().await?;
        let audio_content = body.audio_content.ok_or(SynthesisError::MissingAudio)?;

        let bytes = base64::engine::general_purpose::STANDARD.decode(audio_content)?;
        Ok(bytes)
    }
}
