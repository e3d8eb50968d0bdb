//! Recognition profiles and the fixed fallback chain
//!
//! Uploaded audio arrives without reliable format metadata, so recognition
//! is attempted against an ordered list of candidate profiles until one
//! succeeds. The profile structs serialize directly to the service's
//! request shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio encoding of a recognition profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    /// Uncompressed 16-bit signed little-endian samples
    Linear16,
    /// 8-bit mu-law companded samples
    Mulaw,
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear16 => write!(f, "LINEAR16"),
            Self::Mulaw => write!(f, "MULAW"),
        }
    }
}

/// Speaker diarization settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiarizationConfig {
    /// Enable per-word speaker attribution
    pub enable_speaker_diarization: bool,

    /// Minimum number of speakers to distinguish
    pub min_speaker_count: u32,

    /// Maximum number of speakers to distinguish
    pub max_speaker_count: u32,
}

impl DiarizationConfig {
    /// Diarization pinned to exactly two speakers
    ///
    /// Conversation audio is a two-party exchange; pinning min and max
    /// keeps the service from splitting noise into extra speakers.
    #[must_use]
    pub const fn two_speakers() -> Self {
        Self {
            enable_speaker_diarization: true,
            min_speaker_count: 2,
            max_speaker_count: 2,
        }
    }
}

/// A fixed bundle of encoding, sample rate and model parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionProfile {
    /// Audio encoding
    pub encoding: AudioEncoding,

    /// Sample rate in hertz
    pub sample_rate_hertz: u32,

    /// Language code
    pub language_code: String,

    /// Insert punctuation into the transcript
    pub enable_automatic_punctuation: bool,

    /// Model hint (e.g. `phone_call`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Diarization settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diarization_config: Option<DiarizationConfig>,
}

impl RecognitionProfile {
    /// Build a diarizing profile for the given encoding and sample rate
    fn diarizing(encoding: AudioEncoding, sample_rate_hertz: u32, model: Option<&str>) -> Self {
        Self {
            encoding,
            sample_rate_hertz,
            language_code: "en-US".to_string(),
            enable_automatic_punctuation: true,
            model: model.map(ToString::to_string),
            diarization_config: Some(DiarizationConfig::two_speakers()),
        }
    }

    /// The ordered fallback chain of candidate profiles
    ///
    /// Attempted in order until one succeeds:
    ///
    /// 1. LINEAR16 at 44100 Hz (CD quality)
    /// 2. LINEAR16 at 16000 Hz
    /// 3. MULAW at 8000 Hz with the `phone_call` model
    /// 4. LINEAR16 at 8000 Hz with the `phone_call` model
    #[must_use]
    pub fn fallback_chain() -> Vec<Self> {
        vec![
            Self::diarizing(AudioEncoding::Linear16, 44_100, None),
            Self::diarizing(AudioEncoding::Linear16, 16_000, None),
            Self::diarizing(AudioEncoding::Mulaw, 8_000, Some("phone_call")),
            Self::diarizing(AudioEncoding::Linear16, 8_000, Some("phone_call")),
        ]
    }
}

impl fmt::Display for RecognitionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}Hz", self.encoding, self.sample_rate_hertz)
    }
}
