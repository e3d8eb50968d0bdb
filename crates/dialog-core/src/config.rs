//! Configuration management for the conversation audio pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Speech recognition configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Document store configuration (required by the ingest path only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,

    /// Speech synthesis configuration
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Speech recognition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Recognition service endpoint
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,

    /// Language code sent with every recognition request
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Per-attempt timeout in seconds (covers the whole long-running
    /// operation, start to completion)
    #[serde(default = "default_attempt_timeout")]
    pub attempt_timeout_seconds: u64,

    /// Interval between operation polls in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Document store endpoint
    #[serde(default = "default_store_endpoint")]
    pub endpoint: String,

    /// Cloud project id
    pub project_id: String,

    /// Database id
    #[serde(default = "default_database_id")]
    pub database_id: String,

    /// Collection holding conversation documents
    #[serde(default = "default_collection")]
    pub collection: String,
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Synthesis service endpoint
    #[serde(default = "default_synthesis_endpoint")]
    pub endpoint: String,

    /// Voice language code
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Voice name
    #[serde(default = "default_voice_name")]
    pub voice_name: String,

    /// Voice gender
    #[serde(default = "default_voice_gender")]
    pub voice_gender: String,

    /// Output file path
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token presented to the vendor services
    #[serde(default)]
    pub token: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_speech_endpoint() -> String {
    "https://speech.googleapis.com/v1".to_string()
}

fn default_language_code() -> String {
    "en-US".to_string()
}

const fn default_attempt_timeout() -> u64 {
    300
}

const fn default_poll_interval() -> u64 {
    5
}

fn default_store_endpoint() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    "conversations".to_string()
}

fn default_synthesis_endpoint() -> String {
    "https://texttospeech.googleapis.com/v1".to_string()
}

fn default_voice_name() -> String {
    "en-US-Standard-A".to_string()
}

fn default_voice_gender() -> String {
    "MALE".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("quantum_summary.wav")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_speech_endpoint(),
            language_code: default_language_code(),
            attempt_timeout_seconds: default_attempt_timeout(),
            poll_interval_seconds: default_poll_interval(),
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            endpoint: default_synthesis_endpoint(),
            language_code: default_language_code(),
            voice_name: default_voice_name(),
            voice_gender: default_voice_gender(),
            output_path: default_output_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SpeechConfig {
    /// Get the per-attempt timeout as a Duration
    #[must_use]
    pub const fn attempt_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.attempt_timeout_seconds)
    }

    /// Get the poll interval as a Duration
    #[must_use]
    pub const fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_seconds)
    }
}

impl Config {
    /// Load configuration from files and environment
    ///
    /// Reads `dialog.toml` or `config.toml` if present, then applies
    /// `DIALOG_`-prefixed environment overrides (e.g.
    /// `DIALOG_STORE_PROJECT_ID`, `DIALOG_AUTH_TOKEN`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if a configuration source
    /// cannot be parsed or required values are missing.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("dialog").required(false))
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("DIALOG").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}
