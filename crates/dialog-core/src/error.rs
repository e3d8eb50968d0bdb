//! Error types for the conversation audio pipeline

use std::{error::Error as StdError, fmt};

/// Main error type for the conversation audio pipeline
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Document store error
    Store(String),

    /// Transcription error
    Transcription(String),

    /// Speech synthesis error
    Synthesis(String),

    /// Audio format error
    UnsupportedAudioFormat {
        /// The unsupported format
        format: String,
    },

    /// Timeout error
    Timeout {
        /// Timeout duration in seconds
        seconds: u64,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Store(msg) => write!(f, "Document store error: {msg}"),
            Self::Transcription(msg) => write!(f, "Transcription error: {msg}"),
            Self::Synthesis(msg) => write!(f, "Speech synthesis error: {msg}"),
            Self::UnsupportedAudioFormat { format } => {
                write!(f, "Audio format not supported: {format}")
            }
            Self::Timeout { seconds } => {
                write!(f, "Operation timed out after {seconds}s")
            }
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}
