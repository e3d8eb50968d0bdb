//! Error types for the synthesis client

use thiserror::Error;

/// Result type alias for synthesis operations
pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// Errors that can occur during speech synthesis
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request
    #[error("Synthesis service returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// The audio payload could not be decoded
    #[error("Failed to decode audio content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The response carried no audio content
    #[error("Synthesis response carried no audio content")]
    MissingAudio,

    /// I/O error writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthesisError {
    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

impl From<SynthesisError> for dialog_core::Error {
    fn from(err: SynthesisError) -> Self {
        Self::Synthesis(err.to_string())
    }
}
