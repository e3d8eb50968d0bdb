//! Error types for the speech recognition client

use thiserror::Error;

/// Result type alias for recognition operations
pub type SpeechResult<T> = Result<T, SpeechError>;

/// Errors that can occur during speech recognition
#[derive(Error, Debug)]
pub enum SpeechError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request
    #[error("Recognition service returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// The long-running operation completed with an error
    #[error("Recognition operation failed: {message}")]
    OperationFailed {
        /// Error message attached to the operation
        message: String,
    },

    /// The service response did not carry an operation name
    #[error("Recognition service response carried no operation name")]
    MissingOperation,

    /// Recognition attempt timed out
    #[error("Recognition timed out after {seconds} seconds")]
    Timeout {
        /// Timeout duration
        seconds: u64,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpeechError {
    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an operation failure error
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub const fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    /// Check if error is retryable with another recognition profile
    ///
    /// Every failure short of a malformed response is worth retrying with
    /// the next profile in the fallback chain; a profile mismatch surfaces
    /// as an API rejection or an operation failure.
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::Json(_))
    }
}

impl From<SpeechError> for dialog_core::Error {
    fn from(err: SpeechError) -> Self {
        Self::Transcription(err.to_string())
    }
}
