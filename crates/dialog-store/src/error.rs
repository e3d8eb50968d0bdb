//! Error types for the conversation store

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during document store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the request
    #[error("Document store returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the store
        message: String,
    },

    /// A fetched document could not be decoded
    #[error("Failed to decode document {session_id}: {message}")]
    Decode {
        /// Document key
        session_id: String,
        /// What went wrong
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            session_id: session_id.into(),
            message: message.into(),
        }
    }
}

impl From<StoreError> for dialog_core::Error {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = StoreError::api(409, "document contention");
        let display = format!("{err}");
        assert!(display.contains("409"));
        assert!(display.contains("document contention"));
    }

    #[test]
    fn test_decode_error_display() {
        let err = StoreError::decode("session123", "missing sessionId field");
        let display = format!("{err}");
        assert!(display.contains("session123"));
        assert!(display.contains("missing sessionId field"));
    }

    #[test]
    fn test_conversion_to_core_error() {
        let err = StoreError::api(500, "internal");
        let core: dialog_core::Error = err.into();
        assert!(matches!(core, dialog_core::Error::Store(_)));
    }
}
