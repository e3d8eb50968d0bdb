//! Ingest handler outcomes

use serde::{Deserialize, Serialize};

/// Result of handling one storage-upload event
///
/// The caller only ever sees a status string plus one detail field; errors
/// are never escalated as typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IngestOutcome {
    /// The upload was transcribed and the document upserted
    Success {
        /// Session id the document is keyed by
        #[serde(rename = "sessionId")]
        session_id: String,
    },

    /// The upload was not audio; nothing was done
    Skipped {
        /// Why the upload was skipped
        reason: String,
    },

    /// Transcription or the document write failed
    Error {
        /// Failure message
        message: String,
    },
}

impl IngestOutcome {
    /// Create a success outcome
    pub fn success(session_id: impl Into<String>) -> Self {
        Self::Success {
            session_id: session_id.into(),
        }
    }

    /// Create a skip outcome
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// Create an error outcome
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Whether this outcome reports a failure
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
