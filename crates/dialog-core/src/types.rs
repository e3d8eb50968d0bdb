//! Core types for conversation documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel label stamped on documents created by the audio pipeline
pub const AUDIO_CHANNEL: &str = "Audio";

/// Status stamped on documents created by the audio pipeline
pub const COMPLETED_STATUS: &str = "completed";

/// Audio-related fields of a conversation document
///
/// These are the only fields the ingest path is allowed to overwrite on an
/// existing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFields {
    /// Source locator of the uploaded audio (e.g. `gs://bucket/object`)
    pub audio_file_url: String,

    /// Speaker-attributed transcript text
    pub audio_transcript: String,

    /// When the transcription completed
    pub audio_transcribed_at: DateTime<Utc>,

    /// Whether the conversation has associated audio
    pub has_audio: bool,
}

impl AudioFields {
    /// Create audio fields for a freshly transcribed upload
    pub fn new(
        audio_file_url: impl Into<String>,
        audio_transcript: impl Into<String>,
        audio_transcribed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            audio_file_url: audio_file_url.into(),
            audio_transcript: audio_transcript.into(),
            audio_transcribed_at,
            has_audio: true,
        }
    }
}

/// One turn of a conversation
///
/// The ingest path never appends turns; it only initializes the empty list
/// on first creation. Turns written by other channels must round-trip
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Lowercase role identifier (e.g. `student`, `instructor`)
    pub role: String,

    /// Display label for the speaker
    pub speaker: String,

    /// Turn text
    pub text: String,
}

/// A conversation document, keyed by session id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDoc {
    /// Session identifier (document key)
    pub session_id: String,

    /// Audio fields
    #[serde(flatten)]
    pub audio: AudioFields,

    /// Conversation start time, written only at creation
    pub start_time: DateTime<Utc>,

    /// Channel label, written only at creation
    pub channel: String,

    /// Conversation status, written only at creation
    pub status: String,

    /// Ordered conversation turns, empty at creation
    #[serde(default)]
    pub turns: Vec<ConversationTurn>,
}

impl ConversationDoc {
    /// Build a new document with creation-time defaults
    ///
    /// Used when the session has no existing document: the audio fields are
    /// combined with the default start time, channel, status and an empty
    /// turn list.
    pub fn new(session_id: impl Into<String>, audio: AudioFields, start_time: DateTime<Utc>) -> Self {
        Self {
            session_id: session_id.into(),
            audio,
            start_time,
            channel: AUDIO_CHANNEL.to_string(),
            status: COMPLETED_STATUS.to_string(),
            turns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_audio(at: DateTime<Utc>) -> AudioFields {
        AudioFields::new(
            "gs://recordings/session123.wav",
            "Student: hi there\nInstructor: ok",
            at,
        )
    }

    #[test]
    fn test_audio_fields_constructor() {
        let now = Utc::now();
        let audio = sample_audio(now);

        assert_eq!(audio.audio_file_url, "gs://recordings/session123.wav");
        assert!(audio.has_audio);
        assert_eq!(audio.audio_transcribed_at, now);
    }

    #[test]
    fn test_new_document_defaults() {
        let now = Utc::now();
        let doc = ConversationDoc::new("session123", sample_audio(now), now);

        assert_eq!(doc.session_id, "session123");
        assert_eq!(doc.channel, AUDIO_CHANNEL);
        assert_eq!(doc.status, COMPLETED_STATUS);
        assert!(doc.turns.is_empty());
        assert_eq!(doc.start_time, now);
    }

    #[test]
    fn test_document_field_names() {
        let now = Utc::now();
        let doc = ConversationDoc::new("s1", sample_audio(now), now);

        let json = serde_json::to_value(&doc).unwrap();
        let object = json.as_object().unwrap();

        for field in [
            "sessionId",
            "audioFileUrl",
            "audioTranscript",
            "audioTranscribedAt",
            "hasAudio",
            "startTime",
            "channel",
            "status",
            "turns",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_document_roundtrip_preserves_turns() {
        let now = Utc::now();
        let mut doc = ConversationDoc::new("s1", sample_audio(now), now);
        doc.turns.push(ConversationTurn {
            role: "student".to_string(),
            speaker: "Student".to_string(),
            text: "hello".to_string(),
        });

        let json = serde_json::to_string(&doc).unwrap();
        let back: ConversationDoc = serde_json::from_str(&json).unwrap();

        assert_eq!(back, doc);
        assert_eq!(back.turns.len(), 1);
    }

    #[test]
    fn test_missing_turns_defaults_to_empty() {
        let json = r#"{
            "sessionId": "s1",
            "audioFileUrl": "gs://b/o.wav",
            "audioTranscript": "Speaker: hi",
            "audioTranscribedAt": "2024-01-01T00:00:00Z",
            "hasAudio": true,
            "startTime": "2024-01-01T00:00:00Z",
            "channel": "Audio",
            "status": "completed"
        }"#;

        let doc: ConversationDoc = serde_json::from_str(json).unwrap();
        assert!(doc.turns.is_empty());
    }
}
