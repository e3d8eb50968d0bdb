//! Response types for the speech recognition service
//!
//! These mirror the service's JSON shape: an ordered list of results, each
//! carrying ranked alternatives, each alternative optionally carrying
//! word-level entries with speaker tags.

use serde::{Deserialize, Serialize};

/// Complete response of a recognition call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognizeResponse {
    /// Sequential recognition results, in audio order
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

/// One recognition result (a contiguous span of audio)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Ranked alternatives, most likely first
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

/// A candidate transcription of one result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionAlternative {
    /// Transcript text for the whole result span
    #[serde(default)]
    pub transcript: String,

    /// Confidence score (0.0-1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Word-level entries, present when diarization was requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<WordInfo>,
}

/// A single recognized word with its speaker attribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    /// The word text
    pub word: String,

    /// Speaker tag assigned by diarization (absent when diarization was
    /// not performed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_tag: Option<i32>,
}

impl WordInfo {
    /// Create a word entry with a speaker tag
    pub fn tagged(word: impl Into<String>, speaker_tag: i32) -> Self {
        Self {
            word: word.into(),
            speaker_tag: Some(speaker_tag),
        }
    }
}

impl RecognizeResponse {
    /// Build a response from a single result's alternatives
    ///
    /// Convenience constructor used by tests and the mock client.
    #[must_use]
    pub fn single(alternative: RecognitionAlternative) -> Self {
        Self {
            results: vec![RecognitionResult {
                alternatives: vec![alternative],
            }],
        }
    }

    /// Whether the response carries any result at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_word_info_tagged() {
        let word = WordInfo::tagged("hello", 1);
        assert_eq!(word.word, "hello");
        assert_eq!(word.speaker_tag, Some(1));
    }

    #[test]
    fn test_wire_field_names() {
        let word = WordInfo::tagged("hi", 2);
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["speakerTag"], 2);
        assert_eq!(json["word"], "hi");
    }

    #[test]
    fn test_response_deserializes_service_shape() {
        let json = r#"{
            "results": [{
                "alternatives": [{
                    "transcript": "hi there ok",
                    "confidence": 0.92,
                    "words": [
                        {"word": "hi", "speakerTag": 1},
                        {"word": "there", "speakerTag": 1},
                        {"word": "ok", "speakerTag": 2}
                    ]
                }]
            }]
        }"#;

        let response: RecognizeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);

        let alternative = &response.results[0].alternatives[0];
        assert_eq!(alternative.transcript, "hi there ok");
        assert_eq!(alternative.words.len(), 3);
        assert_eq!(alternative.words[2].speaker_tag, Some(2));
    }

    #[test]
    fn test_response_without_words() {
        let json = r#"{
            "results": [{
                "alternatives": [{"transcript": "hello world"}]
            }]
        }"#;

        let response: RecognizeResponse = serde_json::from_str(json).unwrap();
        let alternative = &response.results[0].alternatives[0];
        assert!(alternative.words.is_empty());
        assert!(alternative.confidence.is_none());
    }

    #[test]
    fn test_empty_response() {
        let response: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_single_constructor() {
        let response = RecognizeResponse::single(RecognitionAlternative {
            transcript: "hello".to_string(),
            confidence: None,
            words: Vec::new(),
        });

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].alternatives[0].transcript, "hello");
    }
}
