//! Storage-upload trigger event

use serde::{Deserialize, Serialize};

/// A storage-upload notification
///
/// Carries the bucket name and the object path of the uploaded file; this
/// is the entire trigger payload the handler consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEvent {
    /// Bucket the object was uploaded to
    pub bucket: String,

    /// Object path within the bucket
    pub name: String,
}

impl StorageEvent {
    /// Create an event from a bucket and object path
    pub fn new(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_deserializes_trigger_payload() {
        let json = r#"{"bucket": "recordings", "name": "a/b/session123.wav"}"#;
        let event: StorageEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.bucket, "recordings");
        assert_eq!(event.name, "a/b/session123.wav");
    }

    #[test]
    fn test_event_constructor() {
        let event = StorageEvent::new("recordings", "session1.mp3");
        assert_eq!(
            event,
            StorageEvent {
                bucket: "recordings".to_string(),
                name: "session1.mp3".to_string(),
            }
        );
    }
}
