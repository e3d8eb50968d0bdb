//! Utility functions for the conversation audio pipeline

use std::path::Path;

/// Audio container suffixes accepted by the ingest handler
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "flac", "ogg"];

/// Check whether an uploaded object path carries a supported audio suffix
///
/// The check is case-insensitive and looks only at the final extension.
#[must_use]
pub fn is_audio_object(object_path: &str) -> bool {
    Path::new(object_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}

/// Derive a session id from an uploaded object path
///
/// Takes the final path segment and strips the known audio suffix:
/// `a/b/session123.wav` becomes `session123`. Paths without a known suffix
/// keep their final segment unchanged.
#[must_use]
pub fn session_id_from_object(object_path: &str) -> String {
    let base = object_path
        .rsplit('/')
        .next()
        .unwrap_or(object_path);

    for ext in AUDIO_EXTENSIONS {
        let suffix_len = ext.len() + 1;
        if base.len() > suffix_len {
            let (stem, suffix) = base.split_at(base.len() - suffix_len);
            if suffix
                .strip_prefix('.')
                .is_some_and(|s| s.eq_ignore_ascii_case(ext))
            {
                return stem.to_string();
            }
        }
    }

    base.to_string()
}

/// Build the source locator for an uploaded object
#[must_use]
pub fn storage_uri(bucket: &str, object_path: &str) -> String {
    format!("gs://{bucket}/{object_path}")
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_audio_object_accepts_allow_list() {
        assert!(is_audio_object("calls/session1.wav"));
        assert!(is_audio_object("calls/session1.mp3"));
        assert!(is_audio_object("calls/session1.flac"));
        assert!(is_audio_object("calls/session1.ogg"));
    }

    #[test]
    fn test_is_audio_object_is_case_insensitive() {
        assert!(is_audio_object("calls/session1.WAV"));
        assert!(is_audio_object("calls/session1.Mp3"));
    }

    #[test]
    fn test_is_audio_object_rejects_other_suffixes() {
        assert!(!is_audio_object("calls/session1.txt"));
        assert!(!is_audio_object("calls/session1.aac"));
        assert!(!is_audio_object("calls/session1"));
        assert!(!is_audio_object(""));
    }

    #[test]
    fn test_session_id_from_nested_path() {
        assert_eq!(session_id_from_object("a/b/session123.wav"), "session123");
    }

    #[test]
    fn test_session_id_strips_each_known_suffix() {
        assert_eq!(session_id_from_object("s1.wav"), "s1");
        assert_eq!(session_id_from_object("s1.mp3"), "s1");
        assert_eq!(session_id_from_object("s1.flac"), "s1");
        assert_eq!(session_id_from_object("s1.ogg"), "s1");
    }

    #[test]
    fn test_session_id_suffix_case_insensitive() {
        assert_eq!(session_id_from_object("calls/S1.WAV"), "S1");
    }

    #[test]
    fn test_session_id_keeps_unknown_suffix() {
        assert_eq!(session_id_from_object("a/b/notes.txt"), "notes.txt");
    }

    #[test]
    fn test_session_id_ignores_audio_suffix_in_directory() {
        // A directory name containing `.wav` must not be mangled
        assert_eq!(
            session_id_from_object("backup.wav/session9.mp3"),
            "session9"
        );
    }

    #[test]
    fn test_session_id_without_directories() {
        assert_eq!(session_id_from_object("session42.ogg"), "session42");
    }

    #[test]
    fn test_storage_uri() {
        assert_eq!(
            storage_uri("recordings", "a/b/session123.wav"),
            "gs://recordings/a/b/session123.wav"
        );
    }
}
