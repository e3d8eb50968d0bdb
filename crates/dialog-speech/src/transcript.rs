//! Transcript assembly from recognition output
//!
//! Reduces word-level diarization output into speaker-attributed lines:
//! consecutive words sharing a speaker tag coalesce into one labeled line,
//! and results without word entries fall back to a single generic line.

use crate::types::{RecognitionAlternative, RecognizeResponse};
use dialog_core::ConversationTurn;

/// Label for speaker tag 1
pub const STUDENT_LABEL: &str = "Student";

/// Label for any other speaker tag
pub const INSTRUCTOR_LABEL: &str = "Instructor";

/// Label used when no diarization is available
pub const GENERIC_LABEL: &str = "Speaker";

/// Map a speaker tag to its display label
///
/// Tag 1 maps to [`STUDENT_LABEL`], everything else to
/// [`INSTRUCTOR_LABEL`]. The mapping is a two-party heuristic: diarization
/// is requested with exactly two speakers, so tags outside {1, 2} are an
/// upstream anomaly and collapse into the instructor side.
#[must_use]
pub const fn speaker_label(tag: i32) -> &'static str {
    if tag == 1 { STUDENT_LABEL } else { INSTRUCTOR_LABEL }
}

/// A speaker-attributed transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Assemble a transcript from a recognition response
    ///
    /// Results are processed in order; each contributes the lines of its
    /// top-ranked alternative. Results without alternatives are skipped.
    #[must_use]
    pub fn assemble(response: &RecognizeResponse) -> Self {
        let mut lines = Vec::new();

        for result in &response.results {
            let Some(alternative) = result.alternatives.first() else {
                continue;
            };
            Self::reduce_alternative(alternative, &mut lines);
        }

        Self { lines }
    }

    /// Reduce one alternative into labeled lines
    fn reduce_alternative(alternative: &RecognitionAlternative, lines: &mut Vec<String>) {
        if alternative.words.is_empty() {
            lines.push(format!("{GENERIC_LABEL}: {}", alternative.transcript));
            return;
        }

        let mut current_speaker: Option<i32> = None;
        let mut current_text: Vec<&str> = Vec::new();

        for word in &alternative.words {
            let speaker = word.speaker_tag.unwrap_or(0);

            if Some(speaker) == current_speaker {
                current_text.push(&word.word);
            } else {
                if let Some(tag) = current_speaker {
                    if !current_text.is_empty() {
                        lines.push(format!("{}: {}", speaker_label(tag), current_text.join(" ")));
                    }
                }
                current_speaker = Some(speaker);
                current_text = vec![&word.word];
            }
        }

        if let Some(tag) = current_speaker {
            if !current_text.is_empty() {
                lines.push(format!("{}: {}", speaker_label(tag), current_text.join(" ")));
            }
        }
    }

    /// The transcript as newline-joined text
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of transcript lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Transcript lines, in order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether the transcript carries no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Parse labeled transcript text back into conversation turns
    ///
    /// Recognizes the `Student:` and `Instructor:` line grammar; blank and
    /// unlabeled lines are skipped.
    #[must_use]
    pub fn parse_turns(text: &str) -> Vec<ConversationTurn> {
        let mut turns = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            for speaker in [STUDENT_LABEL, INSTRUCTOR_LABEL] {
                if let Some(rest) = line.strip_prefix(speaker) {
                    if let Some(text) = rest.strip_prefix(':') {
                        turns.push(ConversationTurn {
                            role: speaker.to_lowercase(),
                            speaker: speaker.to_string(),
                            text: text.trim().to_string(),
                        });
                        break;
                    }
                }
            }
        }

        turns
    }

    /// Parse this transcript's own text into conversation turns
    #[must_use]
    pub fn turns(&self) -> Vec<ConversationTurn> {
        Self::parse_turns(&self.text())
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::{RecognitionResult, WordInfo};
    use pretty_assertions::assert_eq;

    fn diarized(words: Vec<WordInfo>) -> RecognizeResponse {
        RecognizeResponse::single(RecognitionAlternative {
            transcript: words
                .iter()
                .map(|w| w.word.clone())
                .collect::<Vec<_>>()
                .join(" "),
            confidence: Some(0.9),
            words,
        })
    }

    #[test]
    fn test_consecutive_words_coalesce_by_speaker() {
        let response = diarized(vec![
            WordInfo::tagged("hi", 1),
            WordInfo::tagged("there", 1),
            WordInfo::tagged("ok", 2),
        ]);

        let transcript = Transcript::assemble(&response);
        assert_eq!(transcript.line_count(), 2);
        assert_eq!(transcript.lines()[0], "Student: hi there");
        assert_eq!(transcript.lines()[1], "Instructor: ok");
        assert_eq!(transcript.text(), "Student: hi there\nInstructor: ok");
    }

    #[test]
    fn test_speaker_alternation_preserves_order() {
        let response = diarized(vec![
            WordInfo::tagged("hello", 2),
            WordInfo::tagged("hi", 1),
            WordInfo::tagged("how", 2),
            WordInfo::tagged("are", 2),
            WordInfo::tagged("you", 2),
            WordInfo::tagged("fine", 1),
        ]);

        let transcript = Transcript::assemble(&response);
        assert_eq!(
            transcript.lines(),
            &[
                "Instructor: hello",
                "Student: hi",
                "Instructor: how are you",
                "Student: fine",
            ]
        );
    }

    #[test]
    fn test_no_words_yields_generic_line() {
        let response = RecognizeResponse::single(RecognitionAlternative {
            transcript: "hello world".to_string(),
            confidence: None,
            words: Vec::new(),
        });

        let transcript = Transcript::assemble(&response);
        assert_eq!(transcript.lines(), &["Speaker: hello world"]);
    }

    #[test]
    fn test_multiple_results_in_order() {
        let response = RecognizeResponse {
            results: vec![
                RecognitionResult {
                    alternatives: vec![RecognitionAlternative {
                        transcript: "first span".to_string(),
                        confidence: None,
                        words: Vec::new(),
                    }],
                },
                RecognitionResult {
                    alternatives: vec![RecognitionAlternative {
                        transcript: "ok".to_string(),
                        confidence: None,
                        words: vec![WordInfo::tagged("ok", 1)],
                    }],
                },
            ],
        };

        let transcript = Transcript::assemble(&response);
        assert_eq!(transcript.lines(), &["Speaker: first span", "Student: ok"]);
    }

    #[test]
    fn test_result_without_alternatives_is_skipped() {
        let response = RecognizeResponse {
            results: vec![
                RecognitionResult {
                    alternatives: Vec::new(),
                },
                RecognitionResult {
                    alternatives: vec![RecognitionAlternative {
                        transcript: "still here".to_string(),
                        confidence: None,
                        words: Vec::new(),
                    }],
                },
            ],
        };

        let transcript = Transcript::assemble(&response);
        assert_eq!(transcript.lines(), &["Speaker: still here"]);
    }

    #[test]
    fn test_empty_response_yields_empty_transcript() {
        let transcript = Transcript::assemble(&RecognizeResponse::default());
        assert!(transcript.is_empty());
        assert_eq!(transcript.text(), "");
    }

    #[test]
    fn test_only_top_alternative_counts() {
        let response = RecognizeResponse {
            results: vec![RecognitionResult {
                alternatives: vec![
                    RecognitionAlternative {
                        transcript: "preferred".to_string(),
                        confidence: Some(0.9),
                        words: Vec::new(),
                    },
                    RecognitionAlternative {
                        transcript: "runner up".to_string(),
                        confidence: Some(0.3),
                        words: Vec::new(),
                    },
                ],
            }],
        };

        let transcript = Transcript::assemble(&response);
        assert_eq!(transcript.lines(), &["Speaker: preferred"]);
    }

    #[test]
    fn test_untagged_words_map_to_instructor() {
        let response = diarized(vec![
            WordInfo {
                word: "uh".to_string(),
                speaker_tag: None,
            },
            WordInfo::tagged("hi", 1),
        ]);

        let transcript = Transcript::assemble(&response);
        assert_eq!(transcript.lines(), &["Instructor: uh", "Student: hi"]);
    }

    #[test]
    fn test_speaker_label_mapping() {
        assert_eq!(speaker_label(1), "Student");
        assert_eq!(speaker_label(2), "Instructor");
        assert_eq!(speaker_label(0), "Instructor");
        assert_eq!(speaker_label(7), "Instructor");
    }

    #[test]
    fn test_parse_turns_roundtrip() {
        let response = diarized(vec![
            WordInfo::tagged("hi", 1),
            WordInfo::tagged("there", 1),
            WordInfo::tagged("ok", 2),
        ]);

        let turns = Transcript::assemble(&response).turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, "student");
        assert_eq!(turns[0].speaker, "Student");
        assert_eq!(turns[0].text, "hi there");
        assert_eq!(turns[1].role, "instructor");
        assert_eq!(turns[1].text, "ok");
    }

    #[test]
    fn test_parse_turns_skips_blank_and_unlabeled_lines() {
        let text = "Student: hello\n\nSpeaker: aside\nnonsense line\nInstructor: welcome";
        let turns = Transcript::parse_turns(text);

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].text, "hello");
        assert_eq!(turns[1].speaker, "Instructor");
    }
}
