//! Speech recognition for conversation audio uploads
//!
//! This crate provides a small recognition framework around a managed
//! speech-to-text service: a pluggable client trait, the fixed fallback
//! chain of recognition profiles, and the reduction of word-level
//! diarization output into speaker-attributed transcript lines.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::uninlined_format_args,
    clippy::return_self_not_must_use
)]

pub mod client;
pub mod error;
pub mod google;
pub mod mock;
pub mod profile;
pub mod transcript;
pub mod types;

pub use client::SpeechClient;
pub use error::{SpeechError, SpeechResult};
pub use profile::{AudioEncoding, DiarizationConfig, RecognitionProfile};
pub use transcript::Transcript;
pub use types::{RecognitionAlternative, RecognitionResult, RecognizeResponse, WordInfo};

// Re-export commonly used items
pub use google::GoogleSpeechClient;
pub use mock::MockSpeechClient;
