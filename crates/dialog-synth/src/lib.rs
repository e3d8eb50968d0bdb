//! Speech synthesis client for the conversation pipeline
//!
//! Sends literal text with a fixed voice selection and output encoding to
//! the managed text-to-speech service and returns the raw audio bytes,
//! decoded from the base64 wire representation.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod client;
pub mod error;

pub use client::{GoogleSynthClient, VoiceSelection};
pub use error::{SynthesisError, SynthesisResult};
