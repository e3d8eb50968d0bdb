//! Audio upload ingest handler
//!
//! Turns a storage-upload notification into a transcribed conversation
//! document: derive the session key from the object path, transcribe with
//! the fixed fallback chain of recognition profiles, reduce the diarized
//! words into speaker-attributed lines, and upsert the document keyed by
//! session.

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
    clippy::missing_errors_doc,
    clippy::uninlined_format_args
)]

pub mod event;
pub mod handler;
pub mod outcome;

pub use event::StorageEvent;
pub use handler::IngestHandler;
pub use outcome::IngestOutcome;

// Re-export the result type used throughout
pub use dialog_core::{Error, Result};
