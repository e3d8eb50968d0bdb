//! One-shot speech synthesis
//!
//! Sends a fixed passage to the text-to-speech service and writes the
//! returned WAV bytes to a local file. Any failure terminates the run.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use clap::Parser;
use dialog_core::{Config, Error, Result};
use dialog_synth::{GoogleSynthClient, VoiceSelection};
use std::path::PathBuf;
use tracing::info;

/// Fixed passage synthesized by this tool
const SUMMARY_TEXT: &str = "Quantum computers use qubits to perform calculations much faster \
    than classical computers for certain tasks, like simulation and optimization, based on \
    principles like superposition and entanglement. They have potential in cryptography and \
    drug discovery but are still emerging technology.";

/// Command line interface for the synthesis tool
#[derive(Parser)]
#[command(
    name = "dialog-synth",
    version = env!("CARGO_PKG_VERSION"),
    about = "One-shot speech synthesis to a local WAV file"
)]
struct Cli {
    /// Output file path (overrides configuration)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Main entry point for the synthesis tool
///
/// # Errors
///
/// Any configuration, synthesis or file write failure terminates the run.
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();
    init_logging(&cli);

    let config = Config::load()?;
    let voice = VoiceSelection::from_config(&config.synthesis);
    let client = GoogleSynthClient::new(&config.synthesis, config.auth.token.clone());

    let bytes = client
        .synthesize(SUMMARY_TEXT, &voice, GoogleSynthClient::LINEAR16)
        .await
        .map_err(|e| Error::Synthesis(e.to_string()))?;

    let output = cli.output.unwrap_or_else(|| config.synthesis.output_path.clone());
    tokio::fs::write(&output, &bytes).await?;

    info!(
        output = %output.display(),
        bytes = bytes.len(),
        "Audio content written to file"
    );
    println!("Audio content written to file '{}'", output.display());

    Ok(())
}

/// Initialize logging system
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
