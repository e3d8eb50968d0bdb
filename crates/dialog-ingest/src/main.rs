//! Conversation audio ingest service
//!
//! Processes storage-upload notifications: transcribes the uploaded audio
//! with a fallback chain of recognition profiles and upserts the
//! conversation document keyed by session.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use clap::{Parser, Subcommand};
use dialog_core::{Config, Error, Result};
use dialog_ingest::{IngestHandler, StorageEvent};
use dialog_speech::GoogleSpeechClient;
use dialog_store::FirestoreStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command line interface for the ingest service
#[derive(Parser)]
#[command(
    name = "dialog-ingest",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audio upload ingest for the conversation pipeline",
    long_about = "Processes storage-upload notifications: transcribes the uploaded audio with a fallback chain of recognition profiles and upserts the conversation document keyed by session."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Process one storage-upload event
    Process {
        /// Bucket the object was uploaded to
        #[arg(long, value_name = "BUCKET", conflicts_with = "event_file")]
        bucket: Option<String>,

        /// Object path within the bucket
        #[arg(long, value_name = "OBJECT", conflicts_with = "event_file")]
        object: Option<String>,

        /// Read the event as JSON from a file instead
        #[arg(long, value_name = "FILE")]
        event_file: Option<PathBuf>,
    },

    /// Validate configuration
    Config {
        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,
    },
}

/// Main entry point for the ingest service
///
/// # Errors
///
/// Returns error if configuration loading or event parsing fails.
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        // It's okay if .env doesn't exist
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    init_logging(&cli);

    let config = load_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Process {
            bucket,
            object,
            event_file,
        } => process_event(&config, bucket, object, event_file).await,
        Commands::Config { show } => {
            handle_config_command(&config, show)?;
            Ok(())
        }
    }
}

/// Initialize logging system
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = cli.log_level,
        "Dialog ingest starting"
    );
}

/// Load configuration from file or environment
///
/// # Errors
///
/// Returns error if the configuration file cannot be read or parsed
async fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    if let Some(path) = config_path {
        info!("Loading configuration from: {}", path.display());

        let config_content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Configuration {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            }
        })?;

        let config: Config = toml::from_str(&config_content).map_err(|e| Error::Configuration {
            message: format!("Failed to parse config file: {e}"),
        })?;

        Ok(config)
    } else {
        info!("Loading default configuration");
        Config::load()
    }
}

/// Resolve the trigger event from flags or an event file
///
/// # Errors
///
/// Returns error if neither bucket/object nor a readable event file was
/// provided
async fn resolve_event(
    bucket: Option<String>,
    object: Option<String>,
    event_file: Option<PathBuf>,
) -> Result<StorageEvent> {
    if let Some(path) = event_file {
        let content = tokio::fs::read_to_string(&path).await?;
        let event: StorageEvent = serde_json::from_str(&content)?;
        return Ok(event);
    }

    match (bucket, object) {
        (Some(bucket), Some(object)) => Ok(StorageEvent::new(bucket, object)),
        _ => Err(Error::Configuration {
            message: "Provide --bucket and --object, or --event-file".to_string(),
        }),
    }
}

/// Process one storage-upload event and print the outcome as JSON
///
/// # Errors
///
/// Returns error if the event cannot be resolved; handler failures are
/// reported through the printed outcome and the exit code.
async fn process_event(
    config: &Config,
    bucket: Option<String>,
    object: Option<String>,
    event_file: Option<PathBuf>,
) -> Result<()> {
    let event = resolve_event(bucket, object, event_file).await?;

    let store_config = config.store.as_ref().ok_or_else(|| Error::Configuration {
        message: "Missing [store] configuration (store.project_id is required)".to_string(),
    })?;

    let token = config.auth.token.clone();
    let speech = Arc::new(GoogleSpeechClient::new(&config.speech, token.clone()));
    let store = Arc::new(FirestoreStore::new(store_config, token));

    let handler = IngestHandler::new(speech, store, config.speech.clone());
    let outcome = handler.handle(&event).await;

    println!("{}", serde_json::to_string(&outcome)?);

    if outcome.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

/// Handle configuration commands
///
/// # Errors
///
/// Returns error if configuration cannot be serialized
fn handle_config_command(config: &Config, show: bool) -> Result<()> {
    if show {
        let config_toml = toml::to_string_pretty(config).map_err(|e| Error::Configuration {
            message: format!("Failed to serialize configuration: {e}"),
        })?;
        println!("{config_toml}");
    } else {
        info!("Configuration loaded successfully");
    }

    Ok(())
}
