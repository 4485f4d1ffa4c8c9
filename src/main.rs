//! Harvestboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Values come from the config file (see `print-config`), overridden by
//! environment variables, overridden by CLI flags:
//! - `HARVESTBOARD_DATA_PATH`: CSV file to serve (default: data/crop_losses.csv)
//! - `HARVESTBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HARVESTBOARD_API_PORT`: Port to listen on (default: 8050)
//! - `HARVESTBOARD_LOG_LEVEL` / `RUST_LOG`: Log level (default: info)
//! - `HARVESTBOARD_LOG_FORMAT`: pretty or json (default: pretty)

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harvestboard::api::{serve, ApiConfig, AppState};
use harvestboard::config::{generate_default_config, Config, LoggingConfig};
use harvestboard::dataset;

#[derive(Parser)]
#[command(name = "harvestboard", version, about = "Crop post-harvest loss dashboard")]
struct Cli {
    /// Path to a TOML config file (default: standard config locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the crop loss CSV (overrides config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the default configuration file and exit
    PrintConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::PrintConfig) = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // Resolve configuration: file, then env, then CLI flags
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(data) = &cli.data {
        config.dataset.path = data.display().to_string();
    }
    if let Some(host) = &cli.host {
        config.api.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Harvestboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {}", config.dataset.path);

    // Load the dataset; any failure here is fatal
    let table = dataset::load_from_path(Path::new(&config.dataset.path))
        .with_context(|| format!("loading dataset from {}", config.dataset.path))?;

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_secs: config.api.request_timeout_secs,
    };

    let state = AppState::new(Arc::new(table), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Harvestboard stopped");
    Ok(())
}

/// Initialize the tracing subscriber from the logging config.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "harvestboard={},tower_http=info",
            logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
