use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use stringvault_api::AppState;
use stringvault_core::config::Config;
use stringvault_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use stringvault_core::{JsonFileBackend, StringRegistry};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stringvault-api")]
#[command(author, version, about = "HTTP API for the string registry", long_about = None)]
struct Args {
    /// Path to a TOML configuration file (otherwise environment + defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, e.g. 127.0.0.1:3000
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Path of the JSON data file
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration file or environment first, then flag overrides
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };

    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    if let Some(data_file) = args.data_file {
        config.store.data_file = data_file;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.json_logs {
        config.logging.json_format = true;
    }
    config.validate().context("validating configuration")?;

    let log_level = config
        .logging
        .level
        .parse::<LogLevel>()
        .unwrap_or_default();
    let log_config = LogConfig::new(log_level)
        .with_timestamp(config.logging.with_timestamp)
        .with_target(config.logging.with_target)
        .json_format(config.logging.json_format);
    init_logging_with_config(log_config)?;

    let registry = StringRegistry::open(Box::new(JsonFileBackend::new(&config.store.data_file)))
        .with_context(|| format!("opening store at {}", config.store.data_file.display()))?;
    info!(
        "Loaded {} record(s) from {}",
        registry.len(),
        config.store.data_file.display()
    );

    stringvault_api::start_server(config.server.bind_address, AppState::new(registry)).await?;

    info!("Server stopped");
    Ok(())
}
