//! Sift - Edge telemetry sanitization service
//!
//! # Usage
//!
//! ```bash
//! # Run the server
//! sift
//! sift --config configs/sift.toml
//! sift --log-level debug
//! ```

mod serve;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sift - Edge telemetry sanitization service
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "configs/sift.toml")]
    config: std::path::PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = sift_config::Config::from_file(&cli.config)?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.log.level.as_str());
    init_logging(level)?;

    serve::run(config).await
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();

    Ok(())
}
