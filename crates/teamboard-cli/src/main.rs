//! Teamboard CLI - project dashboard in the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use commands::Cli;
use config::Config;

const DEFAULT_LOG_FILTER: &str = "teamboard=info,teamboard_core=info";
const VERBOSE_LOG_FILTER: &str = "teamboard=debug,teamboard_core=debug";

/// Initialize tracing on stderr, plus an optional append-only log file.
///
/// `RUST_LOG` wins over the configured filter; `--verbose` wins over both.
fn init_tracing(log_file: Option<&std::path::Path>, verbose: bool, configured: Option<&str>) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| configured.unwrap_or(DEFAULT_LOG_FILTER).into())
    };

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    init_tracing(cli.log_file.as_deref(), cli.verbose, config.log_filter.as_deref())?;
    tracing::debug!(config = ?cli.config, "Configuration loaded");

    cli.execute(config)
}
