//! Shared components for CLI commands

use crate::cli::args::Args;
use crate::config::EngineConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins over the verbosity flags when set.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("space_insight={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    // Ignore a second initialization (tests may run commands repeatedly)
    if args.quiet {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Build the engine configuration, letting `--dataset` win over defaults
pub fn engine_config(dataset: Option<&Path>) -> Result<EngineConfig> {
    let mut config = EngineConfig::default();
    if let Some(path) = dataset {
        config = config.with_dataset_path(path);
    }

    config.validate().context("Invalid engine configuration")?;
    debug!("Using station dataset: {}", config.dataset_path.display());

    Ok(config)
}
