//! Command implementations for the space insight CLI
//!
//! Each command is implemented in its own module:
//! - `import`: booking export preview
//! - `score`: location scoring report
//! - `stations`: reference station listing

pub mod import;
pub mod score;
pub mod shared;
pub mod stations;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Installs logging and dispatches to the subcommand handler.
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args);

    match args.command {
        Some(Commands::Import(import_args)) => import::run_import(import_args).await,
        Some(Commands::Score(score_args)) => score::run_score(score_args).await,
        Some(Commands::Stations(stations_args)) => stations::run_stations(stations_args).await,
        None => Ok(()),
    }
}
