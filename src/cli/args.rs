//! Command-line argument definitions for space insight
//!
//! This module defines the CLI interface using the clap derive API.

use crate::error::{InsightError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the space insight tool
///
/// Previews platform booking exports as canonical rows and scores rental
/// space locations against a reference station dataset.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "space-insight",
    version,
    about = "Normalize platform booking exports and score rental space locations",
    long_about = "Reads booking exports from rental-space platforms (UTF-8 or Shift-JIS, any \
                  header vocabulary) and previews them as canonical booking rows. Also scores a \
                  location from its nearest station, walking time and address, producing a \
                  0-100 score, an A-E rank, a price multiplier and operator remarks."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Preview a platform booking export as canonical rows
    Import(ImportArgs),
    /// Score a location from its nearest station
    Score(ScoreArgs),
    /// List reference stations by passenger rank
    Stations(StationsArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Booking export to preview
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the preview
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format for the import preview"
    )]
    pub output_format: OutputFormat,

    /// Maximum number of rows shown in table output
    #[arg(
        long = "limit",
        value_name = "COUNT",
        default_value_t = 20,
        help = "Maximum number of rows shown in table output"
    )]
    pub limit: usize,
}

/// Arguments for the score command
#[derive(Debug, Clone, Parser)]
pub struct ScoreArgs {
    /// Station name as typed by the operator
    ///
    /// The trailing station glyph, kana variants and full-width spaces
    /// are normalized before matching.
    #[arg(short = 's', long = "station", value_name = "NAME")]
    pub station: String,

    /// Walking minutes from the station
    #[arg(short = 'w', long = "walk", value_name = "MIN")]
    pub walk_minutes: Option<f64>,

    /// Street address, used to estimate nearby companies
    #[arg(short = 'a', long = "address", value_name = "TEXT")]
    pub address: Option<String>,

    /// Reference station dataset (JSON)
    ///
    /// Overrides SPACE_INSIGHT_DATASET and the default data dir location.
    #[arg(long = "dataset", value_name = "PATH")]
    pub dataset: Option<PathBuf>,
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Reference station dataset (JSON)
    #[arg(long = "dataset", value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Number of stations to list
    #[arg(
        short = 'n',
        long = "top",
        value_name = "COUNT",
        default_value_t = 20,
        help = "Number of top stations to list"
    )]
    pub top: usize,

    /// Output format for the listing
    #[arg(long = "format", value_enum, default_value = "table")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Get the tracing level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ScoreArgs {
    /// Validate the score command arguments
    pub fn validate(&self) -> Result<()> {
        if self.station.trim().is_empty() {
            return Err(InsightError::configuration("Station name must not be empty"));
        }

        if let Some(walk) = self.walk_minutes {
            if !walk.is_finite() || walk < 0.0 {
                return Err(InsightError::configuration(format!(
                    "Walking minutes must be a non-negative number, got {}",
                    walk
                )));
            }
        }

        Ok(())
    }
}
