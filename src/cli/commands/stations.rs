//! Stations command: list reference stations by passenger rank

use super::shared::engine_config;
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::{OutputFormat, StationsArgs};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::info;

/// One line of the station listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedStation<'a> {
    rank: usize,
    name: &'a str,
    prefecture: &'a str,
    line: &'a str,
    passengers: u64,
}

pub async fn run_stations(args: StationsArgs) -> Result<()> {
    let config = engine_config(args.dataset.as_deref())?;

    // A listing without a dataset is meaningless, so this one does not degrade
    let registry = StationRegistry::load(&config.dataset_path)
        .await
        .with_context(|| {
            format!(
                "Failed to load station dataset {}",
                config.dataset_path.display()
            )
        })?;

    let ranked: Vec<RankedStation<'_>> = registry
        .stations_by_rank()
        .into_iter()
        .take(args.top)
        .map(|(rank, station)| RankedStation {
            rank,
            name: &station.name,
            prefecture: &station.prefecture,
            line: &station.line,
            passengers: station.passengers,
        })
        .collect();

    info!("Listing {} of {} stations", ranked.len(), registry.station_count());

    match args.output_format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&ranked).context("Failed to serialize stations")?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let header = format!(
                "{:>5}  {:<16} {:<10} {:<24} {:>10}",
                "Rank", "Station", "Region", "Line", "Passengers"
            );
            println!("{}", header.bold());
            for station in &ranked {
                println!(
                    "{:>5}  {:<16} {:<10} {:<24} {:>10}",
                    station.rank, station.name, station.prefecture, station.line, station.passengers
                );
            }
        }
    }

    Ok(())
}
