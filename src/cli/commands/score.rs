//! Score command: evaluate one location

use super::shared::engine_config;
use crate::app::models::LocationRequest;
use crate::app::services::location_scoring::LocationEvaluator;
use crate::app::services::station_registry::StationDatasetCache;
use crate::cli::args::ScoreArgs;
use anyhow::{Context, Result};
use tracing::warn;

pub async fn run_score(args: ScoreArgs) -> Result<()> {
    args.validate()?;
    let config = engine_config(args.dataset.as_deref())?;

    let cache = StationDatasetCache::new(&config.dataset_path);
    let evaluator = LocationEvaluator::from_cache(&cache, &config).await;
    if evaluator.registry().is_empty() {
        warn!("No reference stations loaded; the station factor will be missing");
    }

    let report = evaluator.evaluate(&LocationRequest {
        station_name: args.station,
        walk_minutes: args.walk_minutes,
        address: args.address,
    });

    let json =
        serde_json::to_string_pretty(&report).context("Failed to serialize location report")?;
    println!("{}", json);

    Ok(())
}
