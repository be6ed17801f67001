//! Location evaluation façade
//!
//! Chains station resolution, company estimation, scoring, banding, the
//! multiplier and insights into one location report.

use super::insights::{InsightContext, generate_insights};
use super::rank::location_multiplier;
use super::scorer::LocationScorer;
use crate::app::models::{LocationFactors, LocationRank, LocationReport, LocationRequest};
use crate::app::services::station_registry::{StationDatasetCache, StationRegistry};
use crate::config::EngineConfig;
use std::sync::Arc;
use tracing::info;

/// Scores locations against a shared station registry
#[derive(Debug, Clone)]
pub struct LocationEvaluator {
    registry: Arc<StationRegistry>,
    scorer: LocationScorer,
    multiplier_spread: f64,
}

impl LocationEvaluator {
    /// Create an evaluator over an already loaded registry
    pub fn new(registry: Arc<StationRegistry>, config: &EngineConfig) -> Self {
        Self {
            registry,
            scorer: LocationScorer::new(config.weights),
            multiplier_spread: config.multiplier_spread,
        }
    }

    /// Create an evaluator, loading the registry through the cache if needed
    pub async fn from_cache(cache: &StationDatasetCache, config: &EngineConfig) -> Self {
        Self::new(cache.get().await, config)
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Evaluate one location request
    ///
    /// Never fails: an unknown station, a missing walk time or an
    /// unmatched address only remove factors from the score.
    pub fn evaluate(&self, request: &LocationRequest) -> LocationReport {
        let resolution = self.registry.resolve(&request.station_name);

        let nearby_companies = request
            .address
            .as_deref()
            .and_then(|address| self.registry.estimate_nearby_companies(address))
            .unwrap_or(0);

        let factors = LocationFactors::new(
            resolution.passengers().map(|p| p as f64),
            request.walk_minutes,
            Some(f64::from(nearby_companies)),
        );

        let location_score = self.scorer.score(&factors);
        let location_rank = LocationRank::from_score(location_score);
        let location_multiplier = location_multiplier(Some(location_score), self.multiplier_spread);

        let insights = generate_insights(&InsightContext {
            passengers: resolution.passengers(),
            station_rank: resolution.rank(),
            walk_minutes: request.walk_minutes,
            nearby_companies,
            score: location_score,
            rank: location_rank,
        });

        info!(
            "Evaluated '{}': score {} rank {} (station resolved: {})",
            request.station_name,
            location_score,
            location_rank,
            resolution.is_resolved()
        );

        LocationReport {
            station_info: resolution.to_station_info(),
            nearby_companies,
            location_score,
            location_rank,
            location_multiplier,
            insights,
        }
    }
}
