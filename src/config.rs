//! Configuration management and validation.
//!
//! Provides the engine configuration: where the reference station dataset
//! lives, the factor weights used by the location scorer and the spread of
//! the location multiplier.

use crate::constants::{
    DATA_DIR_NAME, DATASET_ENV_VAR, MULTIPLIER_SPREAD, STATION_DATASET_FILE, WEIGHT_COMPANIES,
    WEIGHT_PASSENGERS, WEIGHT_WALK,
};
use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Relative weights of the three location factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the station passenger sub-score
    pub passengers: f64,

    /// Weight of the walking time sub-score
    pub walk: f64,

    /// Weight of the nearby company sub-score
    pub companies: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            passengers: WEIGHT_PASSENGERS,
            walk: WEIGHT_WALK,
            companies: WEIGHT_COMPANIES,
        }
    }
}

impl ScoringWeights {
    /// Sum of all three weights
    pub fn total(&self) -> f64 {
        self.passengers + self.walk + self.companies
    }
}

/// Global configuration for the ingestion and scoring engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the reference station dataset (JSON)
    pub dataset_path: PathBuf,

    /// Factor weights for the location scorer
    pub weights: ScoringWeights,

    /// Multiplier swing at score 0 and 100
    pub multiplier_spread: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dataset_path: Self::default_dataset_path(),
            weights: ScoringWeights::default(),
            multiplier_spread: MULTIPLIER_SPREAD,
        }
    }
}

impl EngineConfig {
    /// Resolve the dataset location: environment override, then user data dir
    pub fn default_dataset_path() -> PathBuf {
        if let Ok(path) = std::env::var(DATASET_ENV_VAR) {
            if !path.trim().is_empty() {
                debug!("Dataset path taken from {}: {}", DATASET_ENV_VAR, path);
                return PathBuf::from(path);
            }
        }

        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
            .join(STATION_DATASET_FILE)
    }

    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_multiplier_spread(mut self, spread: f64) -> Self {
        self.multiplier_spread = spread;
        self
    }

    /// Reject weights and spreads the scorer cannot work with
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("passengers", self.weights.passengers),
            ("walk", self.weights.walk),
            ("companies", self.weights.companies),
        ];

        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(InsightError::configuration(format!(
                    "Weight '{}' must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        if self.weights.total() <= 0.0 {
            return Err(InsightError::configuration(
                "At least one scoring weight must be positive",
            ));
        }

        if !self.multiplier_spread.is_finite() || self.multiplier_spread < 0.0 {
            return Err(InsightError::configuration(format!(
                "Multiplier spread must be a non-negative number, got {}",
                self.multiplier_spread
            )));
        }

        Ok(())
    }
}
