//! Location scoring engine
//!
//! Turns a free-text station name, an optional walking time and an optional
//! address into a location report:
//!
//! - **Curves**: piecewise-linear 0-100 sub-scores per factor
//! - **Scorer**: weighted mean over the factors actually present
//! - **Rank**: A-E banding and the continuous location multiplier
//! - **Insights**: additive rule table of operator remarks
//! - **Evaluator**: façade chaining the above over a station registry
//!
//! # Example
//!
//! ```rust,no_run
//! use space_insight::app::models::LocationRequest;
//! use space_insight::app::services::location_scoring::LocationEvaluator;
//! use space_insight::app::services::station_registry::StationDatasetCache;
//! use space_insight::config::EngineConfig;
//!
//! # async fn example() {
//! let config = EngineConfig::default();
//! let cache = StationDatasetCache::new(&config.dataset_path);
//! let evaluator = LocationEvaluator::from_cache(&cache, &config).await;
//!
//! let report = evaluator.evaluate(&LocationRequest {
//!     station_name: "渋谷駅".to_string(),
//!     walk_minutes: Some(4.0),
//!     address: None,
//! });
//! println!("{} ({})", report.location_score, report.location_rank);
//! # }
//! ```

pub mod curves;
pub mod evaluator;
pub mod insights;
pub mod rank;
pub mod scorer;

#[cfg(test)]
pub mod tests;

pub use curves::{company_score, passenger_score, walk_score};
pub use evaluator::LocationEvaluator;
pub use insights::{INSIGHT_RULES, InsightContext, InsightRule, generate_insights};
pub use rank::location_multiplier;
pub use scorer::{LocationScorer, SubScores};
