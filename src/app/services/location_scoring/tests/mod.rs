//! Tests for the location scoring engine
//!
//! Curves, weighted scoring, rank banding, insights and the evaluator façade.

pub mod evaluator_tests;

// Test helper functions and fixtures
use crate::app::models::{LocationFactors, LocationRank};
use crate::app::services::location_scoring::{InsightContext, LocationEvaluator};
use crate::app::services::station_registry::tests::create_test_registry;
use crate::config::EngineConfig;
use std::sync::Arc;

/// Float comparison for curve and multiplier values
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn factors(
    passengers: Option<f64>,
    walk_minutes: Option<f64>,
    companies: Option<f64>,
) -> LocationFactors {
    LocationFactors::new(passengers, walk_minutes, companies)
}

/// Insight context with nothing notable about it
pub fn create_quiet_context() -> InsightContext {
    InsightContext {
        passengers: Some(50_000),
        station_rank: Some(40),
        walk_minutes: Some(6.0),
        nearby_companies: 0,
        score: 65,
        rank: LocationRank::B,
    }
}

/// Evaluator over the station registry fixture with default weights
pub fn create_test_evaluator() -> LocationEvaluator {
    let config = EngineConfig::default().with_dataset_path("/nonexistent/stations.json");
    LocationEvaluator::new(Arc::new(create_test_registry()), &config)
}
