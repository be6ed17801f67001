//! Tests for the location evaluator façade

use super::*;
use crate::app::models::LocationRequest;
use crate::app::services::station_registry::{StationDatasetCache, StationRegistry};
use crate::config::{EngineConfig, ScoringWeights};

fn request(station: &str, walk_minutes: Option<f64>, address: Option<&str>) -> LocationRequest {
    LocationRequest {
        station_name: station.to_string(),
        walk_minutes,
        address: address.map(str::to_string),
    }
}

#[test]
fn test_prime_location_report() {
    let evaluator = create_test_evaluator();
    let report = evaluator.evaluate(&request("渋谷駅", Some(4.0), Some("東京都渋谷区道玄坂2-1")));

    assert_eq!(report.station_info.name, "渋谷");
    assert_eq!(report.station_info.passengers, Some(360_000));
    assert_eq!(report.station_info.line.as_deref(), Some("JR山手線"));
    assert_eq!(report.station_info.prefecture.as_deref(), Some("東京都"));
    assert_eq!(report.station_info.rank, Some(2));
    assert_eq!(report.nearby_companies, 1_900);
    assert_eq!(report.location_score, 91);
    assert_eq!(report.location_rank, LocationRank::A);
    assert_close(report.location_multiplier, 1.246);

    assert_eq!(report.insights.len(), 4);
    assert!(report.insights[0].starts_with("Strong footfall"));
    assert!(report.insights[1].starts_with("Major hub"));
    assert!(report.insights[2].starts_with("Business district"));
    assert!(report.insights[3].starts_with("Rank A"));
}

#[test]
fn test_unknown_station_is_neutral() {
    let evaluator = create_test_evaluator();
    let report = evaluator.evaluate(&request("存在しない駅", None, None));

    assert_eq!(report.station_info.name, "存在しない");
    assert_eq!(report.station_info.passengers, None);
    assert_eq!(report.station_info.line, None);
    assert_eq!(report.station_info.prefecture, None);
    assert_eq!(report.station_info.rank, None);
    assert_eq!(report.nearby_companies, 0);
    assert_eq!(report.location_score, 50);
    assert_eq!(report.location_rank, LocationRank::C);
    assert_eq!(report.location_multiplier, 1.0);
    assert!(report.insights.is_empty());
}

#[test]
fn test_unknown_station_scores_remaining_factors() {
    let evaluator = create_test_evaluator();
    let report = evaluator.evaluate(&request("存在しない", Some(1.0), None));

    assert_eq!(report.location_score, 100);
    assert_eq!(report.location_rank, LocationRank::A);
    assert!(report.insights.iter().any(|i| i.starts_with("Excellent access")));
}

#[test]
fn test_weak_location_report() {
    let evaluator = create_test_evaluator();
    let report = evaluator.evaluate(&request("本宿", Some(15.0), Some("静岡県岡崎市")));

    assert_eq!(report.nearby_companies, 0);
    assert_eq!(report.location_score, 29);
    assert_eq!(report.location_rank, LocationRank::D);
    assert_close(report.location_multiplier, 0.874);

    assert!(report.insights.iter().any(|i| i.starts_with("Light footfall")));
    assert!(report.insights.iter().any(|i| i.starts_with("Long walk")));
    assert!(report.insights.last().unwrap().starts_with("Rank D"));
}

#[test]
fn test_configured_weights_and_spread() {
    let config = EngineConfig::default()
        .with_weights(ScoringWeights {
            passengers: 0.0,
            walk: 1.0,
            companies: 0.0,
        })
        .with_multiplier_spread(0.5);
    let evaluator = LocationEvaluator::new(Arc::new(create_test_registry()), &config);

    let report = evaluator.evaluate(&request("新宿", Some(5.0), None));

    assert_eq!(report.location_score, 80);
    assert_close(report.location_multiplier, 1.3);
}

#[test]
fn test_empty_registry_degrades() {
    let registry = Arc::new(StationRegistry::empty());
    let evaluator = LocationEvaluator::new(registry, &EngineConfig::default());
    let report = evaluator.evaluate(&request("渋谷", None, Some("東京都渋谷区")));

    assert_eq!(report.station_info.rank, None);
    assert_eq!(report.location_score, 50);
}

#[tokio::test]
async fn test_from_cache_shares_registry() {
    let cache = StationDatasetCache::with_registry(create_test_registry());
    let config = EngineConfig::default();

    let first = LocationEvaluator::from_cache(&cache, &config).await;
    let second = LocationEvaluator::from_cache(&cache, &config).await;

    assert!(std::ptr::eq(first.registry(), second.registry()));
    assert_eq!(
        first.evaluate(&request("新宿", None, None)).station_info.rank,
        Some(1)
    );
}

#[test]
fn test_report_serializes_camel_case() {
    let evaluator = create_test_evaluator();
    let report = evaluator.evaluate(&request("渋谷", None, None));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["stationInfo"]["passengers"], 360_000);
    assert_eq!(json["locationRank"], "A");
    assert!(json.get("locationMultiplier").is_some());
    assert!(json["insights"].is_array());
}
