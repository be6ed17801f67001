//! Tests for station name normalization, resolution and ranking

use super::*;
use crate::app::services::station_registry::{
    MatchKind, StationRegistry, StationResolution, normalize_station_name,
};

#[test]
fn test_normalize_strips_suffix_and_spaces() {
    assert_eq!(normalize_station_name("渋谷駅"), "渋谷");
    assert_eq!(normalize_station_name("　渋谷　"), "渋谷");
    assert_eq!(normalize_station_name(" 渋谷　駅 "), "渋谷");
}

#[test]
fn test_normalize_unifies_small_ke() {
    assert_eq!(normalize_station_name("市ケ谷"), "市ヶ谷");
    assert_eq!(normalize_station_name("霞ケ関駅"), "霞ヶ関");
    assert_eq!(normalize_station_name("市ヶ谷"), "市ヶ谷");
}

#[test]
fn test_exact_match() {
    let registry = create_test_registry();

    match registry.resolve("渋谷駅") {
        StationResolution::Resolved {
            station,
            rank,
            match_kind,
        } => {
            assert_eq!(station.name, "渋谷");
            assert_eq!(rank, 2);
            assert_eq!(match_kind, MatchKind::Exact);
        }
        other => panic!("expected a resolved station, got {other:?}"),
    }
}

#[test]
fn test_exact_match_beats_earlier_substring() {
    // "新宿" is a substring of "新宿三丁目" but the exact entry must win
    let registry = create_test_registry();
    let resolution = registry.resolve("新宿三丁目");

    assert_eq!(resolution.to_station_info().name, "新宿三丁目");
}

#[test]
fn test_kana_variant_resolves_exactly() {
    let registry = create_test_registry();

    match registry.resolve("市ケ谷駅") {
        StationResolution::Resolved {
            station, match_kind, ..
        } => {
            assert_eq!(station.name, "市ヶ谷");
            assert_eq!(match_kind, MatchKind::Exact);
        }
        other => panic!("expected a resolved station, got {other:?}"),
    }
}

#[test]
fn test_query_containing_station_name() {
    let registry = create_test_registry();

    match registry.resolve("JR渋谷駅") {
        StationResolution::Resolved {
            station, match_kind, ..
        } => {
            assert_eq!(station.name, "渋谷");
            assert_eq!(match_kind, MatchKind::Substring);
        }
        other => panic!("expected a resolved station, got {other:?}"),
    }
}

#[test]
fn test_substring_match_takes_first_in_dataset_order() {
    // "宿" is contained in 新宿, 新宿三丁目 and 本宿; 新宿 comes first
    let registry = create_test_registry();
    let info = registry.resolve("宿").to_station_info();

    assert_eq!(info.name, "新宿");
}

#[test]
fn test_unresolved_station_is_all_null() {
    let registry = create_test_registry();
    let resolution = registry.resolve("存在しない駅");

    assert!(!resolution.is_resolved());
    assert_eq!(resolution.passengers(), None);
    assert_eq!(resolution.rank(), None);

    let info = resolution.to_station_info();
    assert_eq!(info.name, "存在しない");
    assert_eq!(info.passengers, None);
    assert_eq!(info.line, None);
    assert_eq!(info.prefecture, None);
    assert_eq!(info.rank, None);
}

#[test]
fn test_blank_query_is_unresolved() {
    let registry = create_test_registry();

    assert!(!registry.resolve("").is_resolved());
    assert!(!registry.resolve("駅").is_resolved());
    assert!(!registry.resolve("　").is_resolved());
}

#[test]
fn test_empty_registry_never_resolves() {
    let registry = StationRegistry::empty();
    assert!(registry.is_empty());
    assert!(!registry.resolve("渋谷").is_resolved());
}

#[test]
fn test_ranks_follow_passengers_with_stable_ties() {
    let registry = create_test_registry();

    assert_eq!(registry.resolve("新宿").rank(), Some(1));
    assert_eq!(registry.resolve("渋谷").rank(), Some(2));
    assert_eq!(registry.resolve("霞ヶ関").rank(), Some(3));
    // 市ヶ谷 and 新宿三丁目 tie at 60,000; dataset order decides
    assert_eq!(registry.resolve("市ヶ谷").rank(), Some(4));
    assert_eq!(registry.resolve("新宿三丁目").rank(), Some(5));
    assert_eq!(registry.resolve("本宿").rank(), Some(6));
}

#[test]
fn test_stations_by_rank() {
    let registry = create_test_registry();
    let ranked = registry.stations_by_rank();

    let names: Vec<&str> = ranked.iter().map(|(_, s)| s.name.as_str()).collect();
    assert_eq!(names, vec!["新宿", "渋谷", "霞ヶ関", "市ヶ谷", "新宿三丁目", "本宿"]);
    assert_eq!(ranked[0].0, 1);
    assert_eq!(ranked[5].0, 6);
}

#[test]
fn test_nearby_companies_first_area_wins() {
    let registry = create_test_registry();

    assert_eq!(
        registry.estimate_nearby_companies("東京都千代田区丸の内1-1"),
        Some(2_800)
    );
    assert_eq!(
        registry.estimate_nearby_companies("東京都渋谷区道玄坂2-1"),
        Some(1_900)
    );
    assert_eq!(registry.estimate_nearby_companies("東京都八王子市"), Some(400));
    assert_eq!(registry.estimate_nearby_companies("大阪府大阪市"), None);
    assert_eq!(registry.estimate_nearby_companies("  "), None);
}
