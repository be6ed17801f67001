//! Shared test utilities and fixtures for station registry tests

use crate::app::models::{AreaCompanyCount, ReferenceStation, StationDataset};
use crate::app::services::station_registry::StationRegistry;
use std::fs;
use std::path::{Path, PathBuf};

pub mod query_tests;

/// Create a test station with standard parameters
pub fn create_test_station(
    name: &str,
    prefecture: &str,
    line: &str,
    passengers: u64,
) -> ReferenceStation {
    ReferenceStation {
        name: name.to_string(),
        prefecture: prefecture.to_string(),
        line: line.to_string(),
        passengers,
    }
}

/// Small dataset with nested names, a tie and an area table
pub fn create_test_dataset() -> StationDataset {
    StationDataset {
        stations: vec![
            create_test_station("新宿", "東京都", "JR山手線", 650_000),
            create_test_station("渋谷", "東京都", "JR山手線", 360_000),
            create_test_station("市ヶ谷", "東京都", "JR中央・総武線", 60_000),
            create_test_station("新宿三丁目", "東京都", "東京メトロ丸ノ内線", 60_000),
            create_test_station("霞ヶ関", "東京都", "東京メトロ日比谷線", 140_000),
            create_test_station("本宿", "静岡県", "名鉄名古屋本線", 2_000),
        ],
        areas: vec![
            AreaCompanyCount {
                keyword: "千代田区".to_string(),
                companies: 2_800,
            },
            AreaCompanyCount {
                keyword: "渋谷区".to_string(),
                companies: 1_900,
            },
            AreaCompanyCount {
                keyword: "東京都".to_string(),
                companies: 400,
            },
        ],
    }
}

pub fn create_test_registry() -> StationRegistry {
    StationRegistry::new(create_test_dataset())
}

/// Write the fixture dataset as JSON into `dir`
pub fn write_test_dataset_file(dir: &Path) -> PathBuf {
    let path = dir.join("stations.json");
    let json = serde_json::to_string_pretty(&create_test_dataset()).unwrap();
    fs::write(&path, json).unwrap();
    path
}
