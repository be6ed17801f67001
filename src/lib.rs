//! Space Insight Library
//!
//! Heuristic normalization and scoring for a rental-space business.
//!
//! This library provides two engines:
//! - **Ingestion**: encoding-tolerant CSV tokenizing, first-match-wins
//!   header mapping across unknown platform vocabularies, and date, time
//!   and amount normalization into canonical booking rows
//! - **Location scoring**: fuzzy station resolution against a reference
//!   dataset, weighted multi-factor scoring that renormalizes over missing
//!   factors, A-E rank banding, a price multiplier and operator insights
//!
//! Heuristic misses (an unmatched header, an unknown station, an odd date)
//! are ordinary values in the outputs. Only structural failures such as an
//! unreadable file surface as [`InsightError`].

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod booking_csv_parser;
        pub mod location_scoring;
        pub mod station_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    CanonicalBookingRow, CanonicalField, LocationFactors, LocationRank, LocationReport,
    LocationRequest, ReferenceStation, RowIssue, StationInfo,
};
pub use app::services::booking_csv_parser::{BookingCsvParser, ImportPreview};
pub use app::services::location_scoring::{LocationEvaluator, LocationScorer};
pub use app::services::station_registry::{StationDatasetCache, StationRegistry};
pub use config::{EngineConfig, ScoringWeights};
pub use error::{InsightError, Result};
