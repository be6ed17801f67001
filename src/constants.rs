//! Application constants for the space insight engines
//!
//! This module contains the scoring curve knots, weights, rank thresholds,
//! insight thresholds and default paths used throughout the crate.

// =============================================================================
// Default Paths and Environment
// =============================================================================

/// Directory under the user data dir holding the reference dataset
pub const DATA_DIR_NAME: &str = "space-insight";

/// File name of the reference station dataset
pub const STATION_DATASET_FILE: &str = "stations.json";

/// Environment variable overriding the reference dataset location
pub const DATASET_ENV_VAR: &str = "SPACE_INSIGHT_DATASET";

// =============================================================================
// Station Name Normalization
// =============================================================================

/// Suffix stripped from station queries ("Shibuya駅" -> "Shibuya")
pub const STATION_SUFFIX: char = '駅';

/// Full-size katakana KE, folded into the small form below
pub const KATAKANA_KE: char = 'ケ';

/// Small katakana KE as used in names like 市ヶ谷 or 霞ヶ関
pub const KATAKANA_SMALL_KE: char = 'ヶ';

/// Ideographic (full-width) space
pub const FULL_WIDTH_SPACE: char = '\u{3000}';

// =============================================================================
// Scoring Weights
// =============================================================================

/// Nominal weight of the station passenger factor
pub const WEIGHT_PASSENGERS: f64 = 0.4;

/// Nominal weight of the walking time factor
pub const WEIGHT_WALK: f64 = 0.3;

/// Nominal weight of the nearby company factor
pub const WEIGHT_COMPANIES: f64 = 0.3;

/// Score used when no factor is available
pub const NEUTRAL_SCORE: u8 = 50;

/// Multiplier swing at the ends of the score range (0 -> 0.7, 100 -> 1.3)
pub const MULTIPLIER_SPREAD: f64 = 0.3;

/// Multiplier applied when no score is available
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

// =============================================================================
// Scoring Curves
// =============================================================================

/// Daily passenger knots for the passenger curve
pub mod passenger_curve {
    pub const SMALL: f64 = 10_000.0;
    pub const MEDIUM: f64 = 50_000.0;
    pub const LARGE: f64 = 100_000.0;
    /// Passenger count at which the top segment reaches 100
    pub const SATURATION: f64 = 300_000.0;
}

/// Walking minute knots for the walk curve
pub mod walk_curve {
    pub const DOORSTEP: f64 = 1.0;
    pub const NEAR: f64 = 3.0;
    pub const SHORT: f64 = 5.0;
    pub const MODERATE: f64 = 10.0;
    /// Lowest sub-score a long walk can produce
    pub const FLOOR: f64 = 20.0;
}

/// Nearby company knots for the company curve
pub mod company_curve {
    pub const SPARSE: f64 = 100.0;
    pub const MIXED: f64 = 500.0;
    pub const DENSE: f64 = 1_000.0;
    /// Company count at which the top segment reaches 100
    pub const SATURATION: f64 = 3_000.0;
}

// =============================================================================
// Rank Bands
// =============================================================================

/// Lower-inclusive score thresholds for ranks A through D (E is the remainder)
pub mod rank_thresholds {
    pub const A: u8 = 80;
    pub const B: u8 = 60;
    pub const C: u8 = 40;
    pub const D: u8 = 20;
}

// =============================================================================
// Insight Thresholds
// =============================================================================

pub mod insight_thresholds {
    /// Daily passengers regarded as strong footfall
    pub const HIGH_PASSENGERS: u64 = 100_000;
    /// Daily passengers regarded as light footfall
    pub const LOW_PASSENGERS: u64 = 10_000;
    /// Station rank regarded as a major hub
    pub const MAJOR_HUB_RANK: usize = 10;
    /// Walking minutes regarded as excellent access
    pub const EXCELLENT_WALK_MINUTES: f64 = 3.0;
    /// Walking minutes regarded as a long walk
    pub const LONG_WALK_MINUTES: f64 = 10.0;
    /// Nearby companies regarded as a business district
    pub const BUSINESS_DISTRICT_COMPANIES: u32 = 1_000;
}
