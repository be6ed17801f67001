//! Rank banding and the location multiplier

use crate::app::models::LocationRank;
use crate::constants::{NEUTRAL_MULTIPLIER, NEUTRAL_SCORE, rank_thresholds};

impl LocationRank {
    /// Band a score; thresholds are lower-inclusive
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= rank_thresholds::A => LocationRank::A,
            s if s >= rank_thresholds::B => LocationRank::B,
            s if s >= rank_thresholds::C => LocationRank::C,
            s if s >= rank_thresholds::D => LocationRank::D,
            _ => LocationRank::E,
        }
    }
}

/// Continuous adjustment factor centred on the neutral score
///
/// `1 + ((score - 50) / 50) * spread`; no score means no adjustment.
pub fn location_multiplier(score: Option<u8>, spread: f64) -> f64 {
    match score {
        Some(score) => {
            let neutral = f64::from(NEUTRAL_SCORE);
            1.0 + ((f64::from(score) - neutral) / neutral) * spread
        }
        None => NEUTRAL_MULTIPLIER,
    }
}
