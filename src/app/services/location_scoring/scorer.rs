//! Weighted location scorer with missing-factor renormalization

use super::curves::{company_score, passenger_score, walk_score};
use crate::app::models::LocationFactors;
use crate::config::ScoringWeights;
use crate::constants::NEUTRAL_SCORE;
use serde::Serialize;

/// Sub-scores of the factors that took part in a score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub passengers: Option<f64>,
    pub walk: Option<f64>,
    pub companies: Option<f64>,
}

/// Combines factor sub-scores into a 0-100 location score
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationScorer {
    weights: ScoringWeights,
}

/// A factor takes part only when present and positive
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

impl LocationScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Sub-score of every factor that takes part
    pub fn sub_scores(&self, factors: &LocationFactors) -> SubScores {
        SubScores {
            passengers: present(factors.station_passengers).map(passenger_score),
            walk: present(factors.walk_minutes).map(walk_score),
            companies: present(factors.nearby_companies).map(company_score),
        }
    }

    /// Weighted score over the present factors only
    ///
    /// Absent factors drop out of both the weighted sum and the weight
    /// total. With nothing to score the neutral midpoint is returned.
    pub fn score(&self, factors: &LocationFactors) -> u8 {
        let sub_scores = self.sub_scores(factors);
        let terms = [
            (sub_scores.passengers, self.weights.passengers),
            (sub_scores.walk, self.weights.walk),
            (sub_scores.companies, self.weights.companies),
        ];

        let (weighted_sum, weight_total) = terms
            .iter()
            .filter_map(|(score, weight)| score.map(|s| (s * weight, *weight)))
            .fold((0.0, 0.0), |(sum, total), (term, weight)| {
                (sum + term, total + weight)
            });

        if weight_total <= 0.0 {
            return NEUTRAL_SCORE;
        }

        (weighted_sum / weight_total).round().clamp(0.0, 100.0) as u8
    }
}
