//! Insight generation from a scored location
//!
//! Rules are evaluated independently in table order and every rule that
//! applies contributes one remark.

use crate::app::models::LocationRank;
use crate::constants::insight_thresholds::{
    BUSINESS_DISTRICT_COMPANIES, EXCELLENT_WALK_MINUTES, HIGH_PASSENGERS, LONG_WALK_MINUTES,
    LOW_PASSENGERS, MAJOR_HUB_RANK,
};

/// Everything the insight rules may look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightContext {
    pub passengers: Option<u64>,
    pub station_rank: Option<usize>,
    pub walk_minutes: Option<f64>,
    pub nearby_companies: u32,
    pub score: u8,
    pub rank: LocationRank,
}

/// One row of the rule table
pub struct InsightRule {
    pub name: &'static str,
    pub applies: fn(&InsightContext) -> bool,
    pub remark: fn(&InsightContext) -> String,
}

fn positive_walk(ctx: &InsightContext) -> Option<f64> {
    ctx.walk_minutes.filter(|w| *w > 0.0)
}

/// Rule table, in emission order
pub static INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        name: "high_footfall",
        applies: |ctx| ctx.passengers.is_some_and(|p| p >= HIGH_PASSENGERS),
        remark: |ctx| {
            format!(
                "Strong footfall: the station handles {} passengers a day",
                ctx.passengers.unwrap_or_default()
            )
        },
    },
    InsightRule {
        name: "low_footfall",
        applies: |ctx| ctx.passengers.is_some_and(|p| p < LOW_PASSENGERS),
        remark: |_| {
            "Light footfall: fewer than 10,000 daily passengers, walk-in demand will be limited"
                .to_string()
        },
    },
    InsightRule {
        name: "major_hub",
        applies: |ctx| ctx.station_rank.is_some_and(|r| r <= MAJOR_HUB_RANK),
        remark: |ctx| {
            format!(
                "Major hub: ranked #{} by daily passengers",
                ctx.station_rank.unwrap_or_default()
            )
        },
    },
    InsightRule {
        name: "excellent_access",
        applies: |ctx| positive_walk(ctx).is_some_and(|w| w <= EXCELLENT_WALK_MINUTES),
        remark: |_| "Excellent access: within a 3-minute walk of the station".to_string(),
    },
    InsightRule {
        name: "long_walk",
        applies: |ctx| positive_walk(ctx).is_some_and(|w| w > LONG_WALK_MINUTES),
        remark: |_| "Long walk: more than 10 minutes from the station".to_string(),
    },
    InsightRule {
        name: "business_district",
        applies: |ctx| ctx.nearby_companies >= BUSINESS_DISTRICT_COMPANIES,
        remark: |ctx| {
            format!(
                "Business district: around {} companies nearby, expect weekday meeting demand",
                ctx.nearby_companies
            )
        },
    },
    InsightRule {
        name: "top_rank",
        applies: |ctx| ctx.rank == LocationRank::A,
        remark: |ctx| format!("Rank A location (score {}): a prime site", ctx.score),
    },
    InsightRule {
        name: "weak_rank",
        applies: |ctx| matches!(ctx.rank, LocationRank::D | LocationRank::E),
        remark: |ctx| {
            format!(
                "Rank {} location (score {}): pricing and promotion need extra care",
                ctx.rank, ctx.score
            )
        },
    },
];

/// Remarks of every applicable rule, in table order
pub fn generate_insights(ctx: &InsightContext) -> Vec<String> {
    INSIGHT_RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.remark)(ctx))
        .collect()
}
