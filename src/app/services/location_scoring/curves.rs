//! Piecewise-linear sub-score curves
//!
//! Each curve maps one raw factor onto 0-100. Segments meet at their knots,
//! so every curve is continuous and monotone over positive inputs.

use crate::constants::{company_curve, passenger_curve, walk_curve};

/// Linear interpolation of `value` from `[from, to]` onto `[low, high]`
fn lerp(value: f64, from: f64, to: f64, low: f64, high: f64) -> f64 {
    low + (value - from) / (to - from) * (high - low)
}

/// Sub-score for daily station passengers
///
/// 20-40 up to 10k, 40-70 up to 50k, 70-90 up to 100k, then 90-100
/// reaching the cap at 300k.
pub fn passenger_score(passengers: f64) -> f64 {
    use passenger_curve::{LARGE, MEDIUM, SATURATION, SMALL};

    if passengers <= SMALL {
        lerp(passengers, 0.0, SMALL, 20.0, 40.0)
    } else if passengers <= MEDIUM {
        lerp(passengers, SMALL, MEDIUM, 40.0, 70.0)
    } else if passengers <= LARGE {
        lerp(passengers, MEDIUM, LARGE, 70.0, 90.0)
    } else {
        lerp(passengers, LARGE, SATURATION, 90.0, 100.0).min(100.0)
    }
}

/// Sub-score for walking minutes from the station
///
/// 100 within a minute, -5/min to 3 and to 5 minutes, -6/min to 10
/// minutes, then -3/min down to a floor of 20.
pub fn walk_score(minutes: f64) -> f64 {
    use walk_curve::{DOORSTEP, FLOOR, MODERATE, NEAR, SHORT};

    if minutes <= DOORSTEP {
        100.0
    } else if minutes <= NEAR {
        100.0 - (minutes - DOORSTEP) * 5.0
    } else if minutes <= SHORT {
        90.0 - (minutes - NEAR) * 5.0
    } else if minutes <= MODERATE {
        80.0 - (minutes - SHORT) * 6.0
    } else {
        (50.0 - (minutes - MODERATE) * 3.0).max(FLOOR)
    }
}

/// Sub-score for the number of companies near the address
///
/// 20-30 up to 100, 30-50 up to 500, 50-70 up to 1000, then 70-100
/// reaching the cap at 3000.
pub fn company_score(companies: f64) -> f64 {
    use company_curve::{DENSE, MIXED, SATURATION, SPARSE};

    if companies <= SPARSE {
        lerp(companies, 0.0, SPARSE, 20.0, 30.0)
    } else if companies <= MIXED {
        lerp(companies, SPARSE, MIXED, 30.0, 50.0)
    } else if companies <= DENSE {
        lerp(companies, MIXED, DENSE, 50.0, 70.0)
    } else {
        lerp(companies, DENSE, SATURATION, 70.0, 100.0).min(100.0)
    }
}
