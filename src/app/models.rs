//! Data models for booking ingestion and location scoring
//!
//! This module contains the records produced by the two engines: canonical
//! booking rows from the ingestion side, and reference stations, location
//! factors and location reports from the scoring side. All of them are
//! transient values; nothing here is persisted by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Booking Ingestion
// =============================================================================

/// Booking attributes that heterogeneous export headers are mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    PropertyName,
    UsageDate,
    StartTime,
    EndTime,
    GrossAmount,
    NetAmount,
    GuestName,
}

impl CanonicalField {
    /// Every canonical field, in output order
    pub const ALL: [CanonicalField; 7] = [
        CanonicalField::PropertyName,
        CanonicalField::UsageDate,
        CanonicalField::StartTime,
        CanonicalField::EndTime,
        CanonicalField::GrossAmount,
        CanonicalField::NetAmount,
        CanonicalField::GuestName,
    ];

    /// Field name as it appears in serialized rows
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::PropertyName => "platformPropertyName",
            CanonicalField::UsageDate => "usageDate",
            CanonicalField::StartTime => "startTime",
            CanonicalField::EndTime => "endTime",
            CanonicalField::GrossAmount => "grossAmount",
            CanonicalField::NetAmount => "netAmount",
            CanonicalField::GuestName => "guestName",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell the normalizers could not bring into canonical shape
///
/// The raw text is kept so an operator can correct it before committing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RowIssue {
    /// Date cell in none of the recognized layouts; `usageDate` left empty
    UnrecognizedDate { raw: String },

    /// ISO-shaped date that is not a calendar date (e.g. 2024-02-30)
    ImplausibleDate { raw: String },

    /// Time cell that is not clock-shaped
    UnrecognizedTime { field: CanonicalField, raw: String },

    /// Amount cell with no leading digits; normalized to 0
    UnparsedAmount { field: CanonicalField, raw: String },
}

/// Normalized booking row handed to the import-commit endpoint
///
/// `usage_date` is either empty or `YYYY-MM-DD`. Amounts are in the
/// smallest currency unit. Absent optional fields serialize as missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalBookingRow {
    pub platform_property_name: String,

    pub usage_date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    pub gross_amount: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,

    /// Low-confidence cells found while normalizing this row
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<RowIssue>,
}

impl CanonicalBookingRow {
    /// True when every cell normalized cleanly
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

// =============================================================================
// Reference Stations
// =============================================================================

/// One station of the static reference dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceStation {
    /// Station name without the trailing station glyph
    pub name: String,

    /// Administrative region (prefecture)
    #[serde(alias = "region", alias = "administrativeRegion")]
    pub prefecture: String,

    /// Operating line name
    #[serde(alias = "lineName")]
    pub line: String,

    /// Daily passengers (boardings plus alightings)
    #[serde(alias = "dailyPassengers")]
    pub passengers: u64,
}

/// Estimated number of companies for addresses containing `keyword`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCompanyCount {
    pub keyword: String,
    pub companies: u32,
}

/// On-disk shape of the reference dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDataset {
    pub stations: Vec<ReferenceStation>,

    #[serde(default)]
    pub areas: Vec<AreaCompanyCount>,
}

// =============================================================================
// Location Scoring
// =============================================================================

/// Inputs to the weighted scorer; each factor is independently optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFactors {
    pub station_passengers: Option<f64>,
    pub walk_minutes: Option<f64>,
    pub nearby_companies: Option<f64>,
}

impl LocationFactors {
    pub fn new(
        station_passengers: Option<f64>,
        walk_minutes: Option<f64>,
        nearby_companies: Option<f64>,
    ) -> Self {
        Self {
            station_passengers,
            walk_minutes,
            nearby_companies,
        }
    }
}

/// Five-grade band of a location score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationRank {
    A,
    B,
    C,
    D,
    E,
}

impl LocationRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationRank::A => "A",
            LocationRank::B => "B",
            LocationRank::C => "C",
            LocationRank::D => "D",
            LocationRank::E => "E",
        }
    }
}

impl fmt::Display for LocationRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Station part of a location report
///
/// Unresolved lookups keep the queried name and null every other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub name: String,
    pub passengers: Option<u64>,
    pub line: Option<String>,
    pub prefecture: Option<String>,
    /// 1-based position by daily passengers across the whole dataset
    pub rank: Option<usize>,
}

/// Request for a location evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub station_name: String,
    pub walk_minutes: Option<f64>,
    pub address: Option<String>,
}

/// Full result of a location evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReport {
    pub station_info: StationInfo,
    pub nearby_companies: u32,
    pub location_score: u8,
    pub location_rank: LocationRank,
    pub location_multiplier: f64,
    pub insights: Vec<String>,
}
