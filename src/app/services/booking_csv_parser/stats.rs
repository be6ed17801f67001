//! Import preview and parsing statistics
//!
//! The preview is what an operator reviews before committing an import: the
//! detected headers and encoding, which header each canonical field came
//! from, the normalized rows and a count of rows needing attention.

use super::encoding::DetectedEncoding;
use crate::app::models::{CanonicalBookingRow, CanonicalField};
use serde::{Deserialize, Serialize};

/// Header chosen for one canonical field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedColumn {
    pub field: CanonicalField,
    pub header_index: usize,
    pub header: String,
}

/// Everything produced by one import run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    /// Encoding used to decode the file
    pub encoding: DetectedEncoding,

    /// Raw header row as detected
    pub headers: Vec<String>,

    /// Field to header assignments, in canonical field order
    pub mapping: Vec<MappedColumn>,

    /// Canonical fields no header matched
    pub unmapped_fields: Vec<CanonicalField>,

    /// Normalized candidate rows, one per data line
    pub rows: Vec<CanonicalBookingRow>,

    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    /// Non-blank lines after the header
    pub data_lines: usize,

    /// Rows with at least one low-confidence cell
    pub rows_with_issues: usize,

    /// Rows whose field count differs from the header's
    pub ragged_rows: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of rows that normalized without issues, as a percentage
    pub fn clean_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            ((self.data_lines - self.rows_with_issues) as f64 / self.data_lines as f64) * 100.0
        }
    }

    /// Check if every row normalized cleanly
    pub fn is_clean(&self) -> bool {
        self.rows_with_issues == 0
    }
}
