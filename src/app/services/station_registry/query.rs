//! Station lookup and search functionality
//!
//! Free-text station names are normalized before matching: the trailing
//! station glyph is dropped, full-size KE is folded into small KE, and
//! full-width spaces become ASCII spaces.

use super::StationRegistry;
use crate::app::models::{ReferenceStation, StationInfo};
use crate::constants::{FULL_WIDTH_SPACE, KATAKANA_KE, KATAKANA_SMALL_KE, STATION_SUFFIX};
use tracing::debug;

/// How a query was matched to a station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    /// One name contains the other
    Substring,
}

/// Result of resolving a free-text station name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationResolution<'a> {
    Resolved {
        station: &'a ReferenceStation,
        /// 1-based rank by daily passengers
        rank: usize,
        match_kind: MatchKind,
    },
    Unresolved {
        /// Normalized form of the query
        query: String,
    },
}

impl StationResolution<'_> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, StationResolution::Resolved { .. })
    }

    /// Daily passengers of the resolved station
    pub fn passengers(&self) -> Option<u64> {
        match self {
            StationResolution::Resolved { station, .. } => Some(station.passengers),
            StationResolution::Unresolved { .. } => None,
        }
    }

    pub fn rank(&self) -> Option<usize> {
        match self {
            StationResolution::Resolved { rank, .. } => Some(*rank),
            StationResolution::Unresolved { .. } => None,
        }
    }

    /// Station part of the location report
    pub fn to_station_info(&self) -> StationInfo {
        match self {
            StationResolution::Resolved { station, rank, .. } => StationInfo {
                name: station.name.clone(),
                passengers: Some(station.passengers),
                line: Some(station.line.clone()),
                prefecture: Some(station.prefecture.clone()),
                rank: Some(*rank),
            },
            StationResolution::Unresolved { query } => StationInfo {
                name: query.clone(),
                passengers: None,
                line: None,
                prefecture: None,
                rank: None,
            },
        }
    }
}

/// Normalize a station name for matching
pub fn normalize_station_name(name: &str) -> String {
    let unified: String = name
        .chars()
        .map(|c| match c {
            KATAKANA_KE => KATAKANA_SMALL_KE,
            FULL_WIDTH_SPACE => ' ',
            _ => c,
        })
        .collect();

    let trimmed = unified.trim();
    trimmed
        .strip_suffix(STATION_SUFFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

impl StationRegistry {
    /// Resolve a free-text station name
    ///
    /// Exact normalized match first; otherwise the first station in dataset
    /// order whose name contains the query or is contained in it. Nested
    /// names are not disambiguated: the earlier station wins.
    pub fn resolve(&self, query: &str) -> StationResolution<'_> {
        let normalized = normalize_station_name(query);

        if normalized.is_empty() {
            return StationResolution::Unresolved { query: normalized };
        }

        let exact = self.normalized_names.iter().position(|n| *n == normalized);
        let (index, match_kind) = match exact {
            Some(index) => (index, MatchKind::Exact),
            None => {
                let partial = self.normalized_names.iter().position(|n| {
                    !n.is_empty() && (n.contains(&normalized) || normalized.contains(n.as_str()))
                });
                match partial {
                    Some(index) => (index, MatchKind::Substring),
                    None => {
                        debug!("No station matched '{}'", normalized);
                        return StationResolution::Unresolved { query: normalized };
                    }
                }
            }
        };

        let station = &self.stations[index];
        debug!(
            "Resolved '{}' to '{}' ({:?} match)",
            normalized, station.name, match_kind
        );

        StationResolution::Resolved {
            station,
            rank: self.ranks[index],
            match_kind,
        }
    }

    /// Stations ordered by rank, paired with their rank
    pub fn stations_by_rank(&self) -> Vec<(usize, &ReferenceStation)> {
        let mut ranked: Vec<(usize, &ReferenceStation)> = self
            .ranks
            .iter()
            .copied()
            .zip(self.stations.iter())
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked
    }

    /// Estimated company count for an address
    ///
    /// The first area whose keyword appears in the address wins.
    pub fn estimate_nearby_companies(&self, address: &str) -> Option<u32> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }

        self.areas
            .iter()
            .find(|area| !area.keyword.is_empty() && address.contains(area.keyword.as_str()))
            .map(|area| area.companies)
    }
}
