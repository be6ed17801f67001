//! Station registry for free-text station lookups
//!
//! This module holds the static reference dataset of stations with their
//! daily passenger counts. It resolves free-text station names (exact match
//! first, then a bidirectional substring match) and reports each station's
//! rank by passengers across the whole dataset.

use crate::app::models::{AreaCompanyCount, ReferenceStation, StationDataset};
use std::path::PathBuf;

pub mod loader;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::StationDatasetCache;
pub use query::{MatchKind, StationResolution, normalize_station_name};

/// Reference stations indexed for name resolution and rank lookup
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Stations in dataset order
    pub(crate) stations: Vec<ReferenceStation>,

    /// Normalized name of each station, parallel to `stations`
    pub(crate) normalized_names: Vec<String>,

    /// 1-based passenger rank of each station, parallel to `stations`
    pub(crate) ranks: Vec<usize>,

    /// Address keyword to company count table
    pub(crate) areas: Vec<AreaCompanyCount>,

    /// File the dataset was loaded from, if any
    pub(crate) source_path: Option<PathBuf>,
}

impl StationRegistry {
    /// Create an empty registry; every lookup is unresolved
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed dataset
    pub fn new(dataset: StationDataset) -> Self {
        let StationDataset { stations, areas } = dataset;

        let normalized_names = stations
            .iter()
            .map(|s| normalize_station_name(&s.name))
            .collect();

        // Stable sort, so equal counts keep dataset order
        let mut order: Vec<usize> = (0..stations.len()).collect();
        order.sort_by(|&a, &b| stations[b].passengers.cmp(&stations[a].passengers));

        let mut ranks = vec![0; stations.len()];
        for (position, &index) in order.iter().enumerate() {
            ranks[index] = position + 1;
        }

        Self {
            stations,
            normalized_names,
            ranks,
            areas,
            source_path: None,
        }
    }

    /// Get the total number of stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations in dataset order
    pub fn stations(&self) -> &[ReferenceStation] {
        &self.stations
    }

    /// File the dataset was loaded from
    pub fn source_path(&self) -> Option<&std::path::Path> {
        self.source_path.as_deref()
    }
}
