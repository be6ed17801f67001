//! Station registry loading and caching
//!
//! The reference dataset is a static JSON file read at most once per cache.
//! A missing or malformed file degrades to an empty registry so that
//! scoring still runs, with every station lookup unresolved.

use super::StationRegistry;
use crate::app::models::StationDataset;
use crate::error::{InsightError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

impl StationRegistry {
    /// Load the reference dataset from a JSON file
    ///
    /// # Errors
    /// * `InsightError::FileNotFound` if the file does not exist
    /// * `InsightError::Io` for other read failures
    /// * `InsightError::DatasetParse` if the JSON does not match the dataset shape
    pub async fn load(path: &Path) -> Result<Self> {
        info!("Loading station dataset: {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| InsightError::read_failed(path, e))?;

        let dataset: StationDataset =
            serde_json::from_str(&content).map_err(|source| InsightError::DatasetParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut registry = Self::new(dataset);
        registry.source_path = Some(path.to_path_buf());

        info!(
            "Station dataset loaded: {} stations, {} areas",
            registry.station_count(),
            registry.areas.len()
        );

        Ok(registry)
    }

    /// Load the dataset, falling back to an empty registry on failure
    pub async fn load_or_empty(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(registry) => registry,
            Err(e) => {
                warn!("Station dataset unavailable, lookups will not resolve: {}", e);
                Self::empty()
            }
        }
    }
}

/// Single-assignment memo of the station registry
///
/// The first caller loads the dataset; later callers share the same
/// registry. Nothing is ever invalidated because the source is static.
#[derive(Debug)]
pub struct StationDatasetCache {
    path: PathBuf,
    registry: OnceCell<Arc<StationRegistry>>,
}

impl StationDatasetCache {
    /// Create a cache that loads lazily from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            registry: OnceCell::new(),
        }
    }

    /// Create a cache already holding a registry (fixtures, preloaded data)
    pub fn with_registry(registry: StationRegistry) -> Self {
        let path = registry.source_path.clone().unwrap_or_default();
        Self {
            path,
            registry: OnceCell::new_with(Some(Arc::new(registry))),
        }
    }

    /// Get the registry, loading it on first use
    pub async fn get(&self) -> Arc<StationRegistry> {
        self.registry
            .get_or_init(|| async { Arc::new(StationRegistry::load_or_empty(&self.path).await) })
            .await
            .clone()
    }

    /// Whether the registry has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.registry.initialized()
    }
}
