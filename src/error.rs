//! Error handling for ingestion and location scoring.
//!
//! Only structural failures live here: unreadable files, a malformed
//! reference dataset, invalid configuration. Heuristic misses (an unmatched
//! header, an unknown station, an odd date) are ordinary values in the
//! output types and never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("No header line found in file: {path}")]
    EmptyInput { path: PathBuf },

    #[error("Reference dataset is malformed: {path} - {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl InsightError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Map a read failure on `path`, keeping "not found" distinguishable
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path: path.into() }
        } else {
            Self::Io(source)
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;
