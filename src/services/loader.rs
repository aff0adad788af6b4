use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::UniversityStore;
use crate::models::UniversityRecord;

/// Errors that can occur while loading the university dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("University data file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in data file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse university records from a JSON array
pub fn parse_universities(json: &str) -> Result<Vec<UniversityRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the university dataset from a JSON file into a store
///
/// Called once at startup; the store is never re-read afterwards.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<UniversityStore, DatasetError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound(path.to_path_buf())
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let records = parse_universities(&contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Loaded {} universities from {}", records.len(), path.display());

    Ok(UniversityStore::new(records))
}
