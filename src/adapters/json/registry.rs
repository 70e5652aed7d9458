//! File-backed exclusion registry
//!
//! Implements the `ExclusionRegistry` port over a JSON array:
//!
//! ```json
//! [{ "PartNumber": "1234-ABCD", "Description": "Discontinued" }]
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::models::ExclusionEntry;
use crate::core::ports::{ExclusionRegistry, RegistryLoadError};

/// Exclusion registry backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRegistry {
    path: PathBuf,
}

impl JsonFileRegistry {
    /// Create a registry reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this registry reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl ExclusionRegistry for JsonFileRegistry {
    async fn load(&self) -> Result<Vec<ExclusionEntry>, RegistryLoadError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            RegistryLoadError::Unavailable {
                location: self.location(),
                source,
            }
        })?;

        serde_json::from_str(&content).map_err(|e| RegistryLoadError::Malformed {
            location: self.location(),
            reason: e.to_string(),
        })
    }
}
