//! File-backed compatibility catalog
//!
//! Implements the `CompatibilityCatalog` port over a JSON object keyed by
//! part identifier:
//!
//! ```json
//! {
//!   "0000-ABC123": [
//!     { "partNumber": "0000-ALT1", "description": "...", "manufacturer": "...", "price": 45.99 }
//!   ]
//! }
//! ```
//!
//! Keys are compared case-insensitively. An identifier with no key has no
//! known compatible parts. Two keys that differ only in case make the file
//! malformed for that identifier.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::models::{CompatiblePart, PartIdentifier};
use crate::core::ports::{CompatibilityCatalog, ResolutionError};

/// Compatibility catalog backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    /// Create a catalog reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this catalog reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, reason: impl Into<String>) -> ResolutionError {
        ResolutionError::Malformed {
            location: self.path.display().to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CompatibilityCatalog for JsonFileCatalog {
    async fn compatible_parts(
        &self,
        identifier: &PartIdentifier,
    ) -> Result<Vec<CompatiblePart>, ResolutionError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            ResolutionError::Unavailable {
                location: self.path.display().to_string(),
                source,
            }
        })?;

        let catalog: HashMap<String, Vec<CompatiblePart>> =
            serde_json::from_str(&content).map_err(|e| self.malformed(e.to_string()))?;

        let mut matches: Vec<(String, Vec<CompatiblePart>)> =
            catalog.into_iter().filter(|(key, _)| identifier.matches(key)).collect();
        if matches.len() > 1 {
            let mut keys: Vec<_> = matches.into_iter().map(|(key, _)| key).collect();
            keys.sort();
            return Err(self.malformed(format!(
                "keys {} all name {}",
                keys.join(", "),
                identifier.display_form()
            )));
        }
        let Some((_, parts)) = matches.pop() else {
            return Ok(Vec::new());
        };

        if let Some(bad) = parts.iter().find(|p| !p.has_valid_price()) {
            return Err(self.malformed(format!(
                "part {} has invalid price {}",
                bad.part_number, bad.price
            )));
        }

        Ok(parts)
    }
}
