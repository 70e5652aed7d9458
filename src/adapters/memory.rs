//! In-memory adapters
//!
//! Fixed collaborators for embedding the pipeline without any backing
//! store, and for tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::models::{CompatiblePart, ExclusionEntry, PartIdentifier};
use crate::core::ports::{
    CompatibilityCatalog, ExclusionRegistry, RegistryLoadError, ResolutionError,
};

/// Exclusion registry holding a fixed list
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    entries: Vec<ExclusionEntry>,
}

impl InMemoryRegistry {
    /// Create a registry over `entries`
    #[must_use]
    pub const fn new(entries: Vec<ExclusionEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ExclusionRegistry for InMemoryRegistry {
    async fn load(&self) -> Result<Vec<ExclusionEntry>, RegistryLoadError> {
        Ok(self.entries.clone())
    }
}

/// Catalog holding a fixed identifier-to-parts map
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    parts: HashMap<PartIdentifier, Vec<CompatiblePart>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the compatible parts for `identifier`, replacing any previous list
    #[must_use]
    pub fn with_parts(mut self, identifier: PartIdentifier, parts: Vec<CompatiblePart>) -> Self {
        self.parts.insert(identifier, parts);
        self
    }
}

#[async_trait]
impl CompatibilityCatalog for InMemoryCatalog {
    async fn compatible_parts(
        &self,
        identifier: &PartIdentifier,
    ) -> Result<Vec<CompatiblePart>, ResolutionError> {
        Ok(self.parts.get(identifier).cloned().unwrap_or_default())
    }
}
