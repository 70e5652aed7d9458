//! Compatibility resolution
//!
//! Thin layer over a [`CompatibilityCatalog`]. The identifier is assumed to be
//! validated and confirmed not excluded; neither is re-checked here.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::core::models::{CompatiblePart, PartIdentifier};
use crate::core::ports::{CompatibilityCatalog, ResolutionError};

/// Resolves compatible parts through a catalog source
#[derive(Clone)]
pub struct CompatibilityResolver {
    catalog: Arc<dyn CompatibilityCatalog>,
    timeout: Option<Duration>,
}

impl CompatibilityResolver {
    /// Create a resolver over a catalog source
    pub fn new(catalog: Arc<dyn CompatibilityCatalog>) -> Self {
        Self {
            catalog,
            timeout: None,
        }
    }

    /// Bound how long a catalog call may take
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Compatible parts for `identifier`, exactly as the catalog ordered them
    ///
    /// An empty list is a valid answer. No sorting or deduplication happens.
    pub async fn resolve(
        &self,
        identifier: &PartIdentifier,
    ) -> Result<Vec<CompatiblePart>, ResolutionError> {
        let parts = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.catalog.compatible_parts(identifier))
                .await
                .map_err(|_| ResolutionError::TimedOut(limit))??,
            None => self.catalog.compatible_parts(identifier).await?,
        };
        debug!("Catalog returned {} part(s) for {identifier}", parts.len());
        Ok(parts)
    }
}

impl std::fmt::Debug for CompatibilityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompatibilityResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
