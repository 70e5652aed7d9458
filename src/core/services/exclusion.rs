//! Exclusion checking
//!
//! Membership is decided on the part-number field, case-insensitively. The
//! registry snapshot does not need to be normalized by whoever supplies it.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::core::models::{ExclusionEntry, PartIdentifier};
use crate::core::ports::{ExclusionRegistry, RegistryLoadError};

/// Whether `identifier` appears anywhere in `registry`
#[must_use]
pub fn is_excluded(identifier: &PartIdentifier, registry: &[ExclusionEntry]) -> bool {
    find_exclusion(identifier, registry).is_some()
}

/// First registry entry whose part number matches `identifier`
///
/// Duplicate entries are harmless; the first one wins.
#[must_use]
pub fn find_exclusion<'a>(
    identifier: &PartIdentifier,
    registry: &'a [ExclusionEntry],
) -> Option<&'a ExclusionEntry> {
    registry.iter().find(|entry| identifier.matches(&entry.part_number))
}

/// Loads registry snapshots and tests identifiers against them
#[derive(Clone)]
pub struct ExclusionChecker {
    registry: Arc<dyn ExclusionRegistry>,
    timeout: Option<Duration>,
}

impl ExclusionChecker {
    /// Create a checker over a registry source
    pub fn new(registry: Arc<dyn ExclusionRegistry>) -> Self {
        Self {
            registry,
            timeout: None,
        }
    }

    /// Bound how long a registry load may take
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load a fresh registry snapshot
    ///
    /// Failures are returned as-is; an unavailable registry is never treated
    /// as an empty one.
    pub async fn load_registry(&self) -> Result<Vec<ExclusionEntry>, RegistryLoadError> {
        let entries = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.registry.load())
                .await
                .map_err(|_| RegistryLoadError::TimedOut(limit))??,
            None => self.registry.load().await?,
        };
        debug!("Loaded exclusion registry snapshot ({} entries)", entries.len());
        Ok(entries)
    }

    /// Load a snapshot and return the matching entry, if any
    pub async fn check(
        &self,
        identifier: &PartIdentifier,
    ) -> Result<Option<ExclusionEntry>, RegistryLoadError> {
        let snapshot = self.load_registry().await?;
        Ok(find_exclusion(identifier, &snapshot).cloned())
    }
}

impl std::fmt::Debug for ExclusionChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusionChecker").field("timeout", &self.timeout).finish_non_exhaustive()
    }
}
