//! Mock implementations of port traits for testing
//!
//! These mocks record how often they were called and answer with scripted
//! data, without any real I/O.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use partlookup::core::models::{CompatiblePart, ExclusionEntry, PartIdentifier};
use partlookup::core::ports::{
    CompatibilityCatalog, ExclusionRegistry, RegistryLoadError, ResolutionError,
};

/// Registry answering with a fixed snapshot, or failing
pub struct MockRegistry {
    entries: Option<Vec<ExclusionEntry>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockRegistry {
    pub fn with_entries(entries: Vec<ExclusionEntry>) -> Self {
        Self {
            entries: Some(entries),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::with_entries(Vec::new())
    }

    /// A registry whose source is down
    pub fn failing() -> Self {
        Self {
            entries: None,
            ..Self::empty()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared call counter, readable after the mock is moved into an `Arc`
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ExclusionRegistry for MockRegistry {
    async fn load(&self) -> Result<Vec<ExclusionEntry>, RegistryLoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.entries.clone().ok_or_else(|| RegistryLoadError::Unavailable {
            location: "mock://registry".to_string(),
            source: std::io::Error::other("registry offline"),
        })
    }
}

/// Catalog answering every identifier with the same list, or failing
pub struct MockCatalog {
    parts: Option<Vec<CompatiblePart>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    seen: Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn with_parts(parts: Vec<CompatiblePart>) -> Self {
        Self {
            parts: Some(parts),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn empty() -> Self {
        Self::with_parts(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            parts: None,
            ..Self::empty()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Identifiers the catalog was asked about, in call order
    pub fn seen(&self) -> Arc<std::sync::Mutex<Vec<String>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl CompatibilityCatalog for MockCatalog {
    async fn compatible_parts(
        &self,
        identifier: &PartIdentifier,
    ) -> Result<Vec<CompatiblePart>, ResolutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(identifier.as_str().to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.parts.clone().ok_or_else(|| ResolutionError::Malformed {
            location: "mock://catalog".to_string(),
            reason: "unexpected end of input".to_string(),
        })
    }
}
