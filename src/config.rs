//! Lookup configuration
//!
//! Says where the exclusion registry and compatibility catalog live and how
//! long a single call to either may take.
//!
//! ```toml
//! [registry]
//! path = "exclusions.json"
//!
//! [catalog]
//! path = "catalog.json"
//!
//! [lookup]
//! timeout_ms = 5000
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::adapters::{JsonFileCatalog, JsonFileRegistry};
use crate::core::services::LookupOrchestrator;
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Exclusion registry source
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Compatibility catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Pipeline settings
    #[serde(default)]
    pub lookup: LookupSettings,
}

/// Where the exclusion registry is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Path to the registry JSON file
    #[serde(default = "default_registry_path")]
    pub path: PathBuf,
}

fn default_registry_path() -> PathBuf {
    PathBuf::from(paths::DEFAULT_REGISTRY_FILE)
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_registry_path(),
        }
    }
}

/// Where the compatibility catalog is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(paths::DEFAULT_CATALOG_FILE)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Pipeline settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LookupSettings {
    /// Per-call limit for registry and catalog, in milliseconds (none if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl LookupConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("invalid config TOML")?;
        if config.lookup.timeout_ms == Some(0) {
            bail!("lookup.timeout_ms must be greater than zero");
        }
        Ok(config)
    }

    /// Load a config file, resolving relative paths against its directory
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("failed to load config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Find and load the active config
    ///
    /// An explicit path must exist. Otherwise the local file, then the
    /// user-level file, are tried; defaults apply if neither exists.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            debug!("Using config {}", path.display());
            return Self::load_from(path);
        }

        let candidates = std::iter::once(paths::local_config()).chain(paths::global_config());
        for candidate in candidates {
            if candidate.is_file() {
                debug!("Using config {}", candidate.display());
                return Self::load_from(&candidate);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Resolve relative source paths against `base`
    #[must_use]
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.registry.path.is_relative() {
            self.registry.path = base.join(&self.registry.path);
        }
        if self.catalog.path.is_relative() {
            self.catalog.path = base.join(&self.catalog.path);
        }
        self
    }

    /// Per-call timeout, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.lookup.timeout_ms.map(Duration::from_millis)
    }

    /// Build an orchestrator over the configured JSON sources
    #[must_use]
    pub fn orchestrator(&self) -> LookupOrchestrator {
        LookupOrchestrator::new(
            Arc::new(JsonFileRegistry::new(self.registry.path.clone())),
            Arc::new(JsonFileCatalog::new(self.catalog.path.clone())),
        )
        .with_timeout(self.timeout())
    }
}
