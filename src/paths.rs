//! Centralized path definitions for partlookup
//!
//! ## Config discovery
//!
//! ```text
//! ./partlookup.toml                      # Project-local config (checked first)
//! <config_dir>/partlookup/config.toml    # User-level config
//! ```
//!
//! `<config_dir>` is the platform config directory (`~/.config` on Linux).

use std::path::PathBuf;

/// Project-local configuration filename
pub const LOCAL_CONFIG: &str = "partlookup.toml";

/// Directory name under the platform config directory
const GLOBAL_DIR: &str = "partlookup";

/// User-level configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default exclusion registry file, relative to the config location
pub const DEFAULT_REGISTRY_FILE: &str = "exclusions.json";

/// Default compatibility catalog file, relative to the config location
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Get path to the project-local config file.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG)
}

/// Get the user-level config directory, if the platform has one.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR))
}

/// Get the user-level config file path.
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}
