//! Exclusion registry port
//!
//! Defines the interface for loading the list of excluded part numbers.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::ExclusionEntry;

/// The registry could not produce a snapshot
///
/// Never interpreted as "no exclusions".
#[derive(Debug, Error)]
pub enum RegistryLoadError {
    /// The source could not be reached or read
    #[error("exclusion registry unavailable at {location}")]
    Unavailable {
        /// Where the registry was expected
        location: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The source answered with data that is not a registry
    #[error("exclusion registry at {location} is malformed: {reason}")]
    Malformed {
        /// Where the registry was read from
        location: String,
        /// What was wrong with it
        reason: String,
    },

    /// The source did not answer in time
    #[error("exclusion registry did not respond within {0:?}")]
    TimedOut(Duration),
}

/// Source of exclusion registry snapshots
///
/// Each call returns a complete, point-in-time snapshot. Implementations must
/// not hand out partially loaded data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExclusionRegistry: Send + Sync {
    /// Load the full registry
    async fn load(&self) -> Result<Vec<ExclusionEntry>, RegistryLoadError>;
}
