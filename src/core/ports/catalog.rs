//! Compatibility catalog port
//!
//! Defines the interface for looking up parts compatible with an identifier.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::{CompatiblePart, PartIdentifier};

/// The catalog could not answer
///
/// Distinct from an empty answer, which is a valid result.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The source could not be reached or read
    #[error("compatibility catalog unavailable at {location}")]
    Unavailable {
        /// Where the catalog was expected
        location: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The source answered with data that is not a parts list
    #[error("compatibility catalog at {location} is malformed: {reason}")]
    Malformed {
        /// Where the catalog was read from
        location: String,
        /// What was wrong with it
        reason: String,
    },

    /// The source did not answer in time
    #[error("compatibility catalog did not respond within {0:?}")]
    TimedOut(Duration),
}

/// Source of compatible parts, keyed by normalized identifier
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompatibilityCatalog: Send + Sync {
    /// Parts compatible with `identifier`, in the source's own order
    ///
    /// Returns an empty list when nothing is known for the identifier.
    async fn compatible_parts(
        &self,
        identifier: &PartIdentifier,
    ) -> Result<Vec<CompatiblePart>, ResolutionError>;
}
