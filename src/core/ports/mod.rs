//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the lookup pipeline and the
//! systems it consults (exclusion registry, compatibility catalog).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete sources. Both
//! are async: each call is a suspension point in an otherwise sequential
//! pipeline.

mod catalog;
mod exclusion_registry;

pub use catalog::{CompatibilityCatalog, ResolutionError};
pub use exclusion_registry::{ExclusionRegistry, RegistryLoadError};

#[cfg(test)]
pub(crate) use catalog::MockCompatibilityCatalog;
#[cfg(test)]
pub(crate) use exclusion_registry::MockExclusionRegistry;
