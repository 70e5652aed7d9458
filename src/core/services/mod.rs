//! Business logic services
//!
//! - [`validator`] - Normalize and validate raw part number input
//! - [`exclusion`] - Match identifiers against an exclusion registry
//! - [`resolver`] - Resolve compatible parts through a catalog
//! - [`orchestrator`] - Sequence the three into a single lookup

pub mod exclusion;
pub mod orchestrator;
pub mod resolver;
pub mod validator;

pub use exclusion::{ExclusionChecker, find_exclusion, is_excluded};
pub use orchestrator::{GENERIC_FAILURE_MESSAGE, LookupError, LookupOrchestrator, TracedLookup};
pub use resolver::CompatibilityResolver;
pub use validator::validate;
