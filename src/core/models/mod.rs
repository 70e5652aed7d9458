//! Domain models for partlookup
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`PartIdentifier`] - A validated, normalized part number
//! - [`ExclusionEntry`] - "This part must not be resolved, because..."
//! - [`CompatiblePart`] - A catalog record that can replace the looked-up part
//! - [`LookupOutcome`] - How a lookup ended
//! - [`LookupStage`] - Where a lookup is in the pipeline

mod compatible_part;
mod exclusion;
mod outcome;
mod part_identifier;

pub use compatible_part::CompatiblePart;
pub use exclusion::ExclusionEntry;
pub use outcome::{LookupOutcome, LookupStage};
pub use part_identifier::{FormatError, PartIdentifier};
