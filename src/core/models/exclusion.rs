//! Exclusion registry entries
//!
//! Field names follow the registry's wire format (`PartNumber`, `Description`).

use serde::{Deserialize, Serialize};

/// A part number that must never be sent for compatibility resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExclusionEntry {
    /// Part number as stored in the registry (any case)
    pub part_number: String,

    /// Why the part is excluded
    pub description: String,
}

impl ExclusionEntry {
    /// Create a new entry
    pub fn new(part_number: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            description: description.into(),
        }
    }
}
