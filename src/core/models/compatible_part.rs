//! Compatible part records returned by a catalog

use serde::{Deserialize, Serialize};

/// A part that can stand in for the one looked up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatiblePart {
    /// Catalog part number
    pub part_number: String,

    /// Free-form description
    pub description: String,

    /// Manufacturer name
    pub manufacturer: String,

    /// Unit price, never negative
    pub price: f64,
}

impl CompatiblePart {
    /// Create a new compatible part
    pub fn new(
        part_number: impl Into<String>,
        description: impl Into<String>,
        manufacturer: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            part_number: part_number.into(),
            description: description.into(),
            manufacturer: manufacturer.into(),
            price,
        }
    }

    /// Whether the price is a finite, non-negative number
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}
