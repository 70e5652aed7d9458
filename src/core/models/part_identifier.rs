//! Part identifiers
//!
//! A part identifier is four ASCII digits, a single dash, and four or more
//! ASCII alphanumerics (e.g. `1234-ABCD`, `0000-abc123`).
//!
//! Only the normalized (trimmed, lower-case) form is ever stored. Upper case
//! is a display convention applied at the edges via [`PartIdentifier::display_form`].
//!
//! # Examples
//!
//! ```
//! use partlookup::core::models::PartIdentifier;
//!
//! let id: PartIdentifier = " 1234-aBcD ".parse().unwrap();
//! assert_eq!(id.as_str(), "1234-abcd");
//! assert_eq!(id.display_form(), "1234-ABCD");
//!
//! assert!("abcd-1234".parse::<PartIdentifier>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::validator;

/// A raw input failed the part identifier grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid part number format: \"{input}\"")]
pub struct FormatError {
    input: String,
}

impl FormatError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The trimmed input that was rejected
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A validated, normalized part identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartIdentifier(String);

impl PartIdentifier {
    /// Validate and normalize raw input
    ///
    /// Equivalent to [`validator::validate`].
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        validator::validate(raw)
    }

    /// Wrap an already-normalized value. Callers must have checked the grammar.
    pub(crate) const fn from_normalized(normalized: String) -> Self {
        Self(normalized)
    }

    /// The normalized (lower-case) identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier as shown to operators (upper case)
    #[must_use]
    pub fn display_form(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    /// Case-insensitive comparison against an arbitrary part number
    #[must_use]
    pub fn matches(&self, part_number: &str) -> bool {
        part_number.to_lowercase() == self.0
    }
}

impl fmt::Display for PartIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartIdentifier {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PartIdentifier {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PartIdentifier> for String {
    fn from(id: PartIdentifier) -> Self {
        id.0
    }
}

impl AsRef<str> for PartIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
