//! Format validation for raw part number input
//!
//! Pure: no I/O, no shared mutable state.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{FormatError, PartIdentifier};

/// Four ASCII digits, a dash, then at least four ASCII alphanumerics
const PART_NUMBER_PATTERN: &str = "^[0-9]{4}-[A-Za-z0-9]{4,}$";

static PART_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PART_NUMBER_PATTERN).expect("part number pattern compiles"));

/// Byte-order mark, trimmed along with Unicode whitespace
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Validate raw operator input and normalize it
///
/// Leading and trailing whitespace (and any byte-order mark) is trimmed
/// before the grammar check.
/// The check runs on the trimmed text as typed, so letter case never affects
/// acceptance; the returned identifier is lower case.
///
/// On failure the error carries the trimmed input, never the raw string.
pub fn validate(raw: &str) -> Result<PartIdentifier, FormatError> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

    if !PART_NUMBER.is_match(trimmed) {
        return Err(FormatError::new(trimmed));
    }

    Ok(PartIdentifier::from_normalized(trimmed.to_ascii_lowercase()))
}
