//! Property-based tests for the format validator
//!
//! Uses proptest to verify properties that should hold for all inputs.

use partlookup::core::services::validate;
use proptest::prelude::*;

proptest! {
    /// Anything matching the grammar is accepted and lower-cased
    #[test]
    fn grammar_matches_are_accepted(
        prefix in "[0-9]{4}",
        suffix in "[A-Za-z0-9]{4,12}"
    ) {
        let raw = format!("{prefix}-{suffix}");
        let id = validate(&raw).unwrap();
        prop_assert_eq!(id.as_str(), raw.to_ascii_lowercase());
    }

    /// Surrounding whitespace and letter case never change the result
    #[test]
    fn whitespace_and_case_are_irrelevant(
        prefix in "[0-9]{4}",
        suffix in "[A-Za-z0-9]{4,12}",
        left in "[ \t\n]{0,3}",
        right in "[ \t\n]{0,3}"
    ) {
        let canonical = format!("{prefix}-{suffix}");
        let padded = format!("{left}{}{right}", canonical.to_ascii_uppercase());
        prop_assert_eq!(validate(&padded).unwrap(), validate(&canonical).unwrap());
    }

    /// Re-validating the display form yields the same identifier
    #[test]
    fn display_form_revalidates(
        prefix in "[0-9]{4}",
        suffix in "[A-Za-z0-9]{4,12}"
    ) {
        let first = validate(&format!("{prefix}-{suffix}")).unwrap();
        let again = validate(&first.display_form()).unwrap();
        prop_assert_eq!(first, again);
    }

    /// Suffixes shorter than four characters are always rejected
    #[test]
    fn short_suffix_rejected(
        prefix in "[0-9]{4}",
        suffix in "[A-Za-z0-9]{0,3}"
    ) {
        let raw = format!("{prefix}-{suffix}");
        prop_assert!(validate(&raw).is_err());
    }

    /// Any disallowed character in the suffix is rejected
    #[test]
    fn disallowed_character_rejected(
        prefix in "[0-9]{4}",
        head in "[A-Za-z0-9]{2}",
        bad in "[^A-Za-z0-9\\s]",
        tail in "[A-Za-z0-9]{2}"
    ) {
        let raw = format!("{prefix}-{head}{bad}{tail}");
        prop_assert!(validate(&raw).is_err());
    }

    /// Rejections always report the trimmed input
    #[test]
    fn rejection_reports_trimmed_input(raw in "\\PC{0,20}") {
        if let Err(err) = validate(&raw) {
            prop_assert_eq!(err.input(), raw.trim());
        }
    }
}
