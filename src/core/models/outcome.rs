//! Lookup outcomes and pipeline stages
//!
//! A lookup always ends in exactly one [`LookupOutcome`] or in an
//! infrastructure error. Rejection and exclusion are outcomes, not errors:
//! callers branch on them as data.

use serde::{Deserialize, Serialize};

use super::{CompatiblePart, ExclusionEntry};

/// Terminal result of a single lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupOutcome {
    /// The input failed format validation
    Rejected {
        /// Human-readable reason, naming the rejected input
        reason: String,
    },

    /// The identifier is on the exclusion registry
    Excluded {
        /// Identifier in display (upper) case
        identifier: String,
        /// The registry entry that matched
        entry: ExclusionEntry,
    },

    /// The identifier was resolved against the catalog (possibly to nothing)
    Resolved {
        /// Identifier in display (upper) case
        identifier: String,
        /// Compatible parts, in catalog order
        parts: Vec<CompatiblePart>,
    },
}

impl LookupOutcome {
    /// The stage this outcome terminates in
    #[must_use]
    pub const fn stage(&self) -> LookupStage {
        match self {
            Self::Rejected { .. } => LookupStage::Rejected,
            Self::Excluded { .. } => LookupStage::Excluded,
            Self::Resolved { .. } => LookupStage::Resolved,
        }
    }

    /// Display identifier, if the input got past validation
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Rejected { .. } => None,
            Self::Excluded { identifier, .. } | Self::Resolved { identifier, .. } => {
                Some(identifier.as_str())
            },
        }
    }
}

/// States of the lookup state machine
///
/// ```text
/// Idle -> Validating -> CheckingExclusion -> Resolving -> Resolved
///             |                 |
///             v                 v
///          Rejected          Excluded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStage {
    /// Nothing has happened yet
    #[default]
    Idle,
    /// Checking the input grammar
    Validating,
    /// Loading the registry and testing membership
    CheckingExclusion,
    /// Asking the catalog for compatible parts
    Resolving,
    /// Terminal: format failure
    Rejected,
    /// Terminal: identifier is excluded
    Excluded,
    /// Terminal: catalog answered
    Resolved,
}

impl LookupStage {
    /// Whether no further transition is possible
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Excluded | Self::Resolved)
    }

    /// Whether `self -> next` is a legal transition
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Validating)
                | (Self::Validating, Self::Rejected | Self::CheckingExclusion)
                | (Self::CheckingExclusion, Self::Excluded | Self::Resolving)
                | (Self::Resolving, Self::Resolved)
        )
    }
}

impl std::fmt::Display for LookupStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::CheckingExclusion => write!(f, "checking_exclusion"),
            Self::Resolving => write!(f, "resolving"),
            Self::Rejected => write!(f, "rejected"),
            Self::Excluded => write!(f, "excluded"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}
