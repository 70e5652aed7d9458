//! Output formatting for human and JSON modes
//!
//! This module turns lookup results into reports that can be rendered either
//! as human-readable text or machine-parseable JSON. Infrastructure failures
//! only ever render the generic message; their detail goes to the log.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CompatiblePart, ExclusionEntry, LookupOutcome, PartIdentifier};
use crate::core::services::LookupError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Shown under a resolved lookup with no parts
pub const NO_COMPATIBLE_PARTS_MESSAGE: &str = "No compatible parts found.";

/// Notice for an excluded identifier (display form expected)
#[must_use]
pub fn exclusion_message(identifier: &str) -> String {
    format!(
        "Part {identifier} is on the exclusions list and will not be sent for compatibility lookup."
    )
}

/// Heading for a resolved identifier (display form expected)
#[must_use]
pub fn success_message(identifier: &str) -> String {
    format!("Part {identifier} is valid and compatible parts found:")
}

/// Report status, one per outcome tag plus infrastructure failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Format validation failed
    Rejected,
    /// Identifier is excluded
    Excluded,
    /// Catalog answered
    Resolved,
    /// A collaborator failed
    Failed,
}

impl ReportStatus {
    /// Process exit code for this status
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Resolved => 0,
            Self::Failed => 1,
            Self::Rejected => 2,
            Self::Excluded => 3,
        }
    }
}

/// Result of a lookup, ready to render
#[derive(Debug, Serialize)]
pub struct LookupReport {
    /// How the lookup ended
    pub status: ReportStatus,
    /// Identifier in display case, when validation passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Primary message for the operator
    pub message: String,
    /// Exclusion description, for excluded identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Compatible parts, in catalog order
    pub parts: Vec<CompatiblePart>,
    /// When the lookup finished (RFC 3339)
    pub checked_at: String,
}

impl LookupReport {
    /// Build a report from an orchestrator result
    #[must_use]
    pub fn from_result(result: &Result<LookupOutcome, LookupError>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(outcome),
            Err(err) => Self::failure(err),
        }
    }

    /// Build a report from an expected outcome
    #[must_use]
    pub fn from_outcome(outcome: &LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Rejected { reason } => Self::new(ReportStatus::Rejected, reason.clone()),
            LookupOutcome::Excluded { identifier, entry } => Self {
                identifier: Some(identifier.clone()),
                description: Some(entry.description.clone()),
                ..Self::new(ReportStatus::Excluded, exclusion_message(identifier))
            },
            LookupOutcome::Resolved { identifier, parts } => {
                let message = if parts.is_empty() {
                    NO_COMPATIBLE_PARTS_MESSAGE.to_string()
                } else {
                    success_message(identifier)
                };
                Self {
                    identifier: Some(identifier.clone()),
                    parts: parts.clone(),
                    ..Self::new(ReportStatus::Resolved, message)
                }
            },
        }
    }

    /// Build a report for an infrastructure failure
    ///
    /// Only the opaque user message is included.
    #[must_use]
    pub fn failure(err: &LookupError) -> Self {
        Self::new(ReportStatus::Failed, err.user_message().to_string())
    }

    fn new(status: ReportStatus, message: String) -> Self {
        Self {
            status,
            identifier: None,
            message,
            description: None,
            parts: Vec::new(),
            checked_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Process exit code for this report
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text of the report
    #[must_use]
    pub fn human(&self) -> String {
        let mut out = String::new();
        let label = match self.status {
            ReportStatus::Rejected => "Rejected".red().bold(),
            ReportStatus::Excluded => "Excluded".yellow().bold(),
            ReportStatus::Resolved => "Resolved".green().bold(),
            ReportStatus::Failed => "Error".red().bold(),
        };
        let _ = writeln!(out, "{label}: {}", self.message);

        if let Some(description) = &self.description {
            let _ = writeln!(out, "  Reason: {description}");
        }

        if self.status == ReportStatus::Resolved && self.parts.is_empty() {
            if let Some(identifier) = &self.identifier {
                let _ = writeln!(out, "  Part {identifier} is valid.");
            }
        }

        for part in &self.parts {
            let _ = writeln!(out, "\n  {}", part.part_number.bold());
            let _ = writeln!(out, "    {}", part.description);
            let _ = writeln!(out, "    Manufacturer: {}", part.manufacturer);
            let _ = writeln!(out, "    Price: ${:.2}", part.price);
        }

        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a format-only check
#[derive(Debug, Serialize)]
pub struct ValidateReport {
    /// Whether the input is a valid part identifier
    pub valid: bool,
    /// Normalized (lower-case) form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// Display (upper-case) form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Rejection reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidateReport {
    /// Build a report from a validation result
    #[must_use]
    pub fn from_result<E: std::fmt::Display>(result: &Result<PartIdentifier, E>) -> Self {
        match result {
            Ok(id) => Self {
                valid: true,
                normalized: Some(id.as_str().to_string()),
                display: Some(id.display_form()),
                reason: None,
            },
            Err(err) => Self {
                valid: false,
                normalized: None,
                display: None,
                reason: Some(err.to_string()),
            },
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match (&self.display, &self.reason) {
                (Some(display), _) => {
                    println!("{}: {display}", "Valid".green().bold());
                    if let Some(normalized) = &self.normalized {
                        println!("  Normalized: {normalized}");
                    }
                },
                (None, Some(reason)) => println!("{}: {reason}", "Rejected".red().bold()),
                (None, None) => {},
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Snapshot of the exclusion registry
#[derive(Debug, Serialize)]
pub struct ExclusionListReport {
    /// Entries in registry order
    pub exclusions: Vec<ExclusionEntry>,
}

impl ExclusionListReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.exclusions.is_empty() {
                    println!("No excluded parts.");
                    return;
                }
                println!("Excluded parts:\n");
                for entry in &self.exclusions {
                    println!("  {}", entry.part_number.to_uppercase().bold());
                    println!("    {}", entry.description);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
