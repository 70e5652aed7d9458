//! Lookup orchestration
//!
//! Drives validation, exclusion checking and compatibility resolution in
//! strict order and maps the result onto a [`LookupOutcome`].
//!
//! ```text
//! raw input -> validate -> load registry + match -> resolve -> outcome
//!                 |                  |                  |
//!              Rejected           Excluded          Resolved
//! ```
//!
//! Any terminal state short-circuits everything after it. In particular an
//! excluded identifier is never handed to the catalog.
//!
//! Registry and catalog failures are [`LookupError`]s, not outcomes. Their
//! [`Display`](std::fmt::Display) and source chain carry the diagnostic detail;
//! [`LookupError::user_message`] is the only text meant for end users.
//!
//! Concurrent lookups share nothing mutable. If a caller fires a new lookup
//! before an older one finishes, discarding the stale result is the caller's
//! job (see [`crate::session::LookupSession`]); in-flight collaborator calls
//! are not cancelled.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use thiserror::Error;

use super::exclusion::ExclusionChecker;
use super::resolver::CompatibilityResolver;
use super::validator;
use crate::core::models::{LookupOutcome, LookupStage};
use crate::core::ports::{
    CompatibilityCatalog, ExclusionRegistry, RegistryLoadError, ResolutionError,
};

/// Shown to end users for any infrastructure failure
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Infrastructure failure during a lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The exclusion registry could not be loaded
    #[error("lookup failed while checking exclusions")]
    Registry(#[from] RegistryLoadError),

    /// The compatibility catalog could not answer
    #[error("lookup failed while resolving compatible parts")]
    Resolution(#[from] ResolutionError),
}

impl LookupError {
    /// The stage the pipeline was in when it failed
    #[must_use]
    pub const fn stage(&self) -> LookupStage {
        match self {
            Self::Registry(_) => LookupStage::CheckingExclusion,
            Self::Resolution(_) => LookupStage::Resolving,
        }
    }

    /// Opaque message safe to show to an operator
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }

    /// Full cause chain, for logs and diagnostics
    #[must_use]
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}

/// A finished lookup together with the stages it passed through
#[derive(Debug)]
pub struct TracedLookup {
    /// Every stage entered, starting at [`LookupStage::Idle`]
    pub stages: Vec<LookupStage>,
    /// How the lookup ended
    pub result: Result<LookupOutcome, LookupError>,
}

/// Records stage transitions for one lookup
struct StageTracker {
    stages: Vec<LookupStage>,
}

impl StageTracker {
    fn new() -> Self {
        Self {
            stages: vec![LookupStage::Idle],
        }
    }

    fn current(&self) -> LookupStage {
        self.stages.last().copied().unwrap_or_default()
    }

    fn advance(&mut self, next: LookupStage) {
        let current = self.current();
        debug_assert!(current.can_transition_to(next), "illegal transition {current} -> {next}");
        debug!("lookup stage {current} -> {next}");
        self.stages.push(next);
    }

    fn finish(self, result: Result<LookupOutcome, LookupError>) -> TracedLookup {
        TracedLookup {
            stages: self.stages,
            result,
        }
    }
}

/// Runs the lookup pipeline against a registry and a catalog
#[derive(Debug, Clone)]
pub struct LookupOrchestrator {
    checker: ExclusionChecker,
    resolver: CompatibilityResolver,
}

impl LookupOrchestrator {
    /// Create an orchestrator over the two collaborators
    pub fn new(
        registry: Arc<dyn ExclusionRegistry>,
        catalog: Arc<dyn CompatibilityCatalog>,
    ) -> Self {
        Self::from_parts(ExclusionChecker::new(registry), CompatibilityResolver::new(catalog))
    }

    /// Create an orchestrator from preconfigured components
    #[must_use]
    pub const fn from_parts(checker: ExclusionChecker, resolver: CompatibilityResolver) -> Self {
        Self { checker, resolver }
    }

    /// Apply the same call timeout to both collaborators
    #[must_use]
    pub fn with_timeout(self, timeout: Option<Duration>) -> Self {
        Self {
            checker: self.checker.with_timeout(timeout),
            resolver: self.resolver.with_timeout(timeout),
        }
    }

    /// Look up raw operator input
    ///
    /// `Ok` covers every expected outcome, including rejection and exclusion.
    /// `Err` means a collaborator failed.
    pub async fn lookup(&self, raw: &str) -> Result<LookupOutcome, LookupError> {
        self.lookup_traced(raw).await.result
    }

    /// Like [`lookup`](Self::lookup), also reporting the stages visited
    pub async fn lookup_traced(&self, raw: &str) -> TracedLookup {
        let mut tracker = StageTracker::new();

        tracker.advance(LookupStage::Validating);
        let identifier = match validator::validate(raw) {
            Ok(identifier) => identifier,
            Err(err) => {
                info!("Rejected input: {err}");
                tracker.advance(LookupStage::Rejected);
                let outcome = LookupOutcome::Rejected {
                    reason: err.to_string(),
                };
                return tracker.finish(Ok(outcome));
            },
        };

        tracker.advance(LookupStage::CheckingExclusion);
        let exclusion = match self.checker.check(&identifier).await {
            Ok(exclusion) => exclusion,
            Err(err) => return tracker.finish(Err(Self::fail(err.into()))),
        };

        if let Some(entry) = exclusion {
            info!("{} is excluded: {}", identifier.display_form(), entry.description);
            tracker.advance(LookupStage::Excluded);
            let outcome = LookupOutcome::Excluded {
                identifier: identifier.display_form(),
                entry,
            };
            return tracker.finish(Ok(outcome));
        }

        tracker.advance(LookupStage::Resolving);
        let parts = match self.resolver.resolve(&identifier).await {
            Ok(parts) => parts,
            Err(err) => return tracker.finish(Err(Self::fail(err.into()))),
        };

        info!("Resolved {} to {} compatible part(s)", identifier.display_form(), parts.len());
        tracker.advance(LookupStage::Resolved);
        tracker.finish(Ok(LookupOutcome::Resolved {
            identifier: identifier.display_form(),
            parts,
        }))
    }

    fn fail(err: LookupError) -> LookupError {
        error!("Lookup failed during {}: {}", err.stage(), err.detail());
        err
    }
}
