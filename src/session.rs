//! Caller-side lookup session
//!
//! The pipeline does not cancel in-flight registry or catalog calls, so an
//! older lookup can finish after a newer one was started. A session hands out
//! a ticket per request and only keeps the result belonging to the newest
//! ticket. Clearing the session discards what is shown and invalidates every
//! outstanding ticket.
//!
//! # Examples
//!
//! ```
//! use partlookup::session::LookupSession;
//!
//! let mut session = LookupSession::new();
//! let first = session.begin();
//! let second = session.begin();
//!
//! assert!(session.apply(second, "newer"));
//! assert!(!session.apply(first, "older"));
//! assert_eq!(session.current(), Some(&"newer"));
//!
//! session.clear();
//! assert_eq!(session.current(), None);
//! ```

use log::debug;

/// Proof that a lookup was started through a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

impl LookupTicket {
    /// Sequence number of this ticket within its session
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Holds the result of the most recent lookup only
#[derive(Debug)]
pub struct LookupSession<T> {
    latest: u64,
    current: Option<T>,
}

impl<T> Default for LookupSession<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            current: None,
        }
    }
}

impl<T> LookupSession<T> {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale
    pub const fn begin(&mut self) -> LookupTicket {
        self.latest += 1;
        LookupTicket(self.latest)
    }

    /// Record a result if it belongs to the newest request
    ///
    /// Returns `false` (and drops `result`) when the ticket is stale.
    pub fn apply(&mut self, ticket: LookupTicket, result: T) -> bool {
        if ticket.0 != self.latest {
            debug!("Discarding stale lookup result #{} (latest #{})", ticket.0, self.latest);
            return false;
        }
        self.current = Some(result);
        true
    }

    /// Whether `ticket` would still be accepted by [`apply`](Self::apply)
    #[must_use]
    pub const fn is_current(&self, ticket: LookupTicket) -> bool {
        ticket.0 == self.latest
    }

    /// The result currently shown, if any
    #[must_use]
    pub const fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Discard the shown result and invalidate outstanding tickets
    pub fn clear(&mut self) -> Option<T> {
        self.latest += 1;
        self.current.take()
    }
}
