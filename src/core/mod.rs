//! Core domain logic for partlookup
//!
//! Validation and matching are pure. The only I/O happens behind the port
//! traits, which the orchestrator calls in sequence.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`PartIdentifier`, `ExclusionEntry`, `CompatiblePart`, `LookupOutcome`)
//! - `services/` - Validation, exclusion checking, resolution and orchestration
//! - `ports/` - Trait definitions for the registry and catalog sources

pub mod models;
pub mod ports;
pub mod services;
