//! Adapter implementations for port traits
//!
//! This module contains concrete registry and catalog sources:
//!
//! - `json/` - JSON files on disk, re-read per call
//! - `memory` - Fixed in-memory data

pub mod json;
pub mod memory;

pub use json::{JsonFileCatalog, JsonFileRegistry};
pub use memory::{InMemoryCatalog, InMemoryRegistry};
