//! JSON file adapters
//!
//! Both files are re-read on every call, so each lookup sees a fresh
//! snapshot and edits take effect without a restart.

mod catalog;
mod registry;

pub use catalog::JsonFileCatalog;
pub use registry::JsonFileRegistry;
