//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Test data builders and on-disk data directories
//! - `mocks.rs` - Port implementations with scripted behavior

pub mod mocks;
