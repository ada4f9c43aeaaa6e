//! Test Utilities Crate
//!
//! Shared test infrastructure for the claims intelligence test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators
//! - `memory`: In-memory `RecordsPort` adapter for service tests

pub mod fixtures;
pub mod builders;
pub mod generators;
pub mod memory;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
pub use memory::*;
