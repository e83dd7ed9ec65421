//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! banking test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for clients and amounts
//! - `builders`: Builders for accounts in a known state, and test policies
//! - `assertions`: Account assertion helpers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
