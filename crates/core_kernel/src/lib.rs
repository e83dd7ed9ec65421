//! Core Kernel - Foundational types for the banking system
//!
//! This crate provides the building blocks shared by the domain and
//! interface crates:
//! - Money with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - The kernel error type

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError};
pub use identifiers::{ClientId, TransactionId};
pub use error::CoreError;
