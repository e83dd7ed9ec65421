//! Banking Domain - Accounts, Withdrawal Limits and Transaction History
//!
//! This crate models a small retail-banking core held entirely in memory:
//! clients own accounts, accounts accept deposits and withdrawals, and every
//! accepted operation is appended to the account's history.
//!
//! # Account Types
//!
//! - **Standard**: any positive amount up to the balance may be withdrawn
//! - **Checking**: additionally capped per withdrawal and by a withdrawal count
//!
//! # Example
//!
//! ```rust
//! use domain_banking::{Account, BankingError, Client};
//! use core_kernel::Money;
//! use rust_decimal_macros::dec;
//!
//! let mut client = Client::new("Rua das Flores, 123");
//! let account = Account::open_checking(1, "0001", &mut client, Money::new(dec!(500)), 3);
//!
//! account.deposit(Money::new(dec!(1000))).unwrap();
//! account.withdraw(Money::new(dec!(100))).unwrap();
//!
//! let refused = account.withdraw(Money::new(dec!(600)));
//! assert!(matches!(refused, Err(BankingError::ExceedsWithdrawalLimit { .. })));
//! assert_eq!(account.balance(), Money::new(dec!(900)));
//! ```

pub mod transaction;
pub mod history;
pub mod account;
pub mod client;
pub mod policy;
pub mod error;

pub use transaction::{Transaction, TransactionKind};
pub use history::History;
pub use account::{Account, AccountKind, CheckingLimits};
pub use client::{Client, ClientProfile, IndividualDetails};
pub use policy::{AllowAll, PolicyDecision, PolicyHandle, TransactionPolicy};
pub use error::BankingError;
