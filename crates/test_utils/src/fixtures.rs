//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for clients, accounts and amounts.
//! These fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_banking::{Client, IndividualDetails};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A round amount used for single deposits and withdrawals
    pub fn amount_100() -> Money {
        Money::new(dec!(100.00))
    }

    /// Opening balance used by limit scenarios
    pub fn balance_1000() -> Money {
        Money::new(dec!(1000.00))
    }

    /// Standard per-withdrawal limit for checking accounts
    pub fn overdraft_limit() -> Money {
        Money::new(dec!(500.00))
    }

    /// An amount above the standard per-withdrawal limit
    pub fn above_limit() -> Money {
        Money::new(dec!(600.00))
    }

    /// A negative amount for invalid-amount scenarios
    pub fn negative() -> Money {
        Money::new(dec!(-5.00))
    }

    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for string values
pub struct StringFixtures;

impl StringFixtures {
    pub fn branch_code() -> &'static str {
        "0001"
    }

    pub fn address() -> &'static str {
        "Rua das Flores, 123 - Sao Paulo/SP"
    }
}

/// Fixture for clients
pub struct ClientFixtures;

impl ClientFixtures {
    /// Standard daily withdrawal count for checking accounts
    pub const DAILY_WITHDRAWAL_LIMIT: u32 = 3;

    /// Identity data of a valid individual
    pub fn individual_details() -> IndividualDetails {
        IndividualDetails {
            tax_id: "123.456.789-09".to_string(),
            full_name: "Ana Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1988, 7, 21).unwrap(),
        }
    }

    /// A general client with no accounts
    pub fn general_client() -> Client {
        Client::new(StringFixtures::address())
    }

    /// An individual client with no accounts
    pub fn individual_client() -> Client {
        Client::individual(StringFixtures::address(), Self::individual_details()).unwrap()
    }
}
