//! Money type with precise decimal arithmetic
//!
//! Balances and transaction amounts are held as `rust_decimal::Decimal`
//! so deposits and withdrawals never accumulate floating-point error.
//! The banking core is single-currency, so `Money` carries no currency code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Number of decimal places kept internally
const INTERNAL_SCALE: u32 = 4;

/// Number of decimal places of the minor unit (cents)
const MINOR_UNIT_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount
///
/// Amounts are rounded to 4 decimal places on construction. Ordering is
/// numeric, so balances can be compared directly against requested amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(INTERNAL_SCALE),
        }
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, MINOR_UNIT_PLACES))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
        }
    }

    /// Rounds to cents
    pub fn round_to_cents(&self) -> Self {
        Self {
            amount: self.amount.round_dp(MINOR_UNIT_PLACES),
        }
    }

    /// Checked addition that reports overflow instead of panicking
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that reports overflow instead of panicking
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_sub(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Adds up a sequence of amounts, stopping at the first overflow
    pub fn checked_sum<'a, I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount.normalize())
    }
}

// The operator impls panic on overflow like `Decimal`'s. Balance
// arithmetic goes through the `checked_*` methods.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount - other.amount)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}
