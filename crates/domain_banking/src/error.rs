//! Banking domain errors
//!
//! Every rejected deposit or withdrawal surfaces as one of these variants.
//! A rejected operation never leaves a partial effect behind.

use core_kernel::{CoreError, Money, MoneyError};
use thiserror::Error;

/// Errors that can occur in the banking domain
#[derive(Debug, Error)]
pub enum BankingError {
    /// Balance does not cover the requested withdrawal
    #[error("Insufficient balance: balance={balance}, requested={requested}")]
    InsufficientBalance {
        balance: Money,
        requested: Money,
    },

    /// Amount is zero or negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Single withdrawal above the checking account's per-withdrawal limit
    #[error("Withdrawal exceeds per-withdrawal limit: limit={limit}, requested={requested}")]
    ExceedsWithdrawalLimit {
        limit: Money,
        requested: Money,
    },

    /// Checking account has used up its withdrawal count
    #[error("Daily withdrawal limit reached: limit={limit}")]
    DailyWithdrawalLimitReached {
        limit: u32,
    },

    /// The owning client's transaction policy refused the transaction
    #[error("Transaction denied: {0}")]
    TransactionDenied(String),

    /// No account with this number is registered for the client
    #[error("Account not found: {0}")]
    AccountNotFound(u64),

    /// Client identity data failed validation
    #[error("Invalid client data: {0}")]
    InvalidClientData(String),

    /// Kernel error (arithmetic overflow and similar)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BankingError {
    /// Returns true for the four user-input validation failures
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            BankingError::InsufficientBalance { .. }
                | BankingError::InvalidAmount(_)
                | BankingError::ExceedsWithdrawalLimit { .. }
                | BankingError::DailyWithdrawalLimitReached { .. }
        )
    }

    /// Short diagnostic used in log lines
    pub fn reason(&self) -> &'static str {
        match self {
            BankingError::InsufficientBalance { .. } => "insufficient balance",
            BankingError::InvalidAmount(_) => "invalid amount",
            BankingError::ExceedsWithdrawalLimit { .. } => "exceeds per-withdrawal limit",
            BankingError::DailyWithdrawalLimitReached { .. } => "daily withdrawal limit reached",
            BankingError::TransactionDenied(_) => "transaction denied",
            BankingError::AccountNotFound(_) => "account not found",
            BankingError::InvalidClientData(_) => "invalid client data",
            BankingError::Core(_) => "calculation error",
        }
    }
}

impl From<MoneyError> for BankingError {
    fn from(error: MoneyError) -> Self {
        BankingError::Core(CoreError::Money(error))
    }
}
