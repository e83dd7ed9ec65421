//! Transaction value types
//!
//! A transaction records one monetary movement on an account. Once created
//! it is never modified; the account's history takes ownership of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, TransactionId};
use crate::history::History;

/// Kind of monetary movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Funds added to the account
    Deposit,
    /// Funds taken out of the account
    Withdrawal,
}

impl TransactionKind {
    /// Label printed in the history report
    pub fn report_label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposito",
            TransactionKind::Withdrawal => "Saque",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// An immutable record of a deposit or withdrawal
///
/// Positivity of `amount` is checked by the account before the
/// transaction is built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    amount: Money,
    recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction of the given kind
    ///
    /// # Arguments
    ///
    /// * `kind` - Deposit or withdrawal
    /// * `amount` - Amount moved
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        Self {
            id: TransactionId::new_v7(),
            kind,
            amount,
            recorded_at: Utc::now(),
        }
    }

    /// Creates a deposit transaction
    pub fn deposit(amount: Money) -> Self {
        Self::new(TransactionKind::Deposit, amount)
    }

    /// Creates a withdrawal transaction
    pub fn withdrawal(amount: Money) -> Self {
        Self::new(TransactionKind::Withdrawal, amount)
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Appends this transaction to a history, returning its id
    pub fn record(self, history: &mut History) -> TransactionId {
        let id = self.id;
        history.append(self);
        id
    }
}
