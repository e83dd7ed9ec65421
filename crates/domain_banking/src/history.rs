//! Per-account transaction history
//!
//! The history is an append-only log. Insertion order is chronological
//! order and entries are never reordered or removed.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;
use crate::error::BankingError;
use crate::transaction::{Transaction, TransactionKind};

const REPORT_HEADER: &str = " *** Histórico de Transações ***";

/// Ordered, append-only log of transactions for one account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Transaction>,
}

impl History {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a transaction to the end of the log
    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// Returns all entries in chronological order
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the most recent entry
    pub fn last(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    /// Returns entries of one kind, in chronological order
    pub fn entries_of_kind(&self, kind: TransactionKind) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().filter(move |t| t.kind() == kind)
    }

    /// Sums the amounts of all entries of one kind
    ///
    /// # Errors
    ///
    /// `Core` with `MoneyError::Overflow` if the total exceeds the decimal range
    pub fn total_of_kind(&self, kind: TransactionKind) -> Result<Money, BankingError> {
        let amounts: Vec<Money> = self.entries_of_kind(kind).map(Transaction::amount).collect();
        Ok(Money::checked_sum(&amounts)?)
    }

    /// Renders the console report
    ///
    /// Layout: a blank line, the header, a blank line, one
    /// `"<Label> --> Valor: <amount>"` line per entry, then a trailing blank line.
    pub fn render_report(&self) -> String {
        let mut report = format!("\n{}\n\n", REPORT_HEADER);
        for transaction in &self.entries {
            report.push_str(&format!(
                "{} --> Valor: {}\n",
                transaction.kind().report_label(),
                transaction.amount()
            ));
        }
        report.push('\n');
        report
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_report())
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
