//! Custom Test Assertions
//!
//! Assertion helpers for accounts that give more meaningful failure
//! messages than plain `assert_eq!`.

use core_kernel::Money;
use domain_banking::{Account, TransactionKind};
use rust_decimal::Decimal;

/// The observable state of an account at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub balance: Money,
    pub history_len: usize,
    pub withdrawal_count: Option<u32>,
}

impl AccountSnapshot {
    pub fn capture(account: &Account) -> Self {
        Self {
            balance: account.balance(),
            history_len: account.history().len(),
            withdrawal_count: account.checking_limits().map(|l| l.withdrawal_count()),
        }
    }
}

/// Asserts that an account is in exactly the captured state
///
/// # Panics
///
/// Panics if balance, history length or withdrawal count changed
pub fn assert_account_unchanged(before: &AccountSnapshot, account: &Account) {
    let after = AccountSnapshot::capture(account);
    assert_eq!(
        before, &after,
        "Account {} changed after a rejected operation: before={:?}, after={:?}",
        account.number(),
        before,
        after
    );
}

/// Asserts the account balance
pub fn assert_balance(account: &Account, expected: Decimal) {
    assert_eq!(
        account.balance().amount(),
        expected,
        "Unexpected balance on account {}: actual={}, expected={}",
        account.number(),
        account.balance(),
        expected
    );
}

/// Asserts the history amounts in order
pub fn assert_history_amounts(account: &Account, expected: &[Decimal]) {
    let actual: Vec<Decimal> = account.history().iter().map(|t| t.amount().amount()).collect();
    assert_eq!(
        actual, expected,
        "Unexpected history on account {}",
        account.number()
    );
}

/// Asserts the history kinds in order
pub fn assert_history_kinds(account: &Account, expected: &[TransactionKind]) {
    let actual: Vec<TransactionKind> = account.history().iter().map(|t| t.kind()).collect();
    assert_eq!(
        actual, expected,
        "Unexpected history kinds on account {}",
        account.number()
    );
}

/// Asserts that the balance is not negative
pub fn assert_balance_non_negative(account: &Account) {
    assert!(
        !account.balance().is_negative(),
        "Balance went negative on account {}: {}",
        account.number(),
        account.balance()
    );
}
