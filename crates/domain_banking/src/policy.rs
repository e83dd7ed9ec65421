//! Transaction authorization seam
//!
//! A client decides whether transactions on its accounts may be recorded.
//! The decision is made by a [`TransactionPolicy`] that the client hands to
//! every account it opens. The policy runs after an operation's own
//! validation and before any state changes, so a denial leaves the account
//! exactly as it was.

use std::fmt;
use std::sync::Arc;

use crate::account::Account;
use crate::transaction::Transaction;

/// Outcome of a policy check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// The transaction may be recorded
    Allow,
    /// The transaction is refused, with a reason for the caller
    Deny(String),
}

impl PolicyDecision {
    pub fn deny(reason: impl Into<String>) -> Self {
        PolicyDecision::Deny(reason.into())
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, PolicyDecision::Allow)
    }
}

/// Decides whether a transaction may be applied to an account
///
/// Implemented for any `Fn(&Account, &Transaction) -> PolicyDecision`, so a
/// closure can be injected directly.
pub trait TransactionPolicy: Send + Sync {
    fn authorize(&self, account: &Account, transaction: &Transaction) -> PolicyDecision;
}

impl<F> TransactionPolicy for F
where
    F: Fn(&Account, &Transaction) -> PolicyDecision + Send + Sync,
{
    fn authorize(&self, account: &Account, transaction: &Transaction) -> PolicyDecision {
        self(account, transaction)
    }
}

/// Policy that authorizes every transaction
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl TransactionPolicy for AllowAll {
    fn authorize(&self, _account: &Account, _transaction: &Transaction) -> PolicyDecision {
        PolicyDecision::Allow
    }
}

/// Shared handle to a client's policy
///
/// Accounts hold a clone of their owner's handle, which keeps the Account
/// free of any reference back to the Client itself.
#[derive(Clone)]
pub struct PolicyHandle(Arc<dyn TransactionPolicy>);

impl PolicyHandle {
    pub fn new(policy: impl TransactionPolicy + 'static) -> Self {
        Self(Arc::new(policy))
    }

    pub fn authorize(&self, account: &Account, transaction: &Transaction) -> PolicyDecision {
        self.0.authorize(account, transaction)
    }
}

impl Default for PolicyHandle {
    fn default() -> Self {
        Self::new(AllowAll)
    }
}

impl fmt::Debug for PolicyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PolicyHandle")
    }
}
