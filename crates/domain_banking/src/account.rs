//! Accounts and the deposit/withdrawal rules
//!
//! An account holds a balance and its own transaction history. Standard and
//! checking accounts share the same fields; a checking account additionally
//! carries [`CheckingLimits`], which add a per-withdrawal cap and a
//! withdrawal count limit.
//!
//! # Invariants
//!
//! - The balance never goes below zero. Requests are validated before the
//!   balance is touched, never clamped afterwards.
//! - A rejected operation leaves balance, history and withdrawal count
//!   unchanged.
//! - Withdrawal checks run in a fixed order: balance sufficiency first, then
//!   amount positivity, then the checking limits. A negative withdrawal is
//!   therefore reported as an invalid amount, never as insufficient balance.

use serde::Serialize;
use tracing::{debug, info, warn};

use core_kernel::{ClientId, Money, TransactionId};
use crate::client::Client;
use crate::error::BankingError;
use crate::history::History;
use crate::policy::{PolicyDecision, PolicyHandle};
use crate::transaction::Transaction;

/// Withdrawal limits of a checking account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckingLimits {
    /// Largest amount allowed in a single withdrawal
    overdraft_limit: Money,
    /// Number of withdrawals allowed
    daily_withdrawal_limit: u32,
    /// Withdrawals made so far; never reset
    withdrawal_count: u32,
}

impl CheckingLimits {
    fn new(overdraft_limit: Money, daily_withdrawal_limit: u32) -> Self {
        Self {
            overdraft_limit,
            daily_withdrawal_limit,
            withdrawal_count: 0,
        }
    }

    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }

    pub fn daily_withdrawal_limit(&self) -> u32 {
        self.daily_withdrawal_limit
    }

    pub fn withdrawal_count(&self) -> u32 {
        self.withdrawal_count
    }

    /// Withdrawals still allowed before the count limit is reached
    pub fn remaining_withdrawals(&self) -> u32 {
        self.daily_withdrawal_limit.saturating_sub(self.withdrawal_count)
    }

    fn check(&self, amount: Money) -> Result<(), BankingError> {
        if amount > self.overdraft_limit {
            return Err(BankingError::ExceedsWithdrawalLimit {
                limit: self.overdraft_limit,
                requested: amount,
            });
        }
        if self.withdrawal_count >= self.daily_withdrawal_limit {
            return Err(BankingError::DailyWithdrawalLimitReached {
                limit: self.daily_withdrawal_limit,
            });
        }
        Ok(())
    }
}

/// Account variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AccountKind {
    /// Plain account with no withdrawal limits
    Standard,
    /// Checking account with per-withdrawal and count limits
    Checking(CheckingLimits),
}

/// A bank account owned by a client
///
/// Accounts are only created through [`Account::open`] or
/// [`Account::open_checking`], which register the account with its owner.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    number: u64,
    branch_code: String,
    owner: ClientId,
    balance: Money,
    history: History,
    kind: AccountKind,
    #[serde(skip)]
    policy: PolicyHandle,
}

impl Account {
    fn new(number: u64, branch_code: String, client: &Client, kind: AccountKind) -> Self {
        Self {
            number,
            branch_code,
            owner: client.id(),
            balance: Money::zero(),
            history: History::new(),
            kind,
            policy: client.policy().clone(),
        }
    }

    /// Opens a standard account and registers it with the client
    ///
    /// # Arguments
    ///
    /// * `number` - Account number
    /// * `branch_code` - Branch the account belongs to
    /// * `client` - Owning client; the account is appended to its accounts
    ///
    /// # Returns
    ///
    /// The registered account, as stored in the client's collection
    pub fn open(number: u64, branch_code: impl Into<String>, client: &mut Client) -> &mut Account {
        let account = Self::new(number, branch_code.into(), client, AccountKind::Standard);
        info!(
            account_number = number,
            branch_code = %account.branch_code,
            client_id = %account.owner,
            "Opened standard account"
        );
        client.add_account(account)
    }

    /// Opens a checking account and registers it with the client
    ///
    /// # Arguments
    ///
    /// * `number` - Account number
    /// * `branch_code` - Branch the account belongs to
    /// * `client` - Owning client
    /// * `overdraft_limit` - Largest amount allowed per withdrawal
    /// * `daily_withdrawal_limit` - Number of withdrawals allowed
    pub fn open_checking(
        number: u64,
        branch_code: impl Into<String>,
        client: &mut Client,
        overdraft_limit: Money,
        daily_withdrawal_limit: u32,
    ) -> &mut Account {
        let kind = AccountKind::Checking(CheckingLimits::new(overdraft_limit, daily_withdrawal_limit));
        let account = Self::new(number, branch_code.into(), client, kind);
        info!(
            account_number = number,
            branch_code = %account.branch_code,
            client_id = %account.owner,
            %overdraft_limit,
            daily_withdrawal_limit,
            "Opened checking account"
        );
        client.add_account(account)
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    /// Identifier of the owning client
    pub fn owner(&self) -> ClientId {
        self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.kind, AccountKind::Checking(_))
    }

    /// Limits of a checking account, `None` for a standard account
    pub fn checking_limits(&self) -> Option<&CheckingLimits> {
        match &self.kind {
            AccountKind::Checking(limits) => Some(limits),
            AccountKind::Standard => None,
        }
    }

    pub(crate) fn set_policy(&mut self, policy: PolicyHandle) {
        self.policy = policy;
    }

    /// Deposits funds
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `TransactionDenied` if the owner's policy refuses the deposit
    pub fn deposit(&mut self, amount: Money) -> Result<TransactionId, BankingError> {
        if !amount.is_positive() {
            return Err(self.rejected("deposit", amount, BankingError::InvalidAmount(amount)));
        }

        let new_balance = self.balance.checked_add(&amount)?;
        let id = self.execute_transaction(Transaction::deposit(amount), new_balance)?;

        debug!(
            account_number = self.number,
            %amount,
            balance = %self.balance,
            transaction_id = %id,
            "Deposit recorded"
        );
        Ok(id)
    }

    /// Withdraws funds
    ///
    /// Checks run in this order and the first failure is returned:
    /// insufficient balance, invalid amount, then for checking accounts the
    /// per-withdrawal limit and the withdrawal count limit.
    ///
    /// # Errors
    ///
    /// - `InsufficientBalance` if the balance is below `amount`
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `ExceedsWithdrawalLimit` if `amount` is above a checking account's limit
    /// - `DailyWithdrawalLimitReached` if a checking account has no withdrawals left
    /// - `TransactionDenied` if the owner's policy refuses the withdrawal
    pub fn withdraw(&mut self, amount: Money) -> Result<TransactionId, BankingError> {
        self.validate_withdrawal(amount)
            .map_err(|error| self.rejected("withdraw", amount, error))?;

        let new_balance = self.balance.checked_sub(&amount)?;
        let id = self.execute_transaction(Transaction::withdrawal(amount), new_balance)?;

        if let AccountKind::Checking(limits) = &mut self.kind {
            limits.withdrawal_count += 1;
        }

        debug!(
            account_number = self.number,
            %amount,
            balance = %self.balance,
            transaction_id = %id,
            "Withdrawal recorded"
        );
        Ok(id)
    }

    fn validate_withdrawal(&self, amount: Money) -> Result<(), BankingError> {
        // Balance first: a negative amount never trips this check.
        if self.balance < amount {
            return Err(BankingError::InsufficientBalance {
                balance: self.balance,
                requested: amount,
            });
        }
        if !amount.is_positive() {
            return Err(BankingError::InvalidAmount(amount));
        }
        match &self.kind {
            AccountKind::Checking(limits) => limits.check(amount),
            AccountKind::Standard => Ok(()),
        }
    }

    /// Runs the owner's policy, then applies the new balance and records the
    /// transaction. Nothing is changed if the policy denies.
    fn execute_transaction(
        &mut self,
        transaction: Transaction,
        new_balance: Money,
    ) -> Result<TransactionId, BankingError> {
        if let PolicyDecision::Deny(reason) = self.policy.authorize(self, &transaction) {
            let error = BankingError::TransactionDenied(reason);
            return Err(self.rejected(&transaction.kind().to_string(), transaction.amount(), error));
        }

        self.balance = new_balance;
        Ok(transaction.record(&mut self.history))
    }

    fn rejected(&self, operation: &str, amount: Money, error: BankingError) -> BankingError {
        warn!(
            account_number = self.number,
            operation,
            %amount,
            balance = %self.balance,
            reason = error.reason(),
            "Operation rejected"
        );
        error
    }
}
