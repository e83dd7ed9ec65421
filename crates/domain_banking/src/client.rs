//! Clients and their account collections
//!
//! A client owns its accounts and decides, through its transaction policy,
//! whether transactions on those accounts are recorded. Individual clients
//! carry identity data that plays no part in the account rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use core_kernel::{ClientId, Money, TransactionId};
use crate::account::Account;
use crate::error::BankingError;
use crate::policy::{PolicyHandle, TransactionPolicy};

/// Identity data of a natural person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IndividualDetails {
    /// Tax identification number
    #[validate(length(min = 1, message = "tax id must not be empty"))]
    pub tax_id: String,
    /// Full legal name
    #[validate(length(min = 1, message = "full name must not be empty"))]
    pub full_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
}

/// Kind of client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientProfile {
    /// Client with no identity data beyond an address
    General,
    /// Natural person
    Individual(IndividualDetails),
}

/// A bank client and the accounts it owns
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    id: ClientId,
    address: String,
    profile: ClientProfile,
    accounts: Vec<Account>,
    #[serde(skip)]
    policy: PolicyHandle,
}

impl Client {
    /// Creates a general client
    ///
    /// # Arguments
    ///
    /// * `address` - Postal address, stored as given
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            id: ClientId::new_v7(),
            address: address.into(),
            profile: ClientProfile::General,
            accounts: Vec::new(),
            policy: PolicyHandle::default(),
        }
    }

    /// Creates an individual client
    ///
    /// # Errors
    ///
    /// Returns `InvalidClientData` if the name or tax id is empty
    pub fn individual(address: impl Into<String>, details: IndividualDetails) -> Result<Self, BankingError> {
        details
            .validate()
            .map_err(|e| BankingError::InvalidClientData(e.to_string()))?;

        let mut client = Self::new(address);
        client.profile = ClientProfile::Individual(details);
        Ok(client)
    }

    /// Sets the transaction policy
    pub fn with_policy(mut self, policy: impl TransactionPolicy + 'static) -> Self {
        self.set_policy(policy);
        self
    }

    /// Replaces the transaction policy, including on accounts already opened
    pub fn set_policy(&mut self, policy: impl TransactionPolicy + 'static) {
        self.policy = PolicyHandle::new(policy);
        for account in &mut self.accounts {
            account.set_policy(self.policy.clone());
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    /// Identity data, `None` for a general client
    pub fn individual_details(&self) -> Option<&IndividualDetails> {
        match &self.profile {
            ClientProfile::Individual(details) => Some(details),
            ClientProfile::General => None,
        }
    }

    pub(crate) fn policy(&self) -> &PolicyHandle {
        &self.policy
    }

    /// Appends an account to the collection
    ///
    /// No uniqueness check is made; two accounts with the same number can be
    /// registered. Lookups by number return the first one.
    pub fn add_account(&mut self, account: Account) -> &mut Account {
        debug!(client_id = %self.id, account_number = account.number(), "Account registered");
        let index = self.accounts.len();
        self.accounts.push(account);
        &mut self.accounts[index]
    }

    /// Accounts in registration order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn account_mut(&mut self, number: u64) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    /// Deposits into one of the client's accounts
    ///
    /// # Errors
    ///
    /// `AccountNotFound` if no account has this number, otherwise whatever
    /// [`Account::deposit`] returns
    pub fn deposit(&mut self, number: u64, amount: Money) -> Result<TransactionId, BankingError> {
        self.account_mut(number)
            .ok_or(BankingError::AccountNotFound(number))?
            .deposit(amount)
    }

    /// Withdraws from one of the client's accounts
    ///
    /// # Errors
    ///
    /// `AccountNotFound` if no account has this number, otherwise whatever
    /// [`Account::withdraw`] returns
    pub fn withdraw(&mut self, number: u64, amount: Money) -> Result<TransactionId, BankingError> {
        self.account_mut(number)
            .ok_or(BankingError::AccountNotFound(number))?
            .withdraw(amount)
    }

    /// Sum of all account balances
    ///
    /// # Errors
    ///
    /// `Core` with `MoneyError::Overflow` if the total exceeds the decimal range
    pub fn total_balance(&self) -> Result<Money, BankingError> {
        let balances: Vec<Money> = self.accounts.iter().map(Account::balance).collect();
        Ok(Money::checked_sum(&balances)?)
    }
}
