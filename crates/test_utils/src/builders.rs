//! Test Data Builders
//!
//! Builders for accounts in a known state. Accounts can only exist inside a
//! client, so the builders either create a fresh client or open the account
//! in one supplied by the test.

use core_kernel::Money;
use domain_banking::{Account, Client, IndividualDetails, PolicyDecision, Transaction};

use crate::fixtures::{ClientFixtures, MoneyFixtures, StringFixtures};

/// Builder for a funded standard or checking account
pub struct TestAccountBuilder {
    number: u64,
    branch_code: String,
    opening_balance: Money,
    checking: Option<(Money, u32)>,
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAccountBuilder {
    /// Creates a builder for an empty standard account numbered 1
    pub fn new() -> Self {
        Self {
            number: 1,
            branch_code: StringFixtures::branch_code().to_string(),
            opening_balance: Money::zero(),
            checking: None,
        }
    }

    /// Sets the account number
    pub fn with_number(mut self, number: u64) -> Self {
        self.number = number;
        self
    }

    /// Sets the branch code
    pub fn with_branch_code(mut self, code: impl Into<String>) -> Self {
        self.branch_code = code.into();
        self
    }

    /// Funds the account with one deposit after opening
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.opening_balance = balance;
        self
    }

    /// Makes it a checking account with the given limits
    pub fn checking(mut self, overdraft_limit: Money, daily_withdrawal_limit: u32) -> Self {
        self.checking = Some((overdraft_limit, daily_withdrawal_limit));
        self
    }

    /// Makes it a checking account with the standard 500 / 3 limits
    pub fn standard_checking(self) -> Self {
        self.checking(MoneyFixtures::overdraft_limit(), ClientFixtures::DAILY_WITHDRAWAL_LIMIT)
    }

    /// Opens the account in `client` and returns it
    pub fn build_in(self, client: &mut Client) -> &mut Account {
        let account = match self.checking {
            Some((limit, count)) => {
                Account::open_checking(self.number, self.branch_code, client, limit, count)
            }
            None => Account::open(self.number, self.branch_code, client),
        };
        if self.opening_balance.is_positive() {
            account
                .deposit(self.opening_balance)
                .expect("opening deposit must succeed");
        }
        account
    }

    /// Opens the account in a new general client and returns the client
    pub fn build(self) -> Client {
        let mut client = ClientFixtures::general_client();
        self.build_in(&mut client);
        client
    }
}

/// Builder for individual clients
pub struct TestIndividualClientBuilder {
    address: String,
    details: IndividualDetails,
}

impl Default for TestIndividualClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestIndividualClientBuilder {
    pub fn new() -> Self {
        Self {
            address: StringFixtures::address().to_string(),
            details: ClientFixtures::individual_details(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.details.full_name = name.into();
        self
    }

    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.details.tax_id = tax_id.into();
        self
    }

    /// Returns the identity data without building a client
    pub fn details(&self) -> IndividualDetails {
        self.details.clone()
    }

    pub fn build(self) -> Client {
        Client::individual(self.address, self.details).expect("valid individual client")
    }
}

/// Policy that denies every transaction with the given reason
pub fn deny_all(reason: &'static str) -> impl Fn(&Account, &Transaction) -> PolicyDecision + Send + Sync {
    move |_account: &Account, _transaction: &Transaction| PolicyDecision::deny(reason)
}

/// Policy that denies transactions above `max`
pub fn deny_above(max: Money) -> impl Fn(&Account, &Transaction) -> PolicyDecision + Send + Sync {
    move |_account: &Account, transaction: &Transaction| {
        if transaction.amount() > max {
            PolicyDecision::deny(format!("amount above {}", max))
        } else {
            PolicyDecision::Allow
        }
    }
}
