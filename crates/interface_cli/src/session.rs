//! Scripted console sessions
//!
//! A session drives one client's accounts from a list of text commands, one
//! per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! open 1
//! open-checking 2 500 3
//! deposit 1 100
//! withdraw 1 30.50
//! history 1
//! ```
//!
//! `open-checking` takes optional limit and count arguments; the configured
//! defaults are used when they are left out.

use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::{info, warn};

use core_kernel::{Money, TransactionId};
use domain_banking::{Account, AccountKind, BankingError, Client};

use crate::config::CliConfig;
use crate::error::CliError;

/// A single session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenAccount {
        number: u64,
    },
    OpenChecking {
        number: u64,
        overdraft_limit: Option<Decimal>,
        daily_withdrawal_limit: Option<u32>,
    },
    Deposit {
        number: u64,
        amount: Decimal,
    },
    Withdraw {
        number: u64,
        amount: Decimal,
    },
    History {
        number: u64,
    },
}

impl Command {
    /// Parses one script line
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str, line_no: usize) -> Result<Option<Self>, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let command = match (verb, args.as_slice()) {
            ("open", [number]) => Command::OpenAccount {
                number: parse_arg(number, "account number", line_no)?,
            },
            ("open-checking", [number, rest @ ..]) if rest.len() <= 2 => Command::OpenChecking {
                number: parse_arg(number, "account number", line_no)?,
                overdraft_limit: rest
                    .first()
                    .map(|v| parse_arg(v, "overdraft limit", line_no))
                    .transpose()?,
                daily_withdrawal_limit: rest
                    .get(1)
                    .map(|v| parse_arg(v, "daily withdrawal limit", line_no))
                    .transpose()?,
            },
            ("deposit", [number, amount]) => Command::Deposit {
                number: parse_arg(number, "account number", line_no)?,
                amount: parse_arg(amount, "amount", line_no)?,
            },
            ("withdraw", [number, amount]) => Command::Withdraw {
                number: parse_arg(number, "account number", line_no)?,
                amount: parse_arg(amount, "amount", line_no)?,
            },
            ("history", [number]) => Command::History {
                number: parse_arg(number, "account number", line_no)?,
            },
            _ => return Err(CliError::invalid_command(line_no, format!("unrecognized command '{}'", line))),
        };

        Ok(Some(command))
    }
}

fn parse_arg<T: FromStr>(value: &str, what: &str, line_no: usize) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::invalid_command(line_no, format!("invalid {}: '{}'", what, value)))
}

/// Parses a whole script, numbering lines from 1
pub fn parse_script(script: &str) -> Result<Vec<Command>, CliError> {
    let mut commands = Vec::new();
    for (index, line) in script.lines().enumerate() {
        if let Some(command) = Command::parse(line, index + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Reads the script at `path`, or returns the demo script when no path is set
///
/// # Errors
///
/// `Io` if the file cannot be read
pub fn load_script(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            info!(path, "Loading command script");
            Ok(std::fs::read_to_string(path)?)
        }
        None => Ok(demo_script().to_string()),
    }
}

/// Script run when no script path is configured
pub fn demo_script() -> &'static str {
    "# standard account\n\
     open 1\n\
     deposit 1 100\n\
     withdraw 1 30\n\
     deposit 1 20\n\
     withdraw 1 -5\n\
     withdraw 1 500\n\
     history 1\n\
     \n\
     # checking account with configured limits\n\
     open-checking 2\n\
     deposit 2 1000\n\
     withdraw 2 600\n\
     withdraw 2 100\n\
     withdraw 2 100\n\
     withdraw 2 100\n\
     withdraw 2 100\n\
     history 2\n"
}

/// Result of executing one command
#[derive(Debug)]
pub enum Outcome {
    /// An account was opened
    Opened(u64),
    /// A deposit or withdrawal was recorded
    Accepted(TransactionId),
    /// A deposit or withdrawal was refused
    Rejected(BankingError),
    /// A history report was produced
    Report(String),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

/// Drives one client's accounts from commands
#[derive(Debug)]
pub struct Session {
    config: CliConfig,
    client: Client,
}

impl Session {
    pub fn new(config: CliConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn into_client(self) -> Client {
        self.client
    }

    /// Executes one command
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::OpenAccount { number } => {
                Account::open(number, self.config.branch_code.clone(), &mut self.client);
                Outcome::Opened(number)
            }
            Command::OpenChecking {
                number,
                overdraft_limit,
                daily_withdrawal_limit,
            } => {
                let limit = Money::new(overdraft_limit.unwrap_or(self.config.overdraft_limit));
                let count = daily_withdrawal_limit.unwrap_or(self.config.daily_withdrawal_limit);
                Account::open_checking(number, self.config.branch_code.clone(), &mut self.client, limit, count);
                Outcome::Opened(number)
            }
            Command::Deposit { number, amount } => {
                let result = self.client.deposit(number, Money::new(amount));
                Self::settle("deposit", number, result)
            }
            Command::Withdraw { number, amount } => {
                let result = self.client.withdraw(number, Money::new(amount));
                Self::settle("withdraw", number, result)
            }
            Command::History { number } => match self.client.account(number) {
                Some(account) => Outcome::Report(account.history().render_report()),
                None => Outcome::Rejected(BankingError::AccountNotFound(number)),
            },
        }
    }

    fn settle(operation: &str, number: u64, result: Result<TransactionId, BankingError>) -> Outcome {
        match result {
            Ok(id) => {
                info!(operation, account_number = number, transaction_id = %id, "Command accepted");
                Outcome::Accepted(id)
            }
            Err(error) => {
                warn!(operation, account_number = number, %error, "Command rejected");
                Outcome::Rejected(error)
            }
        }
    }

    /// Executes commands in order and collects their outcomes
    pub fn run(&mut self, commands: impl IntoIterator<Item = Command>) -> Vec<Outcome> {
        commands.into_iter().map(|c| self.execute(c)).collect()
    }

    /// One line per account with its kind and balance
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        for account in self.client.accounts() {
            let kind = match account.kind() {
                AccountKind::Standard => "standard".to_string(),
                AccountKind::Checking(limits) => format!(
                    "checking, {} of {} withdrawals left",
                    limits.remaining_withdrawals(),
                    limits.daily_withdrawal_limit()
                ),
            };
            let _ = writeln!(
                summary,
                "Account {} / branch {} ({}) - balance: {}",
                account.number(),
                account.branch_code(),
                kind,
                account.balance()
            );
        }
        summary
    }
}
