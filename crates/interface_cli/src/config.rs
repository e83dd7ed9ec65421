//! CLI configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::CliError;

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Branch code assigned to accounts opened by the session
    pub branch_code: String,
    /// Default per-withdrawal limit for checking accounts
    pub overdraft_limit: Decimal,
    /// Default withdrawal count limit for checking accounts
    pub daily_withdrawal_limit: u32,
    /// Optional path to a command script; the built-in demo runs when unset
    pub script_path: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            branch_code: "0001".to_string(),
            overdraft_limit: Decimal::new(500, 0),
            daily_withdrawal_limit: 3,
            script_path: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `BANK_*` environment variables
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, CliError> {
        let defaults = Self::default();
        let config: Self = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("branch_code", defaults.branch_code)?
            .set_default("overdraft_limit", defaults.overdraft_limit.to_string())?
            .set_default("daily_withdrawal_limit", i64::from(defaults.daily_withdrawal_limit))?
            .add_source(config::Environment::with_prefix("BANK"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialization alone cannot
    pub fn validate(&self) -> Result<(), CliError> {
        if self.branch_code.trim().is_empty() {
            return Err(CliError::InvalidConfig("branch_code must not be empty".to_string()));
        }
        if self.overdraft_limit <= Decimal::ZERO {
            return Err(CliError::InvalidConfig(format!(
                "overdraft_limit must be positive, got {}",
                self.overdraft_limit
            )));
        }
        Ok(())
    }
}
