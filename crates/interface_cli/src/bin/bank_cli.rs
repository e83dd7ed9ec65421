//! Banking console - runs a scripted session and prints the results
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in demo
//! cargo run --bin bank-cli
//!
//! # Run a command script with a different branch and limits
//! BANK_SCRIPT_PATH=session.txt BANK_BRANCH_CODE=0042 BANK_OVERDRAFT_LIMIT=800 cargo run --bin bank-cli
//! ```
//!
//! # Environment Variables
//!
//! * `BANK_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `BANK_BRANCH_CODE` - Branch code for opened accounts (default: 0001)
//! * `BANK_OVERDRAFT_LIMIT` - Default checking per-withdrawal limit (default: 500)
//! * `BANK_DAILY_WITHDRAWAL_LIMIT` - Default checking withdrawal count (default: 3)
//! * `BANK_SCRIPT_PATH` - Command script to run instead of the demo

use anyhow::Context;
use chrono::NaiveDate;

use domain_banking::{Client, IndividualDetails};
use interface_cli::{
    init_tracing,
    session::{load_script, parse_script},
    CliConfig, Outcome, Session,
};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("loading configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        branch_code = %config.branch_code,
        overdraft_limit = %config.overdraft_limit,
        daily_withdrawal_limit = config.daily_withdrawal_limit,
        "Starting banking session"
    );

    let script = load_script(config.script_path.as_deref()).context("loading script")?;
    let commands = parse_script(&script)?;

    let mut session = Session::new(config, demo_client()?);
    for outcome in session.run(commands) {
        match outcome {
            Outcome::Report(report) => print!("{}", report),
            Outcome::Rejected(error) => println!("Rejected: {}", error),
            Outcome::Opened(_) | Outcome::Accepted(_) => {}
        }
    }

    print!("{}", session.summary());
    tracing::info!("Session finished");
    Ok(())
}

fn demo_client() -> anyhow::Result<Client> {
    let birth_date = NaiveDate::from_ymd_opt(1985, 4, 12).context("invalid birth date")?;
    let client = Client::individual(
        "Rua das Flores, 123 - Sao Paulo/SP",
        IndividualDetails {
            tax_id: "123.456.789-09".to_string(),
            full_name: "Carla Mendes".to_string(),
            birth_date,
        },
    )?;
    Ok(client)
}
