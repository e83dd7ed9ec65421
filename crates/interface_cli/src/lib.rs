//! Console Front End
//!
//! This crate wires the banking domain to a console: configuration loading,
//! tracing setup, and scripted sessions that print history reports.
//!
//! # Example
//!
//! ```rust
//! use interface_cli::{config::CliConfig, session::{parse_script, Session}};
//! use domain_banking::Client;
//!
//! let mut session = Session::new(CliConfig::default(), Client::new("Rua A, 1"));
//! let commands = parse_script("open 1\ndeposit 1 100\nwithdraw 1 40\n").unwrap();
//! session.run(commands);
//!
//! assert_eq!(session.client().total_balance().unwrap().to_string(), "60");
//! ```

pub mod config;
pub mod error;
pub mod session;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use config::CliConfig;
pub use error::CliError;
pub use session::{Command, Outcome, Session};

/// Initializes the tracing subscriber for structured logging
///
/// `RUST_LOG` takes precedence over `log_level`. Events go to stderr so
/// they stay apart from the reports printed on stdout.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
