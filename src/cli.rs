//! Command-line interface parsing for FluxRate
//!
//! This module handles parsing of CLI arguments using clap: the conversion,
//! ticker, history, currency-list, and backup subcommands, plus the global
//! flags for the network timeout and cache location.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::data::{get_currency_by_code, Currency};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified currency code is not supported
    #[error("Invalid currency code: '{0}'. Run 'fluxrate currencies' to list supported codes")]
    InvalidCurrency(String),
}

/// FluxRate - convert currencies with offline-first rate caching
#[derive(Parser, Debug)]
#[command(name = "fluxrate")]
#[command(about = "Currency conversion, rate ticker, and rate history with offline support")]
#[command(version)]
pub struct Cli {
    /// Network timeout for rate API requests, in seconds
    #[arg(long, global = true, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Override the cache directory (defaults to the platform cache dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands mirroring the actions of the conversion widget
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an amount between two currencies
    Convert {
        /// Amount in the source currency
        amount: f64,
        /// Source currency code (e.g., USD)
        from: String,
        /// Target currency code (e.g., INR)
        to: String,
    },

    /// Show the latest exchange rates against a base currency
    Rates {
        /// Base currency the rates are quoted against
        #[arg(long, default_value = "USD", value_name = "CODE")]
        from: String,
    },

    /// Show the historical exchange rate for a currency pair
    History {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Number of days of history to fetch
        #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,
    },

    /// List the supported currencies
    Currencies,

    /// Export the rate cache to a JSON backup file
    Export {
        /// Output path (defaults to flux-backup-<today>.json)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Restore the rate cache from a JSON backup file
    Import {
        /// Backup file to restore
        path: PathBuf,
    },
}

/// Parses a currency code argument into an entry of the supported set.
///
/// # Arguments
/// * `s` - The currency code string from CLI (any case)
///
/// # Returns
/// * `Ok(&Currency)` if the code is supported
/// * `Err(CliError::InvalidCurrency)` if it is not
pub fn parse_currency_arg(s: &str) -> Result<&'static Currency, CliError> {
    get_currency_by_code(s).ok_or_else(|| CliError::InvalidCurrency(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_arg_valid() {
        assert_eq!(parse_currency_arg("USD").unwrap().code, "USD");
        assert_eq!(parse_currency_arg("inr").unwrap().code, "INR");
    }

    #[test]
    fn test_parse_currency_arg_invalid() {
        let result = parse_currency_arg("DOGE");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("DOGE"));
        assert!(err.to_string().contains("currencies"));
    }

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["fluxrate", "convert", "100", "USD", "INR"]);
        match cli.command {
            Command::Convert { amount, from, to } => {
                assert_eq!(amount, 100.0);
                assert_eq!(from, "USD");
                assert_eq!(to, "INR");
            }
            other => panic!("Expected Convert, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_rates_default_base() {
        let cli = Cli::parse_from(["fluxrate", "rates"]);
        match cli.command {
            Command::Rates { from } => assert_eq!(from, "USD"),
            other => panic!("Expected Rates, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_history_default_days() {
        let cli = Cli::parse_from(["fluxrate", "history", "USD", "INR"]);
        match cli.command {
            Command::History { from, to, days } => {
                assert_eq!(from, "USD");
                assert_eq!(to, "INR");
                assert_eq!(days, 90);
            }
            other => panic!("Expected History, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_history_custom_days() {
        let cli = Cli::parse_from(["fluxrate", "history", "USD", "INR", "--days", "7"]);
        match cli.command {
            Command::History { days, .. } => assert_eq!(days, 7),
            other => panic!("Expected History, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_history_rejects_zero_days() {
        let result = Cli::try_parse_from(["fluxrate", "history", "USD", "INR", "--days", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "fluxrate",
            "rates",
            "--timeout",
            "5",
            "--cache-dir",
            "/tmp/fluxrate-cache",
        ]);
        assert_eq!(cli.timeout, 5);
        assert_eq!(
            cli.cache_dir.as_deref(),
            Some(std::path::Path::new("/tmp/fluxrate-cache"))
        );
    }

    #[test]
    fn test_cli_parse_export_default_out() {
        let cli = Cli::parse_from(["fluxrate", "export"]);
        match cli.command {
            Command::Export { out } => assert!(out.is_none()),
            other => panic!("Expected Export, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_import_requires_path() {
        assert!(Cli::try_parse_from(["fluxrate", "import"]).is_err());

        let cli = Cli::parse_from(["fluxrate", "import", "backup.json"]);
        match cli.command {
            Command::Import { path } => assert_eq!(path, PathBuf::from("backup.json")),
            other => panic!("Expected Import, got {:?}", other),
        }
    }
}
