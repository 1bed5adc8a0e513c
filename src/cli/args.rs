use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::core::STATEMENT_LEN;

/// File-backed ATM account operations
///
/// Every command authenticates with `--account` and `--pin` before running;
/// there is no session state between invocations.
#[derive(Parser, Debug)]
#[command(name = "atm-engine")]
#[command(about = "Login, deposit, withdraw, transfer, statement, and PIN change over a JSON ledger", long_about = None)]
pub struct CliArgs {
    /// Path to the JSON ledger file
    ///
    /// Seeded with the demo accounts on first use if it does not exist.
    #[arg(
        long = "data",
        value_name = "FILE",
        default_value = "accounts.json",
        help = "Path to the JSON ledger file"
    )]
    pub data_file: PathBuf,

    /// Account number to authenticate as
    #[arg(long, value_name = "NUMBER", help = "Account number")]
    pub account: String,

    /// PIN for the account
    #[arg(long, value_name = "PIN", help = "Account PIN")]
    pub pin: String,

    #[command(subcommand)]
    pub command: Command,
}

/// The operation to perform after authentication
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current balance
    Balance,

    /// Credit funds to the account
    Deposit {
        /// Amount to deposit
        #[arg(long, value_name = "AMOUNT")]
        amount: Decimal,
    },

    /// Debit funds, subject to per-transaction and daily limits
    Withdraw {
        /// Amount to withdraw
        #[arg(long, value_name = "AMOUNT")]
        amount: Decimal,
    },

    /// Move funds to another account as one atomic unit
    Transfer {
        /// Destination account number
        #[arg(long, value_name = "NUMBER")]
        to: String,

        /// Amount to transfer
        #[arg(long, value_name = "AMOUNT")]
        amount: Decimal,
    },

    /// Show the most recent transactions
    Statement {
        /// Number of records to show
        #[arg(long, value_name = "COUNT", default_value_t = STATEMENT_LEN)]
        count: usize,
    },

    /// Replace the login PIN
    ChangePin {
        /// New PIN (4 to 6 digits)
        #[arg(long = "new-pin", value_name = "PIN")]
        new_pin: String,
    },
}

impl Command {
    /// Whether the command mutates the ledger and requires a save
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Command::Balance | Command::Statement { .. })
    }
}

/// Parse command-line arguments, exiting with a usage message on error
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
