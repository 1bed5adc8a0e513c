//! ATM Engine CLI
//!
//! Command-line front end for the ATM engine: every invocation authenticates
//! against the JSON ledger, performs one operation, and persists any mutation.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --account 1001 --pin 1234 balance
//! cargo run -- --account 1001 --pin 1234 deposit --amount 500
//! cargo run -- --account 1001 --pin 1234 withdraw --amount 2500
//! cargo run -- --account 1001 --pin 1234 transfer --to 1002 --amount 5000
//! cargo run -- --account 1001 --pin 1234 statement --count 10
//! cargo run -- --account 1001 --pin 1234 change-pin --new-pin 5678
//! ```
//!
//! The ledger file (default `accounts.json`, override with `--data`) is
//! seeded with the two demo accounts on first use.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad credentials, limit exceeded, storage failure, etc.)

use rust_atm_engine::cli::{self, CliArgs, Command};
use rust_atm_engine::core::{AccountService, Clock, Ledger, SystemClock};
use rust_atm_engine::store::JsonStore;
use rust_atm_engine::types::AtmError;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Load the ledger, authenticate, run one command, persist any mutation
///
/// A save failure after an in-memory mutation surfaces as an error; the
/// on-disk ledger keeps its previous contents in that case.
fn run(args: CliArgs) -> Result<(), AtmError> {
    let service = AccountService::new();
    let store = JsonStore::new(&args.data_file);

    // Seeding on a missing file is a front-end policy; the store itself
    // treats a missing file as StorageUnavailable.
    let mut ledger = if store.exists() {
        store.load()?
    } else {
        Ledger::demo(SystemClock.today())
    };

    let number = args.account.as_str();
    service.login(&ledger, number, &args.pin)?;

    match &args.command {
        Command::Balance => {
            let account = service.login(&ledger, number, &args.pin)?;
            println!(
                "{} ({}): balance {}",
                account.number, account.holder_name, account.balance
            );
        }
        Command::Deposit { amount } => {
            let account = ledger
                .get_mut(number)
                .ok_or_else(|| AtmError::account_not_found(number))?;
            service.deposit(account, *amount)?;
            println!("Deposited {}. New balance: {}", amount, account.balance);
        }
        Command::Withdraw { amount } => {
            let account = ledger
                .get_mut(number)
                .ok_or_else(|| AtmError::account_not_found(number))?;
            service.withdraw(account, *amount)?;
            println!("Dispensed {}. New balance: {}", amount, account.balance);
        }
        Command::Transfer { to, amount } => {
            service.transfer(&mut ledger, number, to, *amount)?;
            let account = service.login(&ledger, number, &args.pin)?;
            println!(
                "Transferred {} to {}. New balance: {}",
                amount, to, account.balance
            );
        }
        Command::Statement { count } => {
            let account = service.login(&ledger, number, &args.pin)?;
            let records = service.statement(account, *count);
            if records.is_empty() {
                println!("No transactions.");
            }
            for record in records {
                let counterparty = record
                    .counterparty
                    .as_deref()
                    .map(|n| format!(" ({})", n))
                    .unwrap_or_default();
                println!(
                    "{}  {:<12}  amount {:>12}  balance {:>12}{}",
                    record.time.format("%Y-%m-%d %H:%M:%S"),
                    record.kind,
                    record.amount,
                    record.balance_after,
                    counterparty
                );
            }
        }
        Command::ChangePin { new_pin } => {
            let account = ledger
                .get_mut(number)
                .ok_or_else(|| AtmError::account_not_found(number))?;
            service.change_pin(account, &args.pin, new_pin)?;
            println!("PIN updated successfully.");
        }
    }

    if args.command.is_mutating() {
        store.save(&ledger)?;
    }

    Ok(())
}
