//! ATM Engine Library
//!
//! # Overview
//!
//! This library implements the business-rule core of a file-backed ATM:
//! login, deposit, withdraw, transfer, mini-statement, and PIN change over a
//! collection of account records persisted as a single JSON file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, AtmError)
//! - [`core`] - Business logic components:
//!   - [`core::service`] - The six account operations and every limit rule
//!   - [`core::ledger`] - In-memory account collection
//!   - [`core::clock`] - Injected time source for daily-limit rollover
//! - [`store`] - JSON persistence with atomic whole-file saves
//! - [`cli`] - CLI argument parsing
//!
//! # Business Rules
//!
//! - Withdrawals are capped at 10,000 per transaction and 20,000 per
//!   calendar day; the daily counter resets on a day boundary.
//! - Transfers apply all withdraw-side checks to the source before touching
//!   either account, so a failed transfer mutates nothing.
//! - Every mutating operation appends a history record; each account keeps
//!   at most its 50 most recent records.
//! - PINs are 4 to 6 ASCII digits.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous by design: one logical transaction is a
//! load, an in-memory mutation, and a save. Callers that introduce
//! concurrency must serialize whole operations themselves.

pub mod cli;
pub mod core;
pub mod store;
pub mod types;

pub use crate::core::{
    AccountService, Clock, FixedClock, Ledger, SystemClock, DAILY_WITHDRAW_LIMIT,
    PER_TX_WITHDRAW_LIMIT, STATEMENT_LEN,
};
pub use crate::store::JsonStore;
pub use crate::types::{
    Account, AccountNumber, AtmError, TransactionKind, TransactionRecord, HISTORY_CAP,
};
