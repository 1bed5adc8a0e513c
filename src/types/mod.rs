//! Core data types for the ATM engine
//!
//! - [`account`] - Account state, history cap, daily-counter rollover
//! - [`transaction`] - Transaction kinds and history records
//! - [`error`] - All engine error variants

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, HISTORY_CAP};
pub use error::AtmError;
pub use transaction::{AccountNumber, TransactionKind, TransactionRecord};
