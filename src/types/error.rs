//! Error types for the ATM engine
//!
//! This module defines all errors the engine can report. Every failure is a
//! distinguishable variant with enough context for a caller (CLI, GUI, or
//! test harness) to present a useful message; nothing is retried by the core.
//!
//! # Error Categories
//!
//! - **Authentication**: unknown account, wrong PIN
//! - **Validation**: non-positive amounts, bad PIN format, bad destination
//! - **Limits**: per-transaction and daily withdrawal caps
//! - **Storage**: the backing file is missing, unreadable, or unwritable

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmError {
    /// No account exists with the given number
    #[error("Account {number} not found")]
    AccountNotFound {
        /// The account number that was looked up
        number: String,
    },

    /// The supplied PIN does not match the account's PIN
    ///
    /// Also reported by `change_pin` when the old PIN is wrong. The engine
    /// applies no lockout or retry counting; re-prompting belongs to the
    /// calling layer.
    #[error("Invalid account or PIN")]
    InvalidCredentials,

    /// The amount is zero or negative
    #[error("Invalid amount '{amount}': must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// A single withdrawal above the per-transaction cap
    #[error("Per-transaction limit is {limit}")]
    ExceedsPerTransactionLimit {
        /// The per-transaction cap
        limit: Decimal,
    },

    /// The withdrawal would push the daily total past the cap
    #[error("Daily limit exceeded: only {remaining} can still be withdrawn today")]
    ExceedsDailyLimit {
        /// Headroom left under the daily cap
        remaining: Decimal,
    },

    /// The amount exceeds the account balance
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Current balance
        balance: Decimal,
        /// Requested debit
        requested: Decimal,
    },

    /// Transfer destination is missing or is the source account itself
    #[error("Invalid destination account {number}")]
    InvalidDestination {
        /// The rejected destination number
        number: String,
    },

    /// A new PIN that is not 4 to 6 ASCII digits
    #[error("PIN must be 4 to 6 digits")]
    InvalidPinFormat,

    /// The backing store could not be read or written
    ///
    /// Raised for a missing or corrupt ledger file on load, and for any I/O
    /// or serialization failure on save. After a failed save the in-memory
    /// mutation is ahead of the persisted state; the caller decides whether
    /// to retry the save or discard the change.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// Description of the underlying failure
        message: String,
    },
}

impl From<std::io::Error> for AtmError {
    fn from(error: std::io::Error) -> Self {
        AtmError::StorageUnavailable {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AtmError {
    fn from(error: serde_json::Error) -> Self {
        AtmError::StorageUnavailable {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AtmError {
    /// Create an AccountNotFound error
    pub fn account_not_found(number: &str) -> Self {
        AtmError::AccountNotFound {
            number: number.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        AtmError::InvalidAmount { amount }
    }

    /// Create an ExceedsPerTransactionLimit error
    pub fn exceeds_per_transaction_limit(limit: Decimal) -> Self {
        AtmError::ExceedsPerTransactionLimit { limit }
    }

    /// Create an ExceedsDailyLimit error with the remaining headroom
    pub fn exceeds_daily_limit(remaining: Decimal) -> Self {
        AtmError::ExceedsDailyLimit { remaining }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        AtmError::InsufficientFunds { balance, requested }
    }

    /// Create an InvalidDestination error
    pub fn invalid_destination(number: &str) -> Self {
        AtmError::InvalidDestination {
            number: number.to_string(),
        }
    }

    /// Create a StorageUnavailable error
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        AtmError::StorageUnavailable {
            message: message.into(),
        }
    }
}
