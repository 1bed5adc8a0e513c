//! Account state for the ATM engine
//!
//! This module defines the [`Account`] structure along with the history-trim
//! and daily-counter rules that every mutating operation relies on.

use super::transaction::{AccountNumber, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum number of history entries retained per account
///
/// When a new record pushes the history past this cap, the oldest entry is
/// evicted. The mini-statement only ever reads the newest entries, so the cap
/// bounds memory and file size without losing recent activity.
pub const HISTORY_CAP: usize = 50;

/// A single customer account
///
/// Accounts are created by seeding the ledger (demo data) or by an external
/// account-creation flow; the engine only ever mutates them through
/// [`AccountService`](crate::core::AccountService) operations.
///
/// Invariants maintained by the engine:
/// - `balance >= 0`
/// - `transactions.len() <= HISTORY_CAP`, most-recent-last
/// - `daily_withdrawn` never exceeds the daily limit and resets when
///   `last_withdrawal_date` no longer matches the current day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account number, immutable once created
    pub number: AccountNumber,

    /// Display name of the account holder
    pub holder_name: String,

    /// Login credential: 4 to 6 ASCII digits
    ///
    /// Stored in plain text; credential hashing is outside the engine's scope.
    pub pin: String,

    /// Current balance
    pub balance: Decimal,

    /// Transaction history, oldest-first, capped at [`HISTORY_CAP`]
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,

    /// Amount withdrawn so far on `last_withdrawal_date`
    pub daily_withdrawn: Decimal,

    /// Calendar day the daily counter applies to
    pub last_withdrawal_date: NaiveDate,
}

impl Account {
    /// Create a new account with an empty history and a zeroed daily counter
    pub fn new(
        number: impl Into<AccountNumber>,
        holder_name: impl Into<String>,
        pin: impl Into<String>,
        balance: Decimal,
        today: NaiveDate,
    ) -> Self {
        Account {
            number: number.into(),
            holder_name: holder_name.into(),
            pin: pin.into(),
            balance,
            transactions: Vec::new(),
            daily_withdrawn: Decimal::ZERO,
            last_withdrawal_date: today,
        }
    }

    /// Append a history record, evicting the oldest entry past the cap
    pub fn record(&mut self, record: TransactionRecord) {
        self.transactions.push(record);
        if self.transactions.len() > HISTORY_CAP {
            let excess = self.transactions.len() - HISTORY_CAP;
            self.transactions.drain(..excess);
        }
    }

    /// Reset the daily withdrawal counter if the stored day is not `today`
    ///
    /// Must run before any daily-limit check so that a withdrawal on a new
    /// calendar day starts from a zero counter.
    pub fn roll_daily_window(&mut self, today: NaiveDate) {
        if self.last_withdrawal_date != today {
            self.last_withdrawal_date = today;
            self.daily_withdrawn = Decimal::ZERO;
        }
    }

    /// The most recent `count` history records, oldest-first
    pub fn recent_transactions(&self, count: usize) -> &[TransactionRecord] {
        let start = self.transactions.len().saturating_sub(count);
        &self.transactions[start..]
    }
}
