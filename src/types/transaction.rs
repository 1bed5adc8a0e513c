//! Transaction-related types for the ATM engine
//!
//! This module defines the transaction kinds and the per-account history
//! record that every mutating operation appends to.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Account numbers are short numeric strings (e.g. "1001"). They are unique
/// across the ledger and immutable once an account exists.
pub type AccountNumber = String;

/// Transaction kinds recorded in an account's history
///
/// Deposits, withdrawals, and the two halves of a transfer carry the moved
/// amount; PIN changes are recorded with a zero amount so they still show up
/// in the mini-statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Subject to the per-transaction and daily withdrawal limits.
    Withdrawal,

    /// Debit half of a transfer; `counterparty` names the destination
    TransferOut,

    /// Credit half of a transfer; `counterparty` names the source
    TransferIn,

    /// PIN replacement; recorded with amount zero
    PinChange,
}

/// A single entry in an account's transaction history
///
/// Records are appended most-recent-last and the history is capped at
/// [`HISTORY_CAP`](crate::types::account::HISTORY_CAP) entries, with the
/// oldest entry evicted on overflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The kind of operation that produced this record
    pub kind: TransactionKind,

    /// Amount moved by the operation (zero for PIN changes)
    pub amount: Decimal,

    /// Creation time, taken from the injected clock
    pub time: NaiveDateTime,

    /// The other account involved in a transfer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<AccountNumber>,

    /// Balance snapshot taken after the operation was applied
    pub balance_after: Decimal,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::TransferOut => "transfer_out",
            TransactionKind::TransferIn => "transfer_in",
            TransactionKind::PinChange => "pin_change",
        };
        f.write_str(label)
    }
}

impl TransactionRecord {
    /// Create a record with no counterparty
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        time: NaiveDateTime,
        balance_after: Decimal,
    ) -> Self {
        TransactionRecord {
            kind,
            amount,
            time,
            counterparty: None,
            balance_after,
        }
    }

    /// Create a record for one half of a transfer
    ///
    /// `counterparty` is the destination for a [`TransactionKind::TransferOut`]
    /// record and the source for a [`TransactionKind::TransferIn`] record.
    pub fn with_counterparty(
        kind: TransactionKind,
        amount: Decimal,
        time: NaiveDateTime,
        counterparty: AccountNumber,
        balance_after: Decimal,
    ) -> Self {
        TransactionRecord {
            kind,
            amount,
            time,
            counterparty: Some(counterparty),
            balance_after,
        }
    }
}
