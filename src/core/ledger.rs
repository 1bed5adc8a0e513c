//! In-memory account collection
//!
//! This module provides the [`Ledger`], the collection of all accounts held
//! in memory between a store load and the next save. It owns no policy: all
//! business rules live in [`AccountService`](crate::core::AccountService).
//!
//! Accounts are keyed by account number in a `BTreeMap`, so iteration and the
//! persisted JSON are deterministically ordered.

use crate::types::{Account, AccountNumber};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All accounts known to the engine, keyed by account number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    accounts: BTreeMap<AccountNumber, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            accounts: BTreeMap::new(),
        }
    }

    /// Seed the two demo accounts
    ///
    /// Account 1001 (Alice, PIN 1234, balance 100000.00) and account 1002
    /// (Bob, PIN 4321, balance 50000.00). Used by callers that choose to
    /// start from scratch when no ledger file exists yet.
    pub fn demo(today: NaiveDate) -> Self {
        let mut ledger = Ledger::new();
        ledger.insert(Account::new("1001", "Alice", "1234", dec!(100000.00), today));
        ledger.insert(Account::new("1002", "Bob", "4321", dec!(50000.00), today));
        ledger
    }

    /// Add an account, replacing any existing account with the same number
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.number.clone(), account);
    }

    /// Look up an account by number
    pub fn get(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    /// Look up an account by number for mutation
    pub fn get_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    /// Whether an account with the given number exists
    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number)
    }

    /// All accounts in ascending account-number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Number of accounts in the ledger
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
