//! Account operations and business rules
//!
//! This module provides the [`AccountService`], which enforces every rule
//! around authentication and balance mutation:
//!
//! - PIN login (no lockout; retry policy belongs to the caller)
//! - Per-transaction and daily withdrawal limits
//! - Daily-counter rollover on calendar-day boundaries
//! - Transfer as a coupled debit/credit with check-then-mutate atomicity
//! - PIN format validation on change
//! - History append with cap-and-evict
//!
//! The service never talks to storage. Callers load a [`Ledger`], invoke
//! operations against it, and persist after each mutation.

use crate::core::clock::{Clock, SystemClock};
use crate::core::ledger::Ledger;
use crate::types::{Account, AtmError, TransactionKind, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum amount allowed in a single withdrawal or transfer debit
pub const PER_TX_WITHDRAW_LIMIT: Decimal = dec!(10000);

/// Maximum cumulative amount withdrawable per calendar day
pub const DAILY_WITHDRAW_LIMIT: Decimal = dec!(20000);

/// Default number of records returned by the mini-statement
pub const STATEMENT_LEN: usize = 10;

/// The ATM engine's operation surface
///
/// Holds only the injected clock; all account state is passed in by the
/// caller. Checks always run to completion before any mutation, so a failed
/// operation leaves every account untouched.
pub struct AccountService<C: Clock> {
    clock: C,
}

impl AccountService<SystemClock> {
    /// Create a service running on the system clock
    pub fn new() -> Self {
        AccountService { clock: SystemClock }
    }
}

impl Default for AccountService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AccountService<C> {
    /// Create a service with an injected clock
    ///
    /// Tests use this with [`FixedClock`](crate::core::clock::FixedClock) to
    /// exercise daily-limit rollover deterministically.
    pub fn with_clock(clock: C) -> Self {
        AccountService { clock }
    }

    /// Authenticate against an account number and PIN
    ///
    /// # Errors
    ///
    /// * [`AtmError::AccountNotFound`] if no account has the given number
    /// * [`AtmError::InvalidCredentials`] if the PIN does not match
    pub fn login<'a>(
        &self,
        ledger: &'a Ledger,
        number: &str,
        pin: &str,
    ) -> Result<&'a Account, AtmError> {
        let account = ledger
            .get(number)
            .ok_or_else(|| AtmError::account_not_found(number))?;

        if account.pin != pin {
            return Err(AtmError::InvalidCredentials);
        }

        Ok(account)
    }

    /// Credit funds to an account
    ///
    /// Appends a [`TransactionKind::Deposit`] record and trims the history.
    ///
    /// # Errors
    ///
    /// * [`AtmError::InvalidAmount`] if `amount <= 0`
    pub fn deposit(&self, account: &mut Account, amount: Decimal) -> Result<(), AtmError> {
        if amount <= Decimal::ZERO {
            return Err(AtmError::invalid_amount(amount));
        }

        let now = self.clock.now();
        account.balance += amount;
        let balance_after = account.balance;
        account.record(TransactionRecord::new(
            TransactionKind::Deposit,
            amount,
            now,
            balance_after,
        ));

        Ok(())
    }

    /// Debit funds from an account
    ///
    /// Checks run in order: amount positivity, per-transaction limit, daily
    /// limit (against a counter that resets on a new calendar day), then
    /// balance. On success the debit also advances the daily counter and
    /// stamps today's date.
    ///
    /// # Errors
    ///
    /// * [`AtmError::InvalidAmount`] if `amount <= 0`
    /// * [`AtmError::ExceedsPerTransactionLimit`] if `amount` is above the cap
    /// * [`AtmError::ExceedsDailyLimit`] if the daily cap would be exceeded
    /// * [`AtmError::InsufficientFunds`] if `amount` exceeds the balance
    pub fn withdraw(&self, account: &mut Account, amount: Decimal) -> Result<(), AtmError> {
        let now = self.clock.now();

        check_debit(account, amount, now.date())?;
        apply_debit(account, amount, TransactionKind::Withdrawal, None, now);

        Ok(())
    }

    /// Move funds between two accounts as one atomic unit
    ///
    /// All withdraw-side checks run against the source first, then the
    /// destination is validated; no state is touched until every check has
    /// passed. The debit counts toward the source's daily withdrawal limit.
    /// Both accounts gain exactly one history record naming the counterparty.
    ///
    /// # Errors
    ///
    /// * [`AtmError::AccountNotFound`] if the source does not exist
    /// * any withdraw-side error (see [`AccountService::withdraw`])
    /// * [`AtmError::InvalidDestination`] if the destination is missing or
    ///   equals the source
    pub fn transfer(
        &self,
        ledger: &mut Ledger,
        source: &str,
        dest: &str,
        amount: Decimal,
    ) -> Result<(), AtmError> {
        let now = self.clock.now();

        // Phase 1: every check, no mutation
        let src = ledger
            .get(source)
            .ok_or_else(|| AtmError::account_not_found(source))?;
        check_debit(src, amount, now.date())?;

        if dest == source || !ledger.contains(dest) {
            return Err(AtmError::invalid_destination(dest));
        }

        // Phase 2: both mutations, neither can fail
        let src = ledger
            .get_mut(source)
            .ok_or_else(|| AtmError::account_not_found(source))?;
        apply_debit(
            src,
            amount,
            TransactionKind::TransferOut,
            Some(dest.to_string()),
            now,
        );

        let dst = ledger
            .get_mut(dest)
            .ok_or_else(|| AtmError::invalid_destination(dest))?;
        dst.balance += amount;
        let balance_after = dst.balance;
        dst.record(TransactionRecord::with_counterparty(
            TransactionKind::TransferIn,
            amount,
            now,
            source.to_string(),
            balance_after,
        ));

        Ok(())
    }

    /// Replace the account's PIN
    ///
    /// Appends a zero-amount [`TransactionKind::PinChange`] record on success.
    ///
    /// # Errors
    ///
    /// * [`AtmError::InvalidCredentials`] if `old_pin` does not match
    /// * [`AtmError::InvalidPinFormat`] unless `new_pin` is 4 to 6 digits
    pub fn change_pin(
        &self,
        account: &mut Account,
        old_pin: &str,
        new_pin: &str,
    ) -> Result<(), AtmError> {
        if account.pin != old_pin {
            return Err(AtmError::InvalidCredentials);
        }

        if !pin_format_ok(new_pin) {
            return Err(AtmError::InvalidPinFormat);
        }

        let now = self.clock.now();
        account.pin = new_pin.to_string();
        let balance_after = account.balance;
        account.record(TransactionRecord::new(
            TransactionKind::PinChange,
            Decimal::ZERO,
            now,
            balance_after,
        ));

        Ok(())
    }

    /// The most recent `count` history records, oldest-first
    ///
    /// Read-only: calling it any number of times with unchanged state returns
    /// the same slice.
    pub fn statement<'a>(&self, account: &'a Account, count: usize) -> &'a [TransactionRecord] {
        account.recent_transactions(count)
    }
}

/// Validate a withdraw-side debit without mutating the account
///
/// The daily counter is evaluated as of `today`: a stale
/// `last_withdrawal_date` means the counter has effectively rolled to zero
/// even though the reset is only written on a successful debit.
fn check_debit(account: &Account, amount: Decimal, today: NaiveDate) -> Result<(), AtmError> {
    if amount <= Decimal::ZERO {
        return Err(AtmError::invalid_amount(amount));
    }

    if amount > PER_TX_WITHDRAW_LIMIT {
        return Err(AtmError::exceeds_per_transaction_limit(
            PER_TX_WITHDRAW_LIMIT,
        ));
    }

    let withdrawn_today = if account.last_withdrawal_date == today {
        account.daily_withdrawn
    } else {
        Decimal::ZERO
    };
    if withdrawn_today + amount > DAILY_WITHDRAW_LIMIT {
        return Err(AtmError::exceeds_daily_limit(
            DAILY_WITHDRAW_LIMIT - withdrawn_today,
        ));
    }

    if amount > account.balance {
        return Err(AtmError::insufficient_funds(account.balance, amount));
    }

    Ok(())
}

/// Apply a pre-validated debit: balance, daily counter, history record
///
/// Must only run after [`check_debit`] has passed for the same amount and day.
fn apply_debit(
    account: &mut Account,
    amount: Decimal,
    kind: TransactionKind,
    counterparty: Option<String>,
    now: chrono::NaiveDateTime,
) {
    account.roll_daily_window(now.date());
    account.balance -= amount;
    account.daily_withdrawn += amount;
    let balance_after = account.balance;

    let record = match counterparty {
        Some(other) => {
            TransactionRecord::with_counterparty(kind, amount, now, other, balance_after)
        }
        None => TransactionRecord::new(kind, amount, now, balance_after),
    };
    account.record(record);
}

/// PIN format rule: 4 to 6 ASCII digits
fn pin_format_ok(pin: &str) -> bool {
    (4..=6).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit())
}
