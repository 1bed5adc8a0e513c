//! End-to-end integration tests
//!
//! These tests validate the complete operation pipeline the CLI performs:
//! seed a ledger file, load it, authenticate, run operations through the
//! service, save, and reload to assert on the persisted state. Each scenario
//! runs against its own temporary directory.

use chrono::NaiveDate;
use rstest::rstest;
use rust_atm_engine::{
    AccountService, AtmError, FixedClock, JsonStore, Ledger, TransactionKind, HISTORY_CAP,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::{tempdir, TempDir};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

/// Seed a demo ledger file in a fresh temp directory
fn seeded_store() -> (TempDir, JsonStore) {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("accounts.json"));
    store.save(&Ledger::demo(day(1))).unwrap();
    (dir, store)
}

fn service_on(d: NaiveDate) -> AccountService<FixedClock> {
    AccountService::with_clock(FixedClock::at_midnight(d))
}

#[test]
fn deposit_persists_balance_and_history() {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    let mut ledger = store.load().unwrap();
    service.login(&ledger, "1001", "1234").unwrap();
    let account = ledger.get_mut("1001").unwrap();
    service.deposit(account, dec!(2500.25)).unwrap();
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    let account = reloaded.get("1001").unwrap();
    assert_eq!(account.balance, dec!(102500.25));
    assert_eq!(account.transactions.len(), 1);
    assert_eq!(account.transactions[0].kind, TransactionKind::Deposit);
    assert_eq!(account.transactions[0].balance_after, dec!(102500.25));
}

#[test]
fn withdrawal_persists_daily_counter() {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    let mut ledger = store.load().unwrap();
    let account = ledger.get_mut("1001").unwrap();
    service.withdraw(account, dec!(7500)).unwrap();
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    let account = reloaded.get("1001").unwrap();
    assert_eq!(account.balance, dec!(92500.00));
    assert_eq!(account.daily_withdrawn, dec!(7500));
    assert_eq!(account.last_withdrawal_date, day(1));
}

#[test]
fn daily_limit_survives_reload_and_resets_next_day() {
    let (_dir, store) = seeded_store();

    // Day 1: exhaust the daily limit across two sessions
    {
        let service = service_on(day(1));
        let mut ledger = store.load().unwrap();
        let account = ledger.get_mut("1001").unwrap();
        service.withdraw(account, dec!(10000)).unwrap();
        store.save(&ledger).unwrap();
    }
    {
        let service = service_on(day(1));
        let mut ledger = store.load().unwrap();
        let account = ledger.get_mut("1001").unwrap();
        service.withdraw(account, dec!(10000)).unwrap();
        assert!(matches!(
            service.withdraw(account, dec!(1)).unwrap_err(),
            AtmError::ExceedsDailyLimit { .. }
        ));
        store.save(&ledger).unwrap();
    }

    // Day 2: a fresh session sees a reset counter
    let service = service_on(day(2));
    let mut ledger = store.load().unwrap();
    let account = ledger.get_mut("1001").unwrap();
    service.withdraw(account, dec!(4000)).unwrap();
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    let account = reloaded.get("1001").unwrap();
    assert_eq!(account.daily_withdrawn, dec!(4000));
    assert_eq!(account.last_withdrawal_date, day(2));
}

#[test]
fn transfer_persists_both_sides() {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    let mut ledger = store.load().unwrap();
    service
        .transfer(&mut ledger, "1001", "1002", dec!(10000))
        .unwrap();
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    let src = reloaded.get("1001").unwrap();
    let dst = reloaded.get("1002").unwrap();

    assert_eq!(src.balance, dec!(90000.00));
    assert_eq!(dst.balance, dec!(60000.00));
    assert_eq!(src.transactions.len(), 1);
    assert_eq!(dst.transactions.len(), 1);
    assert_eq!(src.transactions[0].counterparty.as_deref(), Some("1002"));
    assert_eq!(dst.transactions[0].counterparty.as_deref(), Some("1001"));
}

#[rstest]
#[case::above_per_tx_limit("1002", dec!(10001))]
#[case::missing_destination("9999", dec!(100))]
#[case::self_transfer("1001", dec!(100))]
fn failed_transfer_leaves_persisted_state_unchanged(#[case] dest: &str, #[case] amount: Decimal) {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    let mut ledger = store.load().unwrap();
    let result = service.transfer(&mut ledger, "1001", dest, amount);
    assert!(result.is_err());
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.get("1001").unwrap().balance, dec!(100000.00));
    assert_eq!(reloaded.get("1002").unwrap().balance, dec!(50000.00));
    assert!(reloaded.get("1001").unwrap().transactions.is_empty());
    assert!(reloaded.get("1002").unwrap().transactions.is_empty());
}

#[test]
fn pin_change_persists_and_old_pin_stops_working() {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    let mut ledger = store.load().unwrap();
    let account = ledger.get_mut("1001").unwrap();
    service.change_pin(account, "1234", "5678").unwrap();
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    assert!(service.login(&reloaded, "1001", "5678").is_ok());
    assert_eq!(
        service.login(&reloaded, "1001", "1234").unwrap_err(),
        AtmError::InvalidCredentials
    );

    // The change itself shows up in the statement
    let account = reloaded.get("1001").unwrap();
    let statement = service.statement(account, 10);
    assert_eq!(statement.last().unwrap().kind, TransactionKind::PinChange);
    assert_eq!(statement.last().unwrap().amount, Decimal::ZERO);
}

#[test]
fn history_cap_holds_across_sessions() {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    // 51 deposits spread over two load/save sessions
    let mut ledger = store.load().unwrap();
    let account = ledger.get_mut("1002").unwrap();
    for seq in 1..=30i64 {
        service.deposit(account, Decimal::from(seq)).unwrap();
    }
    store.save(&ledger).unwrap();

    let mut ledger = store.load().unwrap();
    let account = ledger.get_mut("1002").unwrap();
    for seq in 31..=51i64 {
        service.deposit(account, Decimal::from(seq)).unwrap();
    }
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    let account = reloaded.get("1002").unwrap();
    assert_eq!(account.transactions.len(), HISTORY_CAP);
    // The first deposit (amount 1) was evicted, the newest survives
    assert_eq!(account.transactions[0].amount, dec!(2));
    assert_eq!(account.transactions.last().unwrap().amount, dec!(51));
}

#[test]
fn statement_is_stable_across_reloads() {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    let mut ledger = store.load().unwrap();
    let account = ledger.get_mut("1001").unwrap();
    service.deposit(account, dec!(100)).unwrap();
    service.withdraw(account, dec!(40)).unwrap();
    store.save(&ledger).unwrap();

    let first = store.load().unwrap();
    let second = store.load().unwrap();
    assert_eq!(
        service.statement(first.get("1001").unwrap(), 10),
        service.statement(second.get("1001").unwrap(), 10)
    );
}

#[test]
fn missing_ledger_file_reports_storage_unavailable() {
    let dir = tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("absent.json"));

    assert!(matches!(
        store.load().unwrap_err(),
        AtmError::StorageUnavailable { .. }
    ));
}

#[test]
fn corrupt_ledger_file_reports_storage_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("accounts.json");
    std::fs::write(&path, b"[1, 2, oops").unwrap();

    let store = JsonStore::new(&path);
    assert!(matches!(
        store.load().unwrap_err(),
        AtmError::StorageUnavailable { .. }
    ));
}

#[test]
fn balances_stay_non_negative_through_mixed_session() {
    let (_dir, store) = seeded_store();
    let service = service_on(day(1));

    let mut ledger = store.load().unwrap();
    let account = ledger.get_mut("1002").unwrap();
    service.deposit(account, dec!(1000)).unwrap();
    service.withdraw(account, dec!(9000)).unwrap();
    let _ = service.withdraw(account, dec!(999999));
    service
        .transfer(&mut ledger, "1002", "1001", dec!(10000))
        .unwrap();
    store.save(&ledger).unwrap();

    let reloaded = store.load().unwrap();
    for account in reloaded.accounts() {
        assert!(account.balance >= Decimal::ZERO);
    }
}
