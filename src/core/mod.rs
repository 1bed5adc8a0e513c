//! Business logic components
//!
//! - [`service`] - The six account operations and every limit rule
//! - [`ledger`] - In-memory account collection
//! - [`clock`] - Injected time source for daily-limit rollover

pub mod clock;
pub mod ledger;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::Ledger;
pub use service::{AccountService, DAILY_WITHDRAW_LIMIT, PER_TX_WITHDRAW_LIMIT, STATEMENT_LEN};
