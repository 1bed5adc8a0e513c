//! Clock abstraction for timestamps and day-rollover checks
//!
//! The daily withdrawal limit resets on a calendar-day boundary, so the
//! current time is injected through a trait instead of read ambiently. Tests
//! use [`FixedClock`] to step across day boundaries deterministically.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current time
///
/// Implementations must be cheap to call; the engine reads the clock once per
/// operation.
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current calendar day, used for daily-limit rollover
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, settable by tests
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: std::cell::Cell<NaiveDateTime>,
}

impl FixedClock {
    /// Create a clock pinned to the given instant
    pub fn new(now: NaiveDateTime) -> Self {
        FixedClock {
            now: std::cell::Cell::new(now),
        }
    }

    /// Create a clock pinned to midnight of the given day
    pub fn at_midnight(day: NaiveDate) -> Self {
        Self::new(day.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
    }

    /// Move the clock to a new instant
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + chrono::Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
