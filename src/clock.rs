//! Clock abstraction.
//!
//! The engine never reads the system time directly; every component
//! takes a [`Clock`] so tests can pin the current instant. "Today" is
//! always derived from the clock, which is what makes the one-record-
//! per-day contract testable around midnight.

use std::sync::RwLock;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Supplies the current date and time.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The production clock, backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A settable clock for tests.
///
/// Interior mutability lets a test advance time between calls while the
/// engine holds the clock behind an `Arc`.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock pinned at the given instant.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.write().unwrap_or_else(|e| e.into_inner()) = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}

/// Formats an inclusive date range for logs and labels.
pub fn format_date_range(from: NaiveDate, to: NaiveDate) -> String {
    format!("{} to {}", from, to)
}
