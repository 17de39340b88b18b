//! Calculation logic for the attendance and payroll engine.
//!
//! This module contains the pure functions behind the engine: worked-hour
//! derivation from check-in/check-out timestamps, the daily
//! regular/overtime split against a threshold, calendar-month span
//! computation, and monthly statement assembly with display rounding.

mod daily_split;
mod hours;
mod month_span;
mod statement;

pub use daily_split::{DailySplit, split_daily_hours};
pub use hours::hours_between;
pub use month_span::{MonthSpan, month_span};
pub use statement::{MonthlyHours, accumulate_monthly_hours, build_statement};
