//! Daily regular/overtime hour split.
//!
//! Splits one day's worked hours against the employee's daily threshold:
//! hours up to the threshold are regular, any excess is overtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The regular/overtime split of one day's worked hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySplit {
    /// Hours at or below the threshold.
    pub regular_hours: Decimal,
    /// Hours above the threshold, zero when the day fits inside it.
    pub overtime_hours: Decimal,
}

/// Splits `total_hours` against `threshold`.
///
/// A day with `total_hours <= threshold` contributes nothing to
/// overtime.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::split_daily_hours;
/// use rust_decimal::Decimal;
///
/// let split = split_daily_hours(Decimal::new(10, 0), Decimal::new(8, 0));
/// assert_eq!(split.regular_hours, Decimal::new(8, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn split_daily_hours(total_hours: Decimal, threshold: Decimal) -> DailySplit {
    if total_hours <= threshold {
        DailySplit {
            regular_hours: total_hours,
            overtime_hours: Decimal::ZERO,
        }
    } else {
        DailySplit {
            regular_hours: threshold,
            overtime_hours: total_hours - threshold,
        }
    }
}
