//! Worked-hours derivation from check-in/check-out timestamps.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Returns the fractional hours between check-in and check-out, at
/// minute resolution, clamped at zero.
///
/// Both arguments are full timestamps, so a check-out after midnight
/// still yields a positive span; the clamp only guards against clock
/// skew feeding a check-out earlier than the check-in.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::hours_between;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let check_in = NaiveDate::from_ymd_opt(2026, 3, 2)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2026, 3, 2)
///     .unwrap()
///     .and_hms_opt(17, 30, 0)
///     .unwrap();
/// assert_eq!(hours_between(check_in, check_out), Decimal::new(85, 1)); // 8.5
/// ```
pub fn hours_between(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Decimal {
    let minutes = (check_out - check_in).num_minutes().max(0);
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
