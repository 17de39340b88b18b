//! Calendar-month span computation.

use chrono::NaiveDate;

/// The inclusive first and last day of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    /// The first day of the month.
    pub first_day: NaiveDate,
    /// The last day of the month.
    pub last_day: NaiveDate,
}

/// Returns the span of the given calendar month, or `None` when the
/// year/month pair is not a valid date.
pub fn month_span(year: i32, month: u32) -> Option<MonthSpan> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(MonthSpan {
        first_day,
        last_day: next_month.pred_opt()?,
    })
}
