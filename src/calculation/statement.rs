//! Monthly hour accumulation and statement assembly.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, PayRateConfig, PayrollStatement};

use super::split_daily_hours;

/// Accumulated hours over one month of completed attendance records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyHours {
    /// Number of completed records included.
    pub worked_days: u32,
    /// Sum of worked hours over all included records.
    pub total_hours: Decimal,
    /// Sum of per-day regular portions.
    pub regular_hours: Decimal,
    /// Sum of per-day overtime portions.
    pub overtime_hours: Decimal,
}

/// Accumulates a month of records, splitting each day against the
/// threshold. Open records carry no hour total and are skipped.
pub fn accumulate_monthly_hours(
    records: &[AttendanceRecord],
    threshold: Decimal,
) -> MonthlyHours {
    let mut totals = MonthlyHours {
        worked_days: 0,
        total_hours: Decimal::ZERO,
        regular_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
    };

    for record in records {
        let Some(hours) = record.total_hours() else {
            continue;
        };
        let split = split_daily_hours(hours, threshold);
        totals.worked_days += 1;
        totals.total_hours += hours;
        totals.regular_hours += split.regular_hours;
        totals.overtime_hours += split.overtime_hours;
    }

    totals
}

/// Rounds to two decimal places and pins the scale there, so a whole
/// number still serializes as e.g. "2500.00".
fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Assembles the final statement from accumulated hours, the rate
/// configuration and the month's advance/debt totals.
///
/// Pay figures are derived at full precision; every field of the
/// returned statement is rounded to two decimal places for display.
pub fn build_statement(
    year: i32,
    month: u32,
    hours: &MonthlyHours,
    config: &PayRateConfig,
    advance_total: Decimal,
    debt_total: Decimal,
) -> PayrollStatement {
    let regular_pay = hours.regular_hours * config.hourly_rate;
    let overtime_pay = hours.overtime_hours * config.overtime_hourly_rate;
    let gross_pay = regular_pay + overtime_pay;
    // Debts are reimbursements owed to the employee: added back.
    let net_pay = gross_pay - advance_total + debt_total;

    PayrollStatement {
        employee_id: config.employee_id.clone(),
        year,
        month,
        worked_days: hours.worked_days,
        total_hours: round2(hours.total_hours),
        regular_hours: round2(hours.regular_hours),
        overtime_hours: round2(hours.overtime_hours),
        regular_pay: round2(regular_pay),
        overtime_pay: round2(overtime_pay),
        gross_pay: round2(gross_pay),
        advance_total: round2(advance_total),
        debt_total: round2(debt_total),
        net_pay: round2(net_pay),
        hourly_rate: config.hourly_rate,
        overtime_hourly_rate: config.overtime_hourly_rate,
    }
}
