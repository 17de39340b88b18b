//! Monthly payroll statement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a monthly payroll computation for one employee.
///
/// All figures are computed at full `Decimal` precision and rounded to
/// two decimal places when the statement is assembled; the statement is
/// the display surface, intermediate math never rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollStatement {
    /// The employee the statement covers.
    pub employee_id: String,
    /// The statement year.
    pub year: i32,
    /// The statement month (1-12).
    pub month: u32,
    /// Number of days with a completed attendance record in the month.
    pub worked_days: u32,
    /// Sum of worked hours over all completed days.
    pub total_hours: Decimal,
    /// Hours at or below the daily threshold, summed per day.
    pub regular_hours: Decimal,
    /// Hours above the daily threshold, summed per day.
    pub overtime_hours: Decimal,
    /// `regular_hours * hourly_rate`.
    pub regular_pay: Decimal,
    /// `overtime_hours * overtime_hourly_rate`.
    pub overtime_pay: Decimal,
    /// `regular_pay + overtime_pay`.
    pub gross_pay: Decimal,
    /// Sum of unsettled advances dated within the month.
    pub advance_total: Decimal,
    /// Sum of unsettled debts dated within the month.
    pub debt_total: Decimal,
    /// `gross_pay - advance_total + debt_total`.
    pub net_pay: Decimal,
    /// The hourly rate the statement was computed with.
    pub hourly_rate: Decimal,
    /// The overtime hourly rate the statement was computed with.
    pub overtime_hourly_rate: Decimal,
}
