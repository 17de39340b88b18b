//! Per-employee pay rate configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay rates and thresholds for one employee.
///
/// One row per employee with upsert semantics: writing a new config for
/// an employee replaces the previous one unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRateConfig {
    /// The employee the configuration applies to.
    pub employee_id: String,
    /// Hourly rate paid for hours at or below the daily threshold.
    pub hourly_rate: Decimal,
    /// Hourly rate paid for hours above the daily threshold.
    pub overtime_hourly_rate: Decimal,
    /// Daily worked-hour threshold separating regular from overtime.
    pub daily_hours_threshold: Decimal,
    /// Paid leave days granted per month.
    pub monthly_leave_allowance: u32,
}
