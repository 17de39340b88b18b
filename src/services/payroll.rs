//! Monthly payroll computation.
//!
//! Pulls a month's completed attendance, splits each day into regular
//! and overtime hours against the employee's threshold, prices both
//! buckets, and nets unsettled advances and debts off the gross.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{accumulate_monthly_hours, build_statement, month_span};
use crate::clock::format_date_range;
use crate::error::{EngineError, EngineResult};
use crate::models::{EntryKind, PayrollStatement};
use crate::store::{AttendanceFilter, AttendanceStore, LedgerEntryStore, RateStore};

/// Computes monthly payroll statements.
#[derive(Clone)]
pub struct PayrollCalculator {
    attendance: Arc<dyn AttendanceStore>,
    rates: Arc<dyn RateStore>,
    ledger_entries: Arc<dyn LedgerEntryStore>,
}

impl PayrollCalculator {
    /// Creates a calculator over the given stores.
    pub fn new(
        attendance: Arc<dyn AttendanceStore>,
        rates: Arc<dyn RateStore>,
        ledger_entries: Arc<dyn LedgerEntryStore>,
    ) -> Self {
        Self {
            attendance,
            rates,
            ledger_entries,
        }
    }

    /// Computes the statement for one employee and calendar month.
    ///
    /// Open records (checked in, never out) contribute nothing. Monetary
    /// fields on the statement are rounded to two decimal places;
    /// intermediate arithmetic keeps full precision.
    ///
    /// # Errors
    ///
    /// [`EngineError::RateConfigMissing`] when the employee has no rate
    /// configuration, [`EngineError::InvalidPeriod`] when the month is
    /// not a valid calendar month.
    pub async fn compute_monthly_payroll(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<PayrollStatement> {
        let rate = self
            .rates
            .get(employee_id)
            .await?
            .ok_or_else(|| EngineError::RateConfigMissing {
                employee_id: employee_id.to_string(),
            })?;

        let span = month_span(year, month).ok_or(EngineError::InvalidPeriod { year, month })?;

        let records = self
            .attendance
            .query(&AttendanceFilter {
                employee_id: Some(employee_id.to_string()),
                date_from: Some(span.first_day),
                date_to: Some(span.last_day),
            })
            .await?;

        let hours = accumulate_monthly_hours(&records, rate.daily_hours_threshold);

        let entries = self
            .ledger_entries
            .list_unsettled(employee_id, span.first_day, span.last_day)
            .await?;
        let mut advance_total = Decimal::ZERO;
        let mut debt_total = Decimal::ZERO;
        for entry in &entries {
            match entry.kind {
                EntryKind::Advance => advance_total += entry.amount,
                EntryKind::Debt => debt_total += entry.amount,
            }
        }

        let statement = build_statement(year, month, &hours, &rate, advance_total, debt_total);
        info!(
            employee_id,
            period = %format_date_range(span.first_day, span.last_day),
            worked_days = statement.worked_days,
            net_pay = %statement.net_pay,
            "computed payroll statement"
        );
        Ok(statement)
    }
}
