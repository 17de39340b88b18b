//! Attendance ledger service.
//!
//! Owns the per-employee, per-day check-in/check-out state machine.
//! Duplicate prevention is delegated to the store's uniqueness
//! constraint: the ledger inserts first and maps the constraint
//! violation, rather than reading before writing.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculation::hours_between;
use crate::clock::Clock;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceState};
use crate::store::{AttendanceFilter, AttendanceStore, StoreError};

/// Attendance aggregates for a single day across all employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// The day the stats cover.
    pub date: NaiveDate,
    /// Number of employees with a record for the day.
    pub checked_in: u32,
    /// Number of those records already closed.
    pub completed: u32,
    /// Sum of worked hours over the closed records.
    pub total_hours: Decimal,
}

/// The check-in/check-out state machine over an [`AttendanceStore`].
#[derive(Clone)]
pub struct AttendanceLedger {
    store: Arc<dyn AttendanceStore>,
    clock: Arc<dyn Clock>,
}

impl AttendanceLedger {
    /// Creates a ledger over the given store and clock.
    pub fn new(store: Arc<dyn AttendanceStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Opens today's attendance record for the employee.
    ///
    /// # Errors
    ///
    /// [`EngineError::DuplicateCheckIn`] when a record already exists
    /// for the employee today.
    pub async fn check_in(&self, employee_id: &str) -> EngineResult<AttendanceRecord> {
        let now = self.clock.now();
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            date: now.date(),
            check_in_time: now,
            state: AttendanceState::Open,
        };

        match self.store.insert(record.clone()).await {
            Ok(()) => {
                info!(employee_id, date = %record.date, "checked in");
                Ok(record)
            }
            Err(StoreError::Duplicate) => Err(EngineError::DuplicateCheckIn {
                employee_id: employee_id.to_string(),
                date: now.date(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Closes today's attendance record for the employee, computing the
    /// worked hours.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoOpenCheckIn`] when no record exists for today;
    /// [`EngineError::AlreadyCheckedOut`] when today's record is
    /// already closed.
    pub async fn check_out(&self, employee_id: &str) -> EngineResult<AttendanceRecord> {
        let now = self.clock.now();
        let today = now.date();

        let record = self
            .store
            .find_by_employee_and_date(employee_id, today)
            .await?
            .ok_or_else(|| EngineError::NoOpenCheckIn {
                employee_id: employee_id.to_string(),
                date: today,
            })?;

        if !record.is_open() {
            return Err(EngineError::AlreadyCheckedOut {
                employee_id: employee_id.to_string(),
                date: today,
            });
        }

        let total_hours = hours_between(record.check_in_time, now);
        match self.store.update_checkout(record.id, now, total_hours).await? {
            Some(updated) => {
                info!(employee_id, date = %today, %total_hours, "checked out");
                Ok(updated)
            }
            // Zero rows matched: a concurrent check-out got there first.
            None => Err(EngineError::AlreadyCheckedOut {
                employee_id: employee_id.to_string(),
                date: today,
            }),
        }
    }

    /// Returns the employee's record for the given day, if any.
    pub async fn record_for(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<AttendanceRecord>> {
        Ok(self
            .store
            .find_by_employee_and_date(employee_id, date)
            .await?)
    }

    /// Returns records matching the filter, ordered by date descending
    /// then check-in time descending. Range bounds are inclusive.
    pub async fn list_records(
        &self,
        filter: &AttendanceFilter,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self.store.query(filter).await?)
    }

    /// Aggregates one day's attendance across all employees.
    pub async fn daily_stats(&self, date: NaiveDate) -> EngineResult<DailyStats> {
        let filter = AttendanceFilter {
            employee_id: None,
            date_from: Some(date),
            date_to: Some(date),
        };
        let records = self.store.query(&filter).await?;

        let mut stats = DailyStats {
            date,
            checked_in: records.len() as u32,
            completed: 0,
            total_hours: Decimal::ZERO,
        };
        for record in &records {
            if let Some(hours) = record.total_hours() {
                stats.completed += 1;
                stats.total_hours += hours;
            }
        }
        Ok(stats)
    }

    /// Today according to the ledger's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
