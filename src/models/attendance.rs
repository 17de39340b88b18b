//! Attendance record model.
//!
//! This module defines the per-employee, per-day attendance record and
//! its open/closed state. The state is a tagged variant rather than a
//! pair of nullable columns, so a closed record cannot exist without a
//! check-out time and a computed hour total.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The open/closed state of a day's attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttendanceState {
    /// Checked in, not yet checked out.
    Open,
    /// Checked out; the record is complete and immutable.
    Closed {
        /// The time the employee checked out.
        check_out_time: NaiveDateTime,
        /// Worked hours between check-in and check-out, never negative.
        total_hours: Decimal,
    },
}

/// A single employee's attendance for a single day.
///
/// At most one record exists per `(employee_id, date)`; the store's
/// uniqueness constraint is the authoritative guard.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{AttendanceRecord, AttendanceState};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let record = AttendanceRecord {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     check_in_time: NaiveDate::from_ymd_opt(2026, 3, 2)
///         .unwrap()
///         .and_hms_opt(9, 0, 0)
///         .unwrap(),
///     state: AttendanceState::Open,
/// };
/// assert!(record.is_open());
/// assert_eq!(record.total_hours(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// The time the employee checked in.
    pub check_in_time: NaiveDateTime,
    /// Open or closed state of the record.
    #[serde(flatten)]
    pub state: AttendanceState,
}

impl AttendanceRecord {
    /// Returns true while the record has no check-out yet.
    pub fn is_open(&self) -> bool {
        matches!(self.state, AttendanceState::Open)
    }

    /// Returns the worked hours for a closed record, `None` while open.
    pub fn total_hours(&self) -> Option<Decimal> {
        match self.state {
            AttendanceState::Open => None,
            AttendanceState::Closed { total_hours, .. } => Some(total_hours),
        }
    }
}
