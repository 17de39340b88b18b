//! Storage collaborator interfaces.
//!
//! The engine depends only on these traits; which concrete database
//! backs them is a deployment concern. The crate ships the in-memory
//! backend used by tests and the development server.
//!
//! Uniqueness rules (one attendance record per employee per day, one
//! active QR session per employee) are enforced by the store itself and
//! surfaced as [`StoreError::Duplicate`]. Callers insert first and react
//! to the constraint violation; there is no read-then-write guard, so
//! concurrent attempts cannot race past each other.

mod memory;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AttendanceRecord, LedgerEntry, PayRateConfig, QrSession};

pub use memory::{
    InMemoryAttendanceStore, InMemoryLedgerEntryStore, InMemoryRateStore, InMemorySessionStore,
};

/// Errors surfaced by the storage collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violation")]
    Duplicate,
    /// The backing store could not serve the call.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },
}

impl StoreError {
    pub(crate) fn poisoned() -> Self {
        StoreError::Unavailable {
            message: "store lock poisoned".to_string(),
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(error: StoreError) -> Self {
        // Duplicate is mapped contextually at the call site; reaching
        // this conversion with one means the caller did not expect a
        // constraint on that write.
        EngineError::StorageUnavailable {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Filter for attendance queries. All fields optional; `None` matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceFilter {
    /// Restrict to one employee.
    pub employee_id: Option<String>,
    /// Earliest record date, inclusive.
    pub date_from: Option<NaiveDate>,
    /// Latest record date, inclusive.
    pub date_to: Option<NaiveDate>,
}

/// Persistence for attendance records.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Inserts a new record. Rejects a second record for the same
    /// `(employee_id, date)` with [`StoreError::Duplicate`]; this is the
    /// authoritative duplicate-check-in guard.
    async fn insert(&self, record: AttendanceRecord) -> StoreResult<()>;

    /// Closes an open record, setting the check-out time and hour total.
    ///
    /// Returns the updated record, or `Ok(None)` when the record does
    /// not exist or is already closed (the atomic equivalent of an
    /// `UPDATE .. WHERE check_out IS NULL` matching zero rows).
    async fn update_checkout(
        &self,
        id: Uuid,
        check_out_time: NaiveDateTime,
        total_hours: Decimal,
    ) -> StoreResult<Option<AttendanceRecord>>;

    /// Looks up the record for one employee on one day.
    async fn find_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Option<AttendanceRecord>>;

    /// Returns records matching the filter, ordered by date descending
    /// then check-in time descending.
    async fn query(&self, filter: &AttendanceFilter) -> StoreResult<Vec<AttendanceRecord>>;
}

/// Persistence for QR sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Inserts a new active session. Rejects the write with
    /// [`StoreError::Duplicate`] when the employee already has an active
    /// session (or, pathologically, on a token collision).
    async fn insert(&self, session: QrSession) -> StoreResult<()>;

    /// Looks up an active session by its token. Redeemed sessions are
    /// never returned.
    async fn find_active_by_token(&self, token: &str) -> StoreResult<Option<QrSession>>;

    /// Looks up an employee's active session, if any.
    async fn find_active_by_employee(&self, employee_id: &str) -> StoreResult<Option<QrSession>>;

    /// Closes an active session. Returns the closed session, or
    /// `Ok(None)` when no active session matches the token.
    async fn close(&self, token: &str, closed_at: NaiveDateTime)
    -> StoreResult<Option<QrSession>>;
}

/// Persistence for pay rate configurations.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Replaces the employee's configuration unconditionally.
    async fn upsert(&self, config: PayRateConfig) -> StoreResult<()>;

    /// Returns the employee's configuration, if any.
    async fn get(&self, employee_id: &str) -> StoreResult<Option<PayRateConfig>>;
}

/// Read access to the advance/debt ledger.
#[async_trait]
pub trait LedgerEntryStore: Send + Sync {
    /// Returns unsettled entries for the employee dated within
    /// `[from, to]` inclusive.
    async fn list_unsettled(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> StoreResult<Vec<LedgerEntry>>;
}
