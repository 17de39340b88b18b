//! Error types for the attendance and payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every business-rule violation and infrastructure failure the engine
//! can surface. Errors are returned to the caller verbatim; the engine
//! never retries internally.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance and payroll engine.
///
/// Business-rule variants correspond one-to-one to the engine's daily
/// state machine and payroll preconditions; infrastructure variants wrap
/// storage and configuration failures without swallowing them.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::RateConfigMissing {
///     employee_id: "emp_001".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No pay rate configuration found for employee 'emp_001'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A check-in was attempted for an employee who already has a record
    /// for the day.
    #[error("Employee '{employee_id}' already checked in on {date}")]
    DuplicateCheckIn {
        /// The employee that attempted the check-in.
        employee_id: String,
        /// The day the duplicate was attempted for.
        date: NaiveDate,
    },

    /// A check-out was attempted with no attendance record for the day.
    #[error("Employee '{employee_id}' has no open check-in on {date}")]
    NoOpenCheckIn {
        /// The employee that attempted the check-out.
        employee_id: String,
        /// The day the check-out was attempted for.
        date: NaiveDate,
    },

    /// A check-out was attempted on a record that is already closed.
    #[error("Employee '{employee_id}' already checked out on {date}")]
    AlreadyCheckedOut {
        /// The employee that attempted the check-out.
        employee_id: String,
        /// The day whose record is already closed.
        date: NaiveDate,
    },

    /// A scan token did not match any active QR session.
    #[error("No active QR session matches the presented token")]
    InvalidToken,

    /// A QR session was requested while a previous one is still active.
    #[error("Employee '{employee_id}' already has an active QR session")]
    SessionAlreadyActive {
        /// The employee with the still-active session.
        employee_id: String,
    },

    /// A QR scan arrived after the day's record was already closed.
    #[error("Employee '{employee_id}' already completed attendance for {date}")]
    AlreadyCheckedOutToday {
        /// The employee whose record is already complete.
        employee_id: String,
        /// The day whose record is already complete.
        date: NaiveDate,
    },

    /// Payroll was requested for an employee without a rate configuration.
    #[error("No pay rate configuration found for employee '{employee_id}'")]
    RateConfigMissing {
        /// The employee without a configuration.
        employee_id: String,
    },

    /// Payroll was requested for a year/month pair that is not a valid
    /// calendar month.
    #[error("Invalid payroll period {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// The backing store could not serve a call.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// A description of the storage failure.
        message: String,
    },

    /// A scan token could not be rendered into a QR image.
    #[error("Failed to encode QR image: {message}")]
    QrEncodingFailed {
        /// A description of the encoding failure.
        message: String,
    },

    /// Engine settings file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Engine settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
