//! Core data models for the attendance and payroll engine.
//!
//! This module contains all the domain types used throughout the engine.

mod attendance;
mod ledger_entry;
mod payroll;
mod rate_config;
mod session;

pub use attendance::{AttendanceRecord, AttendanceState};
pub use ledger_entry::{EntryKind, LedgerEntry};
pub use payroll::PayrollStatement;
pub use rate_config::PayRateConfig;
pub use session::{QrSession, SessionState};
