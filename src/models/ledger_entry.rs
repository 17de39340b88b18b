//! Advance/debt ledger entries.
//!
//! Entries are written by an external bookkeeping surface; the payroll
//! calculator only ever reads the unsettled ones for a month.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Money paid to the employee ahead of payroll; deducted from net pay.
    Advance,
    /// Money the company owes the employee; added back to net pay.
    Debt,
}

/// A single advance or debt against an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// Advance or debt.
    pub kind: EntryKind,
    /// The monetary amount, always positive.
    pub amount: Decimal,
    /// Free-form description of the entry.
    pub description: String,
    /// The day the entry was recorded.
    pub date: NaiveDate,
    /// True once the entry has been reconciled; settled entries are
    /// excluded from payroll runs.
    pub settled: bool,
}
