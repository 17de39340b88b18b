//! Request types for the time clock engine API.
//!
//! These are the deserialization targets for incoming bodies and query
//! strings, kept separate from the domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::AttendanceFilter;

/// Body naming the employee an action applies to.
///
/// Used by check-in, check-out and QR session issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee identifier.
    pub employee_id: String,
}

/// Body carrying a scanned session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemRequest {
    /// The token read from the QR image.
    pub session_token: String,
}

/// Query parameters for listing attendance records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceQuery {
    /// Restrict to one employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Earliest record date, inclusive.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Latest record date, inclusive.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

impl From<AttendanceQuery> for AttendanceFilter {
    fn from(query: AttendanceQuery) -> Self {
        Self {
            employee_id: query.employee_id,
            date_from: query.date_from,
            date_to: query.date_to,
        }
    }
}

/// Query parameters for the daily stats endpoint. Defaults to today
/// when no date is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsQuery {
    /// The day to aggregate.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_query_converts_to_filter() {
        let query = AttendanceQuery {
            employee_id: Some("emp_001".to_string()),
            date_from: NaiveDate::parse_from_str("2026-03-01", "%Y-%m-%d").ok(),
            date_to: None,
        };
        let filter: AttendanceFilter = query.into();
        assert_eq!(filter.employee_id.as_deref(), Some("emp_001"));
        assert!(filter.date_from.is_some());
        assert!(filter.date_to.is_none());
    }

    #[test]
    fn test_empty_query_deserializes() {
        let query: AttendanceQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, AttendanceQuery::default());
    }
}
