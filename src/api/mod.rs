//! HTTP API module for the time clock engine.
//!
//! This module provides the REST endpoints for attendance tracking, QR
//! scan sessions, rate configuration and monthly payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceQuery, EmployeeRequest, RedeemRequest, StatsQuery};
pub use response::{ApiError, IssuedSessionResponse};
pub use state::AppState;
