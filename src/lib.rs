//! Attendance tracking and monthly payroll computation engine.
//!
//! This crate implements the employee check-in/check-out state machine,
//! the QR ephemeral-session protocol that maps scanned tokens onto
//! attendance actions, and the monthly payroll aggregation over worked
//! hours, overtime, advances and debts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod token;
