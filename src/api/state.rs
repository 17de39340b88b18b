//! Application state for the time clock engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::services::{AttendanceLedger, PayrollCalculator, QrSessionManager, RateConfigService};
use crate::token::QrEncoder;

/// Shared application state.
///
/// Contains the services shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Check-in and check-out operations.
    pub ledger: AttendanceLedger,
    /// QR session issue and redemption.
    pub sessions: QrSessionManager,
    /// Monthly payroll computation.
    pub payroll: PayrollCalculator,
    /// Pay rate configuration.
    pub rates: RateConfigService,
    /// Renders issued tokens as QR images.
    pub qr_encoder: Arc<dyn QrEncoder>,
}

impl AppState {
    /// Creates a new application state over the given services.
    pub fn new(
        ledger: AttendanceLedger,
        sessions: QrSessionManager,
        payroll: PayrollCalculator,
        rates: RateConfigService,
        qr_encoder: Arc<dyn QrEncoder>,
    ) -> Self {
        Self {
            ledger,
            sessions,
            payroll,
            rates,
            qr_encoder,
        }
    }
}
