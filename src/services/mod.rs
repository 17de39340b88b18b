//! Engine services.
//!
//! The stateful components of the engine, wired over the storage
//! collaborator traits: the attendance ledger (daily check-in/check-out
//! state machine), the QR session manager (ephemeral scan tokens), the
//! payroll calculator (monthly aggregation) and the rate configuration
//! service.

mod attendance;
mod payroll;
mod qr_session;
mod rates;

pub use attendance::{AttendanceLedger, DailyStats};
pub use payroll::PayrollCalculator;
pub use qr_session::{QrSessionManager, Redemption, ScanAction};
pub use rates::{RateConfigService, RateConfigUpdate};
