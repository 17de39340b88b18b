//! QR session manager.
//!
//! Issues short-lived scan tokens and redeems them against the
//! attendance ledger. One issued session covers a whole working day: the
//! first scan checks the employee in and leaves the session active, the
//! second scan checks them out and closes the session terminally. A new
//! session cannot be issued while an old one is still active; the
//! store's one-active-session-per-employee constraint is the guard.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::Clock;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, QrSession, SessionState};
use crate::store::{SessionStore, StoreError};
use crate::token::TokenGenerator;

use super::AttendanceLedger;

/// The attendance action a scan resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanAction {
    /// The scan opened today's record.
    CheckIn,
    /// The scan closed today's record.
    CheckOut,
}

/// The outcome of a successful redemption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redemption {
    /// Which attendance transition the scan performed.
    pub action: ScanAction,
    /// The attendance record after the transition.
    pub record: AttendanceRecord,
}

/// Issues and redeems ephemeral QR scan sessions.
#[derive(Clone)]
pub struct QrSessionManager {
    sessions: Arc<dyn SessionStore>,
    ledger: AttendanceLedger,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
}

impl QrSessionManager {
    /// Creates a manager over the given session store, ledger, token
    /// generator and clock.
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        ledger: AttendanceLedger,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            ledger,
            tokens,
            clock,
        }
    }

    /// Issues a new scan session for the employee.
    ///
    /// # Errors
    ///
    /// [`EngineError::SessionAlreadyActive`] when the employee already
    /// has an active session.
    pub async fn issue(&self, employee_id: &str) -> EngineResult<QrSession> {
        let session = QrSession {
            session_token: self.tokens.generate(),
            employee_id: employee_id.to_string(),
            opened_at: self.clock.now(),
            state: SessionState::Active,
        };

        match self.sessions.insert(session.clone()).await {
            Ok(()) => {
                info!(employee_id, "issued QR session");
                Ok(session)
            }
            Err(StoreError::Duplicate) => Err(EngineError::SessionAlreadyActive {
                employee_id: employee_id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Redeems a scanned token, performing exactly one attendance
    /// transition.
    ///
    /// A session issued on an earlier calendar day has expired: it is
    /// closed and the scan is rejected rather than silently opening a
    /// fresh check-in for the new day.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidToken`] for unknown, redeemed or expired
    /// tokens; [`EngineError::AlreadyCheckedOutToday`] when today's
    /// record is already complete.
    pub async fn redeem(&self, token: &str) -> EngineResult<Redemption> {
        let session = self
            .sessions
            .find_active_by_token(token)
            .await?
            .ok_or(EngineError::InvalidToken)?;

        let now = self.clock.now();
        if session.opened_at.date() < now.date() {
            // Expired overnight. Close it so a fresh session can be issued.
            self.sessions.close(token, now).await?;
            info!(employee_id = %session.employee_id, "rejected expired QR session");
            return Err(EngineError::InvalidToken);
        }

        match self
            .ledger
            .record_for(&session.employee_id, now.date())
            .await?
        {
            None => {
                let record = self.ledger.check_in(&session.employee_id).await?;
                info!(employee_id = %session.employee_id, "QR scan checked in");
                Ok(Redemption {
                    action: ScanAction::CheckIn,
                    record,
                })
            }
            Some(record) if record.is_open() => {
                let record = self.ledger.check_out(&session.employee_id).await?;
                self.sessions.close(token, self.clock.now()).await?;
                info!(employee_id = %session.employee_id, "QR scan checked out");
                Ok(Redemption {
                    action: ScanAction::CheckOut,
                    record,
                })
            }
            Some(record) => Err(EngineError::AlreadyCheckedOutToday {
                employee_id: session.employee_id,
                date: record.date,
            }),
        }
    }
}
