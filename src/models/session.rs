//! QR session model.
//!
//! An ephemeral, redeemable session standing in for a check-in/check-out
//! action. The active/redeemed state is a tagged variant so a redeemed
//! session cannot be told apart from an active one by accident, and a
//! redeemed session carries the time it was closed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The lifecycle state of a QR session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    /// Issued and still redeemable.
    Active,
    /// Closed; terminal, a redeemed session can never be reopened.
    Redeemed {
        /// The time the session was closed.
        closed_at: NaiveDateTime,
    },
}

/// An ephemeral scan session issued for one employee.
///
/// The token is opaque and unguessable (UUIDv4, 122 bits of entropy).
/// At most one active session exists per employee; the store's
/// uniqueness constraint is the authoritative guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrSession {
    /// The opaque scan token, globally unique.
    pub session_token: String,
    /// The employee this session was issued for.
    pub employee_id: String,
    /// The time the session was issued.
    pub opened_at: NaiveDateTime,
    /// Active or redeemed state of the session.
    #[serde(flatten)]
    pub state: SessionState,
}

impl QrSession {
    /// Returns true while the session can still be redeemed.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }
}
