//! In-memory store implementations.
//!
//! Backed by `RwLock`-guarded maps. Each uniqueness rule is checked and
//! applied under a single write lock, which gives these stores the same
//! atomicity the relational backend gets from its unique indexes.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    AttendanceRecord, AttendanceState, LedgerEntry, PayRateConfig, QrSession, SessionState,
};

use super::{
    AttendanceFilter, AttendanceStore, LedgerEntryStore, RateStore, SessionStore, StoreError,
    StoreResult,
};

/// In-memory attendance store keyed by `(employee_id, date)`.
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: RwLock<HashMap<(String, NaiveDate), AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn insert(&self, record: AttendanceRecord) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::poisoned())?;
        let key = (record.employee_id.clone(), record.date);
        if records.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }
        records.insert(key, record);
        Ok(())
    }

    async fn update_checkout(
        &self,
        id: Uuid,
        check_out_time: NaiveDateTime,
        total_hours: Decimal,
    ) -> StoreResult<Option<AttendanceRecord>> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::poisoned())?;
        let record = records
            .values_mut()
            .find(|r| r.id == id && r.is_open());
        Ok(record.map(|r| {
            r.state = AttendanceState::Closed {
                check_out_time,
                total_hours,
            };
            r.clone()
        }))
    }

    async fn find_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> StoreResult<Option<AttendanceRecord>> {
        let records = self.records.read().map_err(|_| StoreError::poisoned())?;
        Ok(records.get(&(employee_id.to_string(), date)).cloned())
    }

    async fn query(&self, filter: &AttendanceFilter) -> StoreResult<Vec<AttendanceRecord>> {
        let records = self.records.read().map_err(|_| StoreError::poisoned())?;
        let mut matched: Vec<AttendanceRecord> = records
            .values()
            .filter(|r| {
                filter
                    .employee_id
                    .as_ref()
                    .is_none_or(|id| &r.employee_id == id)
                    && filter.date_from.is_none_or(|from| r.date >= from)
                    && filter.date_to.is_none_or(|to| r.date <= to)
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.check_in_time.cmp(&a.check_in_time))
        });
        Ok(matched)
    }
}

/// In-memory QR session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<Vec<QrSession>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: QrSession) -> StoreResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| StoreError::poisoned())?;
        let conflict = sessions.iter().any(|s| {
            s.session_token == session.session_token
                || (s.is_active() && s.employee_id == session.employee_id)
        });
        if conflict {
            return Err(StoreError::Duplicate);
        }
        sessions.push(session);
        Ok(())
    }

    async fn find_active_by_token(&self, token: &str) -> StoreResult<Option<QrSession>> {
        let sessions = self.sessions.read().map_err(|_| StoreError::poisoned())?;
        Ok(sessions
            .iter()
            .find(|s| s.is_active() && s.session_token == token)
            .cloned())
    }

    async fn find_active_by_employee(&self, employee_id: &str) -> StoreResult<Option<QrSession>> {
        let sessions = self.sessions.read().map_err(|_| StoreError::poisoned())?;
        Ok(sessions
            .iter()
            .find(|s| s.is_active() && s.employee_id == employee_id)
            .cloned())
    }

    async fn close(
        &self,
        token: &str,
        closed_at: NaiveDateTime,
    ) -> StoreResult<Option<QrSession>> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| StoreError::poisoned())?;
        let session = sessions
            .iter_mut()
            .find(|s| s.is_active() && s.session_token == token);
        Ok(session.map(|s| {
            s.state = SessionState::Redeemed { closed_at };
            s.clone()
        }))
    }
}

/// In-memory rate configuration store.
#[derive(Debug, Default)]
pub struct InMemoryRateStore {
    configs: RwLock<HashMap<String, PayRateConfig>>,
}

impl InMemoryRateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateStore for InMemoryRateStore {
    async fn upsert(&self, config: PayRateConfig) -> StoreResult<()> {
        let mut configs = self
            .configs
            .write()
            .map_err(|_| StoreError::poisoned())?;
        configs.insert(config.employee_id.clone(), config);
        Ok(())
    }

    async fn get(&self, employee_id: &str) -> StoreResult<Option<PayRateConfig>> {
        let configs = self.configs.read().map_err(|_| StoreError::poisoned())?;
        Ok(configs.get(employee_id).cloned())
    }
}

/// In-memory advance/debt ledger.
#[derive(Debug, Default)]
pub struct InMemoryLedgerEntryStore {
    entries: RwLock<Vec<LedgerEntry>>,
}

impl InMemoryLedgerEntryStore {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry. Writing the ledger is a bookkeeping-surface
    /// concern; this inherent method exists for seeding and tests.
    pub fn record(&self, entry: LedgerEntry) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::poisoned())?;
        entries.push(entry);
        Ok(())
    }
}

#[async_trait]
impl LedgerEntryStore for InMemoryLedgerEntryStore {
    async fn list_unsettled(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> StoreResult<Vec<LedgerEntry>> {
        let entries = self.entries.read().map_err(|_| StoreError::poisoned())?;
        Ok(entries
            .iter()
            .filter(|e| {
                !e.settled && e.employee_id == employee_id && e.date >= from && e.date <= to
            })
            .cloned()
            .collect())
    }
}
