//! Pay rate configuration management.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EngineSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::PayRateConfig;
use crate::store::RateStore;

/// An incoming rate configuration update. Threshold and leave allowance
/// fall back to the engine defaults when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfigUpdate {
    /// Pay per regular hour.
    pub hourly_rate: Decimal,
    /// Pay per overtime hour.
    pub overtime_hourly_rate: Decimal,
    /// Daily hours above which time counts as overtime.
    #[serde(default)]
    pub daily_hours_threshold: Option<Decimal>,
    /// Paid leave days allowed per month.
    #[serde(default)]
    pub monthly_leave_allowance: Option<u32>,
}

/// Manages per-employee pay rate configurations.
#[derive(Clone)]
pub struct RateConfigService {
    store: Arc<dyn RateStore>,
    settings: EngineSettings,
}

impl RateConfigService {
    /// Creates a service over the given store and engine defaults.
    pub fn new(store: Arc<dyn RateStore>, settings: EngineSettings) -> Self {
        Self { store, settings }
    }

    /// Creates or replaces an employee's rate configuration.
    pub async fn upsert(
        &self,
        employee_id: &str,
        update: RateConfigUpdate,
    ) -> EngineResult<PayRateConfig> {
        let config = PayRateConfig {
            employee_id: employee_id.to_string(),
            hourly_rate: update.hourly_rate,
            overtime_hourly_rate: update.overtime_hourly_rate,
            daily_hours_threshold: update
                .daily_hours_threshold
                .unwrap_or(self.settings.default_daily_hours_threshold),
            monthly_leave_allowance: update
                .monthly_leave_allowance
                .unwrap_or(self.settings.default_monthly_leave_allowance),
        };
        self.store.upsert(config.clone()).await?;
        info!(employee_id, hourly_rate = %config.hourly_rate, "stored rate config");
        Ok(config)
    }

    /// Fetches an employee's rate configuration.
    ///
    /// # Errors
    ///
    /// [`EngineError::RateConfigMissing`] when none has been stored.
    pub async fn get(&self, employee_id: &str) -> EngineResult<PayRateConfig> {
        self.store
            .get(employee_id)
            .await?
            .ok_or_else(|| EngineError::RateConfigMissing {
                employee_id: employee_id.to_string(),
            })
    }
}
