//! Engine settings type and YAML loader.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Deployment-level engine settings.
///
/// Every field has a default, so a missing or partial file degrades to
/// the built-in values (8-hour daily threshold and 14 leave days per
/// month, matching the historical column defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Daily hours threshold used when a rate upsert omits one.
    #[serde(default = "default_daily_hours_threshold")]
    pub default_daily_hours_threshold: Decimal,
    /// Monthly leave allowance used when a rate upsert omits one.
    #[serde(default = "default_monthly_leave_allowance")]
    pub default_monthly_leave_allowance: u32,
    /// TCP port the server binary listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

fn default_daily_hours_threshold() -> Decimal {
    Decimal::new(8, 0)
}

fn default_monthly_leave_allowance() -> u32 {
    14
}

fn default_listen_port() -> u16 {
    5001
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_daily_hours_threshold: default_daily_hours_threshold(),
            default_monthly_leave_allowance: default_monthly_leave_allowance(),
            listen_port: default_listen_port(),
        }
    }
}

impl EngineSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing
    /// and [`EngineError::ConfigParseError`] when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
