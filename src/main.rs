//! Time clock engine server binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timeclock_engine::api::{create_router, AppState};
use timeclock_engine::clock::SystemClock;
use timeclock_engine::config::EngineSettings;
use timeclock_engine::error::EngineError;
use timeclock_engine::services::{
    AttendanceLedger, PayrollCalculator, QrSessionManager, RateConfigService,
};
use timeclock_engine::store::{
    InMemoryAttendanceStore, InMemoryLedgerEntryStore, InMemoryRateStore, InMemorySessionStore,
};
use timeclock_engine::token::{SvgQrEncoder, UuidTokenGenerator};

const SETTINGS_PATH: &str = "./config/engine.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,timeclock_engine=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = match EngineSettings::load(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "Settings file not found, using defaults");
            EngineSettings::default()
        }
        Err(err) => return Err(err.into()),
    };

    let clock = Arc::new(SystemClock);
    let attendance = Arc::new(InMemoryAttendanceStore::new());
    let rates = Arc::new(InMemoryRateStore::new());

    let ledger = AttendanceLedger::new(attendance.clone(), clock.clone());
    let sessions = QrSessionManager::new(
        Arc::new(InMemorySessionStore::new()),
        ledger.clone(),
        Arc::new(UuidTokenGenerator),
        clock,
    );
    let payroll = PayrollCalculator::new(
        attendance,
        rates.clone(),
        Arc::new(InMemoryLedgerEntryStore::new()),
    );
    let rates = RateConfigService::new(rates, settings.clone());

    let state = AppState::new(ledger, sessions, payroll, rates, Arc::new(SvgQrEncoder));
    let router = create_router(state);

    let addr = format!("0.0.0.0:{}", settings.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Time clock engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
