//! Comprehensive integration tests for the time clock engine.
//!
//! This test suite covers the full API surface:
//! - Check-in / check-out state machine
//! - QR session issue and redemption
//! - Session expiry at the day boundary
//! - Rate configuration
//! - Monthly payroll with overtime, advances and debts
//! - Error cases

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use timeclock_engine::api::{create_router, AppState};
use timeclock_engine::clock::FixedClock;
use timeclock_engine::config::EngineSettings;
use timeclock_engine::models::{EntryKind, LedgerEntry};
use timeclock_engine::services::{
    AttendanceLedger, PayrollCalculator, QrSessionManager, RateConfigService,
};
use timeclock_engine::store::{
    InMemoryAttendanceStore, InMemoryLedgerEntryStore, InMemoryRateStore, InMemorySessionStore,
};
use timeclock_engine::token::{SvgQrEncoder, UuidTokenGenerator};

// =============================================================================
// Test Helpers
// =============================================================================

struct TestHarness {
    router: Router,
    clock: Arc<FixedClock>,
    ledger_entries: Arc<InMemoryLedgerEntryStore>,
}

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn make_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn create_harness(start: &str) -> TestHarness {
    let clock = Arc::new(FixedClock::new(make_datetime(start)));
    let attendance = Arc::new(InMemoryAttendanceStore::new());
    let rates = Arc::new(InMemoryRateStore::new());
    let ledger_entries = Arc::new(InMemoryLedgerEntryStore::new());

    let ledger = AttendanceLedger::new(attendance.clone(), clock.clone());
    let sessions = QrSessionManager::new(
        Arc::new(InMemorySessionStore::new()),
        ledger.clone(),
        Arc::new(UuidTokenGenerator),
        clock.clone(),
    );
    let payroll = PayrollCalculator::new(attendance, rates.clone(), ledger_entries.clone());
    let rates = RateConfigService::new(rates, EngineSettings::default());

    let state = AppState::new(ledger, sessions, payroll, rates, Arc::new(SvgQrEncoder));
    TestHarness {
        router: create_router(state),
        clock,
        ledger_entries,
    }
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn check_in(harness: &TestHarness, employee_id: &str) -> (StatusCode, Value) {
    send(
        harness.router.clone(),
        "POST",
        "/attendance/check-in",
        Some(json!({ "employee_id": employee_id })),
    )
    .await
}

async fn check_out(harness: &TestHarness, employee_id: &str) -> (StatusCode, Value) {
    send(
        harness.router.clone(),
        "POST",
        "/attendance/check-out",
        Some(json!({ "employee_id": employee_id })),
    )
    .await
}

async fn issue_session(harness: &TestHarness, employee_id: &str) -> (StatusCode, Value) {
    send(
        harness.router.clone(),
        "POST",
        "/qr/issue",
        Some(json!({ "employee_id": employee_id })),
    )
    .await
}

async fn redeem(harness: &TestHarness, token: &str) -> (StatusCode, Value) {
    send(
        harness.router.clone(),
        "POST",
        "/qr/redeem",
        Some(json!({ "session_token": token })),
    )
    .await
}

async fn put_rates(harness: &TestHarness, employee_id: &str, body: Value) -> (StatusCode, Value) {
    send(
        harness.router.clone(),
        "PUT",
        &format!("/rates/{employee_id}"),
        Some(body),
    )
    .await
}

/// Drives one complete working day for the employee through the API.
async fn work_day(harness: &TestHarness, employee_id: &str, date: &str, in_t: &str, out_t: &str) {
    harness.clock.set(make_datetime(&format!("{date} {in_t}")));
    let (status, _) = check_in(harness, employee_id).await;
    assert_eq!(status, StatusCode::OK);

    harness.clock.set(make_datetime(&format!("{date} {out_t}")));
    let (status, _) = check_out(harness, employee_id).await;
    assert_eq!(status, StatusCode::OK);
}

fn unsettled_entry(employee_id: &str, kind: EntryKind, amount: &str, date: &str) -> LedgerEntry {
    LedgerEntry {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        kind,
        amount: amount.parse().unwrap(),
        description: "test entry".to_string(),
        date: make_date(date),
        settled: false,
    }
}

// =============================================================================
// SECTION 1: Check-in / Check-out
// =============================================================================

#[tokio::test]
async fn test_full_day_records_eight_and_a_half_hours() {
    let harness = create_harness("2026-03-02 09:00:00");

    let (status, record) = check_in(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["status"], "open");
    assert_eq!(record["date"], "2026-03-02");

    harness.clock.set(make_datetime("2026-03-02 17:30:00"));
    let (status, record) = check_out(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["status"], "closed");
    assert_eq!(record["total_hours"], "8.5");
}

#[tokio::test]
async fn test_duplicate_check_in_rejected() {
    let harness = create_harness("2026-03-02 09:00:00");
    check_in(&harness, "emp_001").await;

    let (status, error) = check_in(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "DUPLICATE_CHECK_IN");
}

#[tokio::test]
async fn test_check_out_without_open_record_rejected() {
    let harness = create_harness("2026-03-02 09:00:00");

    let (status, error) = check_out(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "NO_OPEN_CHECK_IN");
}

#[tokio::test]
async fn test_second_check_out_rejected() {
    let harness = create_harness("2026-03-02 09:00:00");
    work_day(&harness, "emp_001", "2026-03-02", "09:00:00", "17:00:00").await;

    let (status, error) = check_out(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "ALREADY_CHECKED_OUT");
}

#[tokio::test]
async fn test_new_day_allows_fresh_check_in() {
    let harness = create_harness("2026-03-02 09:00:00");
    work_day(&harness, "emp_001", "2026-03-02", "09:00:00", "17:00:00").await;

    harness.clock.set(make_datetime("2026-03-03 09:00:00"));
    let (status, record) = check_in(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["date"], "2026-03-03");
}

#[tokio::test]
async fn test_independent_employees_do_not_interfere() {
    let harness = create_harness("2026-03-02 09:00:00");
    check_in(&harness, "emp_001").await;

    let (status, _) = check_in(&harness, "emp_002").await;
    assert_eq!(status, StatusCode::OK);

    harness.clock.set(make_datetime("2026-03-02 17:00:00"));
    let (status, _) = check_out(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = check_out(&harness, "emp_002").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// SECTION 2: Listing and Stats
// =============================================================================

#[tokio::test]
async fn test_list_orders_most_recent_first() {
    let harness = create_harness("2026-03-02 09:00:00");
    work_day(&harness, "emp_001", "2026-03-02", "09:00:00", "17:00:00").await;
    work_day(&harness, "emp_001", "2026-03-03", "09:00:00", "17:00:00").await;
    work_day(&harness, "emp_001", "2026-03-04", "09:00:00", "17:00:00").await;

    let (status, records) = send(harness.router.clone(), "GET", "/attendance", None).await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2026-03-04", "2026-03-03", "2026-03-02"]);
}

#[tokio::test]
async fn test_list_filters_by_employee_and_date_range() {
    let harness = create_harness("2026-03-02 09:00:00");
    work_day(&harness, "emp_001", "2026-03-02", "09:00:00", "17:00:00").await;
    work_day(&harness, "emp_002", "2026-03-02", "10:00:00", "18:00:00").await;
    work_day(&harness, "emp_001", "2026-03-05", "09:00:00", "17:00:00").await;

    let (status, records) = send(
        harness.router.clone(),
        "GET",
        "/attendance?employee_id=emp_001&date_from=2026-03-01&date_to=2026-03-03",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["employee_id"], "emp_001");
    assert_eq!(records[0]["date"], "2026-03-02");
}

#[tokio::test]
async fn test_stats_counts_open_and_completed() {
    let harness = create_harness("2026-03-02 09:00:00");
    work_day(&harness, "emp_001", "2026-03-02", "09:00:00", "17:00:00").await;
    harness.clock.set(make_datetime("2026-03-02 10:00:00"));
    check_in(&harness, "emp_002").await;

    let (status, stats) = send(
        harness.router.clone(),
        "GET",
        "/attendance/stats?date=2026-03-02",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["checked_in"], 2);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["total_hours"], "8");
}

// =============================================================================
// SECTION 3: QR Sessions
// =============================================================================

#[tokio::test]
async fn test_issue_renders_svg_qr() {
    let harness = create_harness("2026-03-02 08:55:00");

    let (status, body) = issue_session(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], "emp_001");
    assert!(body["qr_svg"].as_str().unwrap().contains("<svg"));
}

#[tokio::test]
async fn test_issue_while_active_session_exists_rejected() {
    let harness = create_harness("2026-03-02 08:55:00");
    issue_session(&harness, "emp_001").await;

    let (status, error) = issue_session(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "SESSION_ALREADY_ACTIVE");
}

#[tokio::test]
async fn test_session_covers_check_in_and_check_out() {
    let harness = create_harness("2026-03-02 09:00:00");
    let (_, issued) = issue_session(&harness, "emp_001").await;
    let token = issued["session_token"].as_str().unwrap().to_string();

    let (status, first) = redeem(&harness, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["action"], "check_in");
    assert_eq!(first["record"]["status"], "open");

    harness.clock.set(make_datetime("2026-03-02 17:00:00"));
    let (status, second) = redeem(&harness, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["action"], "check_out");
    assert_eq!(second["record"]["total_hours"], "8");

    // Third scan finds no active session
    let (status, error) = redeem(&harness, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_unknown_token_rejected() {
    let harness = create_harness("2026-03-02 09:00:00");

    let (status, error) = redeem(&harness, "not-a-real-token").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_scan_when_day_already_complete_rejected() {
    let harness = create_harness("2026-03-02 09:00:00");
    let (_, issued) = issue_session(&harness, "emp_001").await;
    let token = issued["session_token"].as_str().unwrap().to_string();
    redeem(&harness, &token).await;

    // Checked out manually, outside the QR flow
    harness.clock.set(make_datetime("2026-03-02 17:00:00"));
    check_out(&harness, "emp_001").await;

    let (status, error) = redeem(&harness, &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "ALREADY_CHECKED_OUT_TODAY");
}

#[tokio::test]
async fn test_session_from_previous_day_expires() {
    let harness = create_harness("2026-03-02 23:50:00");
    let (_, issued) = issue_session(&harness, "emp_001").await;
    let token = issued["session_token"].as_str().unwrap().to_string();
    redeem(&harness, &token).await;

    harness.clock.set(make_datetime("2026-03-03 00:10:00"));
    let (status, error) = redeem(&harness, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "INVALID_TOKEN");

    // The expired session was closed, so a fresh one can be issued
    let (status, _) = issue_session(&harness, "emp_001").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// SECTION 4: Rate Configuration
// =============================================================================

#[tokio::test]
async fn test_rate_upsert_applies_engine_defaults() {
    let harness = create_harness("2026-03-02 09:00:00");

    let (status, config) = put_rates(
        &harness,
        "emp_001",
        json!({ "hourly_rate": "100", "overtime_hourly_rate": "150" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["daily_hours_threshold"], "8");
    assert_eq!(config["monthly_leave_allowance"], 14);
}

#[tokio::test]
async fn test_rate_get_returns_stored_config() {
    let harness = create_harness("2026-03-02 09:00:00");
    put_rates(
        &harness,
        "emp_001",
        json!({
            "hourly_rate": "100",
            "overtime_hourly_rate": "150",
            "daily_hours_threshold": "7.5"
        }),
    )
    .await;

    let (status, config) = send(harness.router.clone(), "GET", "/rates/emp_001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["hourly_rate"], "100");
    assert_eq!(config["daily_hours_threshold"], "7.5");
}

#[tokio::test]
async fn test_rate_get_without_config_returns_404() {
    let harness = create_harness("2026-03-02 09:00:00");

    let (status, error) = send(harness.router.clone(), "GET", "/rates/emp_001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "RATE_CONFIG_MISSING");
}

// =============================================================================
// SECTION 5: Monthly Payroll
// =============================================================================

#[tokio::test]
async fn test_payroll_splits_overtime_and_nets_deductions() {
    let harness = create_harness("2026-03-02 09:00:00");
    put_rates(
        &harness,
        "emp_001",
        json!({ "hourly_rate": "100", "overtime_hourly_rate": "150" }),
    )
    .await;

    // Three days: 6h, 8h, 10h
    work_day(&harness, "emp_001", "2026-03-02", "09:00:00", "15:00:00").await;
    work_day(&harness, "emp_001", "2026-03-03", "09:00:00", "17:00:00").await;
    work_day(&harness, "emp_001", "2026-03-04", "08:00:00", "18:00:00").await;

    harness
        .ledger_entries
        .record(unsettled_entry(
            "emp_001",
            EntryKind::Advance,
            "200",
            "2026-03-10",
        ))
        .unwrap();
    harness
        .ledger_entries
        .record(unsettled_entry(
            "emp_001",
            EntryKind::Debt,
            "50",
            "2026-03-12",
        ))
        .unwrap();

    let (status, statement) = send(
        harness.router.clone(),
        "GET",
        "/payroll/emp_001/2026/3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(statement["worked_days"], 3);
    assert_eq!(statement["total_hours"], "24.00");
    assert_eq!(statement["regular_hours"], "22.00");
    assert_eq!(statement["overtime_hours"], "2.00");
    assert_eq!(statement["regular_pay"], "2200.00");
    assert_eq!(statement["overtime_pay"], "300.00");
    assert_eq!(statement["gross_pay"], "2500.00");
    assert_eq!(statement["advance_total"], "200.00");
    assert_eq!(statement["debt_total"], "50.00");
    assert_eq!(statement["net_pay"], "2350.00");
}

#[tokio::test]
async fn test_payroll_ignores_open_record() {
    let harness = create_harness("2026-03-02 09:00:00");
    put_rates(
        &harness,
        "emp_001",
        json!({ "hourly_rate": "100", "overtime_hourly_rate": "150" }),
    )
    .await;
    work_day(&harness, "emp_001", "2026-03-02", "09:00:00", "17:00:00").await;

    // Checked in on the 3rd, never out
    harness.clock.set(make_datetime("2026-03-03 09:00:00"));
    check_in(&harness, "emp_001").await;

    let (status, statement) = send(
        harness.router.clone(),
        "GET",
        "/payroll/emp_001/2026/3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(statement["worked_days"], 1);
    assert_eq!(statement["total_hours"], "8.00");
}

#[tokio::test]
async fn test_payroll_without_rate_config_returns_404() {
    let harness = create_harness("2026-03-02 09:00:00");

    let (status, error) = send(
        harness.router.clone(),
        "GET",
        "/payroll/emp_001/2026/3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "RATE_CONFIG_MISSING");
}

#[tokio::test]
async fn test_payroll_with_invalid_month_returns_400() {
    let harness = create_harness("2026-03-02 09:00:00");
    put_rates(
        &harness,
        "emp_001",
        json!({ "hourly_rate": "100", "overtime_hourly_rate": "150" }),
    )
    .await;

    let (status, error) = send(
        harness.router.clone(),
        "GET",
        "/payroll/emp_001/2026/0",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PERIOD");
}
