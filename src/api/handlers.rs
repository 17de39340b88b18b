//! HTTP request handlers for the time clock engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AttendanceRecord, PayRateConfig, PayrollStatement};
use crate::services::{DailyStats, RateConfigUpdate, Redemption};

use super::request::{AttendanceQuery, EmployeeRequest, RedeemRequest, StatsQuery};
use super::response::{ApiError, ApiErrorResponse, IssuedSessionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/check-in", post(check_in_handler))
        .route("/attendance/check-out", post(check_out_handler))
        .route("/attendance", get(list_attendance_handler))
        .route("/attendance/stats", get(daily_stats_handler))
        .route("/qr/issue", post(issue_session_handler))
        .route("/qr/redeem", post(redeem_session_handler))
        .route(
            "/rates/:employee_id",
            put(upsert_rate_handler).get(get_rate_handler),
        )
        .route(
            "/payroll/:employee_id/:year/:month",
            get(payroll_handler),
        )
        .with_state(state)
}

/// Converts a JSON extraction rejection into a 400 error body.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

/// Logs a failed operation and converts the error into a response.
fn engine_error(err: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for POST /attendance/check-in.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<AttendanceRecord>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(r, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Processing check-in request"
    );

    let record = state
        .ledger
        .check_in(&request.employee_id)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(record))
}

/// Handler for POST /attendance/check-out.
async fn check_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<AttendanceRecord>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(r, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Processing check-out request"
    );

    let record = state
        .ledger
        .check_out(&request.employee_id)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(record))
}

/// Handler for GET /attendance.
async fn list_attendance_handler(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<Vec<AttendanceRecord>>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let records = state
        .ledger
        .list_records(&query.into())
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(records))
}

/// Handler for GET /attendance/stats.
async fn daily_stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<DailyStats>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let date = query.date.unwrap_or_else(|| state.ledger.today());
    let stats = state
        .ledger
        .daily_stats(date)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(stats))
}

/// Handler for POST /qr/issue.
async fn issue_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<IssuedSessionResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(r, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Processing QR session issue request"
    );

    let session = state
        .sessions
        .issue(&request.employee_id)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    let qr_svg = state
        .qr_encoder
        .encode(&session.session_token)
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(IssuedSessionResponse {
        session_token: session.session_token,
        employee_id: session.employee_id,
        qr_svg,
    }))
}

/// Handler for POST /qr/redeem.
async fn redeem_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<RedeemRequest>, JsonRejection>,
) -> Result<Json<Redemption>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(r, correlation_id))?;
    info!(correlation_id = %correlation_id, "Processing QR redemption request");

    let redemption = state
        .sessions
        .redeem(&request.session_token)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(redemption))
}

/// Handler for PUT /rates/:employee_id.
async fn upsert_rate_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<RateConfigUpdate>, JsonRejection>,
) -> Result<Json<PayRateConfig>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(update) = payload.map_err(|r| rejection_response(r, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing rate config update"
    );

    let config = state
        .rates
        .upsert(&employee_id, update)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(config))
}

/// Handler for GET /rates/:employee_id.
async fn get_rate_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<PayRateConfig>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let config = state
        .rates
        .get(&employee_id)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(config))
}

/// Handler for GET /payroll/:employee_id/:year/:month.
async fn payroll_handler(
    State(state): State<AppState>,
    Path((employee_id, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<PayrollStatement>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        year,
        month,
        "Processing payroll request"
    );

    let statement = state
        .payroll
        .compute_monthly_payroll(&employee_id, year, month)
        .await
        .map_err(|err| engine_error(err, correlation_id))?;
    Ok(Json(statement))
}
