//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Handlers translate between the wire and the services; every rejection
//! is logged with a per-request correlation id.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::DEFAULT_PAGE_LIMIT;
use crate::error::EngineError;

use super::request::{
    CreatePayrollRequest, CreatePeriodRequest, PageQuery, RunPayrollRequest,
    SubmitAttendanceRequest, SubmitOvertimeRequest, SubmitReimbursementRequest, UserPageQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods", post(create_period).get(list_periods))
        .route("/payrolls", post(create_payroll).get(list_payrolls))
        .route("/payrolls/:payroll_id/run", post(run_payroll))
        .route("/payrolls/:payroll_id/summary", get(summarize_payroll))
        .route(
            "/payrolls/:payroll_id/payslips/:user_id",
            get(generate_payslip),
        )
        .route("/attendances", post(submit_attendance).get(list_attendance))
        .route("/overtimes", post(submit_overtime).get(list_overtime))
        .route(
            "/reimbursements",
            post(submit_reimbursement).get(list_reimbursements),
        )
        .with_state(state)
}

fn reject(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request rejected");
    ApiErrorResponse::from(error).into_response()
}

fn bad_json(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for POST /attendances.
async fn submit_attendance(
    State(state): State<AppState>,
    payload: Result<Json<SubmitAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_json(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        user_id = request.user_id,
        date = %request.date,
        "Processing attendance submission"
    );

    match state.submissions().submit_attendance(&request.into()) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => reject(correlation_id, error),
    }
}

/// Handler for GET /attendances.
async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<UserPageQuery>,
) -> Response {
    let result = state.submissions().list_attendance(
        query.user_id,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );
    match result {
        Ok(page) => Json(page).into_response(),
        Err(error) => reject(Uuid::new_v4(), error),
    }
}

/// Handler for POST /overtimes.
async fn submit_overtime(
    State(state): State<AppState>,
    payload: Result<Json<SubmitOvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_json(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        user_id = request.user_id,
        date = %request.date,
        hours = %request.hours,
        "Processing overtime submission"
    );

    match state.submissions().submit_overtime(&request.into()) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => reject(correlation_id, error),
    }
}

/// Handler for GET /overtimes.
async fn list_overtime(
    State(state): State<AppState>,
    Query(query): Query<UserPageQuery>,
) -> Response {
    let result = state.submissions().list_overtime(
        query.user_id,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );
    match result {
        Ok(page) => Json(page).into_response(),
        Err(error) => reject(Uuid::new_v4(), error),
    }
}

/// Handler for POST /reimbursements.
async fn submit_reimbursement(
    State(state): State<AppState>,
    payload: Result<Json<SubmitReimbursementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_json(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        user_id = request.user_id,
        date = %request.date,
        "Processing reimbursement submission"
    );

    match state.submissions().submit_reimbursement(&request.into()) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => reject(correlation_id, error),
    }
}

/// Handler for GET /reimbursements.
async fn list_reimbursements(
    State(state): State<AppState>,
    Query(query): Query<UserPageQuery>,
) -> Response {
    let result = state.submissions().list_reimbursements(
        query.user_id,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );
    match result {
        Ok(page) => Json(page).into_response(),
        Err(error) => reject(Uuid::new_v4(), error),
    }
}

/// Handler for POST /periods.
async fn create_period(
    State(state): State<AppState>,
    payload: Result<Json<CreatePeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_json(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Creating attendance period"
    );

    match state.payrolls().create_attendance_period(&request.into()) {
        Ok(period) => (StatusCode::CREATED, Json(period)).into_response(),
        Err(error) => reject(correlation_id, error),
    }
}

/// Handler for GET /periods.
async fn list_periods(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let result = state.payrolls().list_periods(
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );
    match result {
        Ok(page) => Json(page).into_response(),
        Err(error) => reject(Uuid::new_v4(), error),
    }
}

/// Handler for POST /payrolls.
async fn create_payroll(
    State(state): State<AppState>,
    payload: Result<Json<CreatePayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_json(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        period_id = request.period_id,
        "Creating payroll"
    );

    match state.payrolls().create_payroll(&request.into()) {
        Ok(payroll) => (StatusCode::CREATED, Json(payroll)).into_response(),
        Err(error) => reject(correlation_id, error),
    }
}

/// Handler for GET /payrolls.
async fn list_payrolls(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let result = state.payrolls().list_payrolls(
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );
    match result {
        Ok(page) => Json(page).into_response(),
        Err(error) => reject(Uuid::new_v4(), error),
    }
}

/// Handler for POST /payrolls/:payroll_id/run.
async fn run_payroll(
    State(state): State<AppState>,
    Path(payroll_id): Path<i64>,
    payload: Result<Json<RunPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return bad_json(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, payroll_id, "Running payroll");

    match state.payrolls().run_payroll(payroll_id, request.by) {
        Ok(payroll) => Json(payroll).into_response(),
        Err(error) => reject(correlation_id, error),
    }
}

/// Handler for GET /payrolls/:payroll_id/summary.
async fn summarize_payroll(
    State(state): State<AppState>,
    Path(payroll_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.payrolls().summarize_payroll(
        payroll_id,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );
    match result {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                payroll_id,
                employees = summary.employees.len(),
                total_take_home_pay = %summary.total_take_home_pay,
                "Payroll summarized"
            );
            Json(summary).into_response()
        }
        Err(error) => reject(correlation_id, error),
    }
}

/// Handler for GET /payrolls/:payroll_id/payslips/:user_id.
async fn generate_payslip(
    State(state): State<AppState>,
    Path((payroll_id, user_id)): Path<(i64, i64)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.payrolls().generate_payslip(user_id, payroll_id) {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                payroll_id,
                user_id,
                take_home_pay = %payslip.take_home_pay,
                "Payslip generated"
            );
            Json(payslip).into_response()
        }
        Err(error) => reject(correlation_id, error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(Arc::new(MemoryStore::new())))
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_period_returns_201() {
        let router = create_test_router();
        let body = r#"{"start_date": "2025-06-01", "end_date": "2025-06-30", "by": 1}"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/periods")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = response_json(response).await;
        assert_eq!(json["start_date"], "2025-06-01");
        assert_eq!(json["id"], 1);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/attendances")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_test_router();
        // No `date` field.
        let body = r#"{"user_id": 42, "by": 42}"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/attendances")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_submission_outside_period_returns_404() {
        let router = create_test_router();
        let body = r#"{"user_id": 42, "date": "2025-06-16", "by": 42}"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/attendances")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["code"], "NO_PERIOD_FOUND");
    }

    #[tokio::test]
    async fn test_payslip_for_missing_payroll_returns_404() {
        let router = create_test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/payrolls/9/payslips/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["code"], "PAYROLL_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_attendance_returns_empty_page() {
        let router = create_test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/attendances?user_id=42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["total_record"], 0);
        assert_eq!(json["data"].as_array().unwrap().len(), 0);
    }
}
