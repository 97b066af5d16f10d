//! Response types for the Payroll Engine API.
//!
//! This module defines the error response structure and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::InvalidDateFormat { .. } => (StatusCode::BAD_REQUEST, "INVALID_DATE_FORMAT"),
            EngineError::InvalidHours { .. } => (StatusCode::BAD_REQUEST, "INVALID_HOURS"),
            EngineError::InvalidAmount { .. } => (StatusCode::BAD_REQUEST, "INVALID_AMOUNT"),
            EngineError::MissingField { .. } => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            EngineError::InvalidPeriodRange { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_PERIOD_RANGE")
            }
            EngineError::NonWorkingDay { .. } => (StatusCode::BAD_REQUEST, "NON_WORKING_DAY"),
            EngineError::FutureDate { .. } => (StatusCode::BAD_REQUEST, "FUTURE_DATE"),
            EngineError::DuplicateSubmission { .. } => {
                (StatusCode::BAD_REQUEST, "DUPLICATE_SUBMISSION")
            }
            EngineError::OvertimeTooEarly { .. } => (StatusCode::BAD_REQUEST, "OVERTIME_TOO_EARLY"),
            EngineError::PayrollAlreadyProcessed { .. } => {
                (StatusCode::CONFLICT, "PAYROLL_ALREADY_PROCESSED")
            }
            EngineError::OverlappingPeriod { .. } => (StatusCode::CONFLICT, "OVERLAPPING_PERIOD"),
            EngineError::PayrollAlreadyExists { .. } => {
                (StatusCode::CONFLICT, "PAYROLL_ALREADY_EXISTS")
            }
            EngineError::PayrollNotProcessed { .. } => {
                (StatusCode::CONFLICT, "PAYROLL_NOT_PROCESSED")
            }
            EngineError::NoPeriodFound { .. } => (StatusCode::NOT_FOUND, "NO_PERIOD_FOUND"),
            EngineError::PeriodNotFound { .. } => (StatusCode::NOT_FOUND, "PERIOD_NOT_FOUND"),
            EngineError::PayrollNotFound { .. } => (StatusCode::NOT_FOUND, "PAYROLL_NOT_FOUND"),
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
