//! Request types for the Payroll Engine API.
//!
//! JSON bodies and query parameters as received on the wire. Dates travel
//! as `YYYY-MM-DD` strings and are parsed by the engine, which owns the
//! format error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::service::{
    AttendanceSubmission, OvertimeSubmission, PayrollRequest, PeriodRequest,
    ReimbursementSubmission,
};

/// Body for `POST /attendances`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAttendanceRequest {
    /// The attending employee.
    pub user_id: i64,
    /// The attended day, `YYYY-MM-DD`.
    pub date: String,
    /// The authenticated user making the submission.
    pub by: i64,
}

impl From<SubmitAttendanceRequest> for AttendanceSubmission {
    fn from(request: SubmitAttendanceRequest) -> Self {
        Self {
            user_id: request.user_id,
            date: request.date,
            submitted_by: request.by,
        }
    }
}

/// Body for `POST /overtimes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOvertimeRequest {
    /// The employee that worked overtime.
    pub user_id: i64,
    /// The day the overtime was worked, `YYYY-MM-DD`.
    pub date: String,
    /// Hours worked.
    pub hours: Decimal,
    /// The authenticated user making the submission.
    pub by: i64,
}

impl From<SubmitOvertimeRequest> for OvertimeSubmission {
    fn from(request: SubmitOvertimeRequest) -> Self {
        Self {
            user_id: request.user_id,
            date: request.date,
            hours: request.hours,
            submitted_by: request.by,
        }
    }
}

/// Body for `POST /reimbursements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReimbursementRequest {
    /// The employee claiming reimbursement.
    pub user_id: i64,
    /// The day the expense was incurred, `YYYY-MM-DD`.
    pub date: String,
    /// The claimed amount.
    pub amount: Decimal,
    /// What the expense was for.
    pub description: String,
    /// The authenticated user making the submission.
    pub by: i64,
}

impl From<SubmitReimbursementRequest> for ReimbursementSubmission {
    fn from(request: SubmitReimbursementRequest) -> Self {
        Self {
            user_id: request.user_id,
            date: request.date,
            amount: request.amount,
            description: request.description,
            submitted_by: request.by,
        }
    }
}

/// Body for `POST /periods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodRequest {
    /// First day of the period, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day of the period, `YYYY-MM-DD`.
    pub end_date: String,
    /// The authenticated user creating the period.
    pub by: i64,
}

impl From<CreatePeriodRequest> for PeriodRequest {
    fn from(request: CreatePeriodRequest) -> Self {
        Self {
            start_date: request.start_date,
            end_date: request.end_date,
            created_by: request.by,
        }
    }
}

/// Body for `POST /payrolls`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayrollRequest {
    /// The period the payroll covers.
    pub period_id: i64,
    /// The authenticated user creating the payroll.
    pub by: i64,
}

impl From<CreatePayrollRequest> for PayrollRequest {
    fn from(request: CreatePayrollRequest) -> Self {
        Self {
            period_id: request.period_id,
            created_by: request.by,
        }
    }
}

/// Body for `POST /payrolls/:id/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPayrollRequest {
    /// The authenticated user running the payroll.
    pub by: i64,
}

/// Query parameters for paginated listings.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// 1-based page number; defaults to 1.
    pub page: Option<i64>,
    /// Page size; defaults to 20.
    pub limit: Option<i64>,
}

/// Query parameters for per-user paginated listings.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPageQuery {
    /// The user whose records to list.
    pub user_id: i64,
    /// 1-based page number; defaults to 1.
    pub page: Option<i64>,
    /// Page size; defaults to 20.
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_request_maps_to_submission() {
        let request = SubmitAttendanceRequest {
            user_id: 42,
            date: "2025-06-16".to_string(),
            by: 42,
        };
        let submission: AttendanceSubmission = request.into();
        assert_eq!(submission.user_id, 42);
        assert_eq!(submission.date, "2025-06-16");
        assert_eq!(submission.submitted_by, 42);
    }

    #[test]
    fn test_page_query_fields_are_optional() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert!(query.page.is_none());
        assert!(query.limit.is_none());
    }
}
