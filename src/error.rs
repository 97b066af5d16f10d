//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating submissions,
//! managing payroll state and computing pay.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::SubmissionKind;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::NoPeriodFound {
///     date: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "no attendance period found for date 2025-06-16"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A submission date string could not be parsed as a calendar date.
    #[error("invalid date format: '{value}' (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The raw value that failed to parse.
        value: String,
    },

    /// Overtime hours were outside the allowed range.
    #[error("overtime hours must be greater than 0 and at most 3 per day, got {hours}")]
    InvalidHours {
        /// The rejected hours value.
        hours: Decimal,
    },

    /// A reimbursement amount was zero or negative.
    #[error("reimbursement amount must be greater than 0, got {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// A required field was missing or empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// An attendance period range had its start after its end.
    #[error("period start {start_date} is after period end {end_date}")]
    InvalidPeriodRange {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
    },

    /// An attendance submission fell on a weekend.
    #[error("cannot submit attendance for non-working day {date}")]
    NonWorkingDay {
        /// The rejected date.
        date: NaiveDate,
    },

    /// An attendance submission was dated after today.
    #[error("cannot submit attendance for future date {date}")]
    FutureDate {
        /// The rejected date.
        date: NaiveDate,
    },

    /// A second submission of the same kind existed for the same day.
    #[error("{kind} already submitted for {date}")]
    DuplicateSubmission {
        /// The kind of record that was duplicated.
        kind: SubmissionKind,
        /// The date of the duplicate.
        date: NaiveDate,
    },

    /// Overtime for the current day was submitted before the end of
    /// working hours.
    #[error("overtime for {date} can only be submitted after working hours")]
    OvertimeTooEarly {
        /// The date of the rejected submission.
        date: NaiveDate,
    },

    /// The payroll covering the target period has already been processed.
    #[error("payroll already processed for period {period_id}")]
    PayrollAlreadyProcessed {
        /// The frozen period.
        period_id: i64,
    },

    /// A new attendance period intersected an existing one.
    #[error("period {start_date}..{end_date} overlaps an existing attendance period")]
    OverlappingPeriod {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
    },

    /// A payroll row already existed for the target period.
    #[error("a payroll already exists for period {period_id}")]
    PayrollAlreadyExists {
        /// The period that already has a payroll.
        period_id: i64,
    },

    /// A payslip was requested for a payroll that has not been run yet.
    #[error("payroll {payroll_id} has not been processed yet")]
    PayrollNotProcessed {
        /// The pending payroll.
        payroll_id: i64,
    },

    /// No attendance period covered the submission date.
    #[error("no attendance period found for date {date}")]
    NoPeriodFound {
        /// The uncovered date.
        date: NaiveDate,
    },

    /// No attendance period existed with the given id.
    #[error("attendance period not found: {period_id}")]
    PeriodNotFound {
        /// The missing period id.
        period_id: i64,
    },

    /// No payroll existed with the given id.
    #[error("payroll not found: {payroll_id}")]
    PayrollNotFound {
        /// The missing payroll id.
        payroll_id: i64,
    },

    /// No employee (or salary row) existed for the given user id.
    #[error("employee not found: {user_id}")]
    EmployeeNotFound {
        /// The missing user id.
        user_id: i64,
    },

    /// An underlying storage read or write failed. Propagated upward
    /// unchanged so the boundary layer can decide on retry and logging.
    #[error("storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
