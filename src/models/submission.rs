//! Submission record models.
//!
//! Attendance, overtime and reimbursement rows as persisted per employee.
//! Each carries the attendance period it was resolved into at submission
//! time; the period id is never supplied by the caller.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a submission record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    /// A daily attendance record.
    Attendance,
    /// An overtime record.
    Overtime,
    /// A reimbursement claim.
    Reimbursement,
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionKind::Attendance => write!(f, "attendance"),
            SubmissionKind::Overtime => write!(f, "overtime"),
            SubmissionKind::Reimbursement => write!(f, "reimbursement"),
        }
    }
}

/// One attendance record. At most one exists per (user, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Unique identifier.
    pub id: i64,
    /// The employee that attended.
    pub user_id: i64,
    /// The period the date resolved into.
    pub period_id: i64,
    /// The attended day.
    pub date: NaiveDate,
    /// The user that created the record.
    pub created_by: i64,
    /// When the record was created.
    pub created_at: NaiveDateTime,
}

/// One overtime record. At most one exists per (user, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overtime {
    /// Unique identifier.
    pub id: i64,
    /// The employee that worked overtime.
    pub user_id: i64,
    /// The period the date resolved into.
    pub period_id: i64,
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked, capped at 3 per day.
    pub hours: Decimal,
    /// The user that created the record.
    pub created_by: i64,
    /// When the record was created.
    pub created_at: NaiveDateTime,
}

/// One reimbursement claim. No per-day uniqueness applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reimbursement {
    /// Unique identifier.
    pub id: i64,
    /// The employee claiming reimbursement.
    pub user_id: i64,
    /// The period the date resolved into.
    pub period_id: i64,
    /// The day the expense was incurred.
    pub date: NaiveDate,
    /// The claimed amount.
    pub amount: Decimal,
    /// What the expense was for.
    pub description: String,
    /// The user that created the record.
    pub created_by: i64,
    /// When the record was created.
    pub created_at: NaiveDateTime,
}
