//! Employee reference data.
//!
//! The engine reads employee names and salaries; it never writes them.
//! `base_salary` is the employee's current salary amount, with salary
//! versioning resolved by the persistence layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only employee data used for pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// The employee's display name.
    pub full_name: String,
    /// The employee's current base salary for one period.
    pub base_salary: Decimal,
}

/// Per-employee activity aggregates for one attendance period, as returned
/// by the eligible-employee listing.
///
/// An employee appears here only if they have at least one attendance,
/// overtime or reimbursement record in the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeActivity {
    /// The employee's user id.
    pub user_id: i64,
    /// The employee's display name.
    pub full_name: String,
    /// The employee's current base salary.
    pub base_salary: Decimal,
    /// Distinct attendance days in the period.
    pub attendance_days: i64,
    /// Total overtime hours in the period.
    pub overtime_hours: Decimal,
    /// Total reimbursement amount in the period.
    pub reimbursements: Decimal,
}
