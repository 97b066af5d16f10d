//! Derived payslip and summary views.
//!
//! These types are computed on read and never persisted. All monetary
//! fields are already rounded to 2 decimal places; displayed overtime
//! hours are rounded to whole hours.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One employee's computed pay for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayslip {
    /// The payroll this payslip belongs to.
    pub payroll_id: i64,
    /// The employee's user id.
    pub user_id: i64,
    /// The employee's display name.
    pub full_name: String,
    /// The employee's base salary for the period.
    pub base_salary: Decimal,
    /// Distinct attendance days counted in the period.
    pub attendance_days: i64,
    /// Prorated attendance pay: `base_salary / 20 * attendance_days`.
    pub attendance_pay: Decimal,
    /// Total overtime hours, rounded to whole hours for display.
    pub overtime_hours: Decimal,
    /// Overtime pay: `hours * (base_salary / 160) * 2`.
    pub overtime_pay: Decimal,
    /// Total reimbursed amount.
    pub reimbursements: Decimal,
    /// Final payout: attendance pay + overtime pay + reimbursements.
    pub take_home_pay: Decimal,
}

/// The date range of a period, as embedded in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInfo {
    /// Start of the period (inclusive).
    pub start_date: NaiveDate,
    /// End of the period (inclusive).
    pub end_date: NaiveDate,
}

/// A period-wide payroll summary: one page of employee payslips plus the
/// take-home total across that page.
///
/// `total_take_home_pay` sums the returned page only, not every eligible
/// employee of the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The summarized payroll.
    pub payroll_id: i64,
    /// The covered period's date range.
    pub period: PeriodInfo,
    /// The requested page of employee payslips, ordered by user id.
    pub employees: Vec<EmployeePayslip>,
    /// Sum of take-home pay across the returned page.
    pub total_take_home_pay: Decimal,
    /// Count of all eligible employees in the period.
    pub total_record: i64,
    /// The returned page number (1-based).
    pub page: i64,
    /// The page size used.
    pub limit: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

/// A generic page envelope for list-returning operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The records on this page.
    pub data: Vec<T>,
    /// Count of all matching records.
    pub total_record: i64,
    /// The returned page number (1-based).
    pub page: i64,
    /// The page size used.
    pub limit: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Builds an empty page for a known total, used when the requested
    /// page lies beyond the data.
    pub fn empty(total_record: i64, page: i64, limit: i64, total_pages: i64) -> Self {
        Self {
            data: Vec::new(),
            total_record,
            page,
            limit,
            total_pages,
        }
    }
}
