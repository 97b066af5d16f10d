//! Storage capability traits.
//!
//! The engine consumes persistence through narrow, per-concern interfaces
//! so implementations are swappable and mockable. All methods are
//! synchronous; the engine has no suspension points of its own. Backend
//! failures surface as [`crate::error::EngineError::Storage`] and pass
//! through the services unchanged.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    Attendance, AttendancePeriod, EmployeeActivity, EmployeeProfile, Overtime, Payroll,
    Reimbursement,
};

/// An attendance period to insert; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewPeriod {
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// The user creating the period.
    pub created_by: i64,
}

/// A payroll to insert; created in pending state.
#[derive(Debug, Clone)]
pub struct NewPayroll {
    /// The period the payroll covers.
    pub period_id: i64,
    /// The user creating the payroll.
    pub created_by: i64,
}

/// An attendance record to insert.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    /// The attending employee.
    pub user_id: i64,
    /// The period resolved at submission time.
    pub period_id: i64,
    /// The attended day.
    pub date: NaiveDate,
    /// The user creating the record.
    pub created_by: i64,
}

/// An overtime record to insert.
#[derive(Debug, Clone)]
pub struct NewOvertime {
    /// The employee that worked overtime.
    pub user_id: i64,
    /// The period resolved at submission time.
    pub period_id: i64,
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked.
    pub hours: Decimal,
    /// The user creating the record.
    pub created_by: i64,
}

/// A reimbursement record to insert.
#[derive(Debug, Clone)]
pub struct NewReimbursement {
    /// The employee claiming reimbursement.
    pub user_id: i64,
    /// The period resolved at submission time.
    pub period_id: i64,
    /// The day the expense was incurred.
    pub date: NaiveDate,
    /// The claimed amount.
    pub amount: Decimal,
    /// What the expense was for.
    pub description: String,
    /// The user creating the record.
    pub created_by: i64,
}

/// Read and write access to attendance periods.
pub trait PeriodStore {
    /// Finds the id of the period whose range inclusively contains `date`.
    /// A zero-result lookup is a valid `None`, not an error.
    fn find_period_containing(&self, date: NaiveDate) -> EngineResult<Option<i64>>;

    /// Reports whether any existing period intersects the given range.
    fn period_overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<bool>;

    /// Inserts a period, assigning its id and creation timestamp.
    fn insert_period(&self, new: NewPeriod) -> EngineResult<AttendancePeriod>;

    /// Fetches a period by id.
    fn get_period(&self, period_id: i64) -> EngineResult<Option<AttendancePeriod>>;

    /// Counts all periods.
    fn count_periods(&self) -> EngineResult<i64>;

    /// Lists periods ordered most-recently-created first.
    fn list_periods(&self, limit: i64, offset: i64) -> EngineResult<Vec<AttendancePeriod>>;
}

/// Read and write access to payroll rows.
pub trait PayrollStore {
    /// Inserts a payroll in pending state. Fails with
    /// [`crate::error::EngineError::PayrollAlreadyExists`] if the period
    /// already has one; this is the storage-level uniqueness backstop.
    fn insert_payroll(&self, new: NewPayroll) -> EngineResult<Payroll>;

    /// Fetches a payroll by id.
    fn get_payroll(&self, payroll_id: i64) -> EngineResult<Option<Payroll>>;

    /// Fetches the payroll covering a period, if any.
    fn payroll_for_period(&self, period_id: i64) -> EngineResult<Option<Payroll>>;

    /// Marks a payroll processed, stamping `processed_at` with the current
    /// time.
    fn set_processed(&self, payroll_id: i64, updated_by: i64) -> EngineResult<Payroll>;

    /// Counts all payrolls.
    fn count_payrolls(&self) -> EngineResult<i64>;

    /// Lists payrolls ordered most-recently-created first.
    fn list_payrolls(&self, limit: i64, offset: i64) -> EngineResult<Vec<Payroll>>;
}

/// Read and write access to submission records.
pub trait SubmissionStore {
    /// Reports whether the user already has attendance for the date.
    fn has_attendance(&self, user_id: i64, date: NaiveDate) -> EngineResult<bool>;

    /// Reports whether the user already has overtime for the date.
    fn has_overtime(&self, user_id: i64, date: NaiveDate) -> EngineResult<bool>;

    /// Inserts an attendance record. Fails with
    /// [`crate::error::EngineError::DuplicateSubmission`] if one already
    /// exists for (user, date); this is the storage-level uniqueness
    /// backstop behind the service's fast-fail check.
    fn insert_attendance(&self, new: NewAttendance) -> EngineResult<Attendance>;

    /// Inserts an overtime record, with the same uniqueness backstop.
    fn insert_overtime(&self, new: NewOvertime) -> EngineResult<Overtime>;

    /// Inserts a reimbursement record. No per-day uniqueness applies.
    fn insert_reimbursement(&self, new: NewReimbursement) -> EngineResult<Reimbursement>;

    /// Counts the user's attendance records.
    fn count_attendance(&self, user_id: i64) -> EngineResult<i64>;

    /// Lists the user's attendance records, most recent first.
    fn list_attendance(&self, user_id: i64, limit: i64, offset: i64)
    -> EngineResult<Vec<Attendance>>;

    /// Counts the user's overtime records.
    fn count_overtime(&self, user_id: i64) -> EngineResult<i64>;

    /// Lists the user's overtime records, most recent first.
    fn list_overtime(&self, user_id: i64, limit: i64, offset: i64) -> EngineResult<Vec<Overtime>>;

    /// Counts the user's reimbursement records.
    fn count_reimbursements(&self, user_id: i64) -> EngineResult<i64>;

    /// Lists the user's reimbursement records, most recent first.
    fn list_reimbursements(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> EngineResult<Vec<Reimbursement>>;

    /// Counts distinct attendance days for a user within a period.
    fn count_attendance_days(&self, user_id: i64, period_id: i64) -> EngineResult<i64>;

    /// Sums overtime hours for a user within a period.
    fn sum_overtime_hours(&self, user_id: i64, period_id: i64) -> EngineResult<Decimal>;

    /// Sums reimbursement amounts for a user within a period.
    fn sum_reimbursements(&self, user_id: i64, period_id: i64) -> EngineResult<Decimal>;
}

/// Read-only access to employee reference data and eligibility aggregates.
pub trait EmployeeStore {
    /// Fetches an employee's name and current salary. `None` when the
    /// employee or their salary row is missing; pay calculation must then
    /// fail rather than default the salary to zero.
    fn get_employee(&self, user_id: i64) -> EngineResult<Option<EmployeeProfile>>;

    /// Counts employees with at least one attendance, overtime or
    /// reimbursement record in the period.
    fn count_eligible_employees(&self, period_id: i64) -> EngineResult<i64>;

    /// Lists one page of eligible employees with their per-period activity
    /// aggregates, ordered by user id.
    fn list_eligible_employees(
        &self,
        period_id: i64,
        limit: i64,
        offset: i64,
    ) -> EngineResult<Vec<EmployeeActivity>>;
}
