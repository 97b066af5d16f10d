//! Payroll lifecycle, payslip generation and period-wide summaries.
//!
//! Periods are created with overlap validation; payrolls are created
//! pending, run exactly once, and from then on freeze their period.
//! Payslips and summaries are computed on read from raw aggregates and
//! never persisted.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    build_payslip, clamp_page_params, compute_pay, paginate, parse_submission_date, round_money,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendancePeriod, EmployeePayslip, Page, Payroll, PayrollListItem, PayrollSummary, PeriodInfo,
};
use crate::store::{
    EmployeeStore, NewPayroll, NewPeriod, PayrollStore, PeriodStore, SubmissionStore,
};

/// A request to create an attendance period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// First day of the period, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day of the period, `YYYY-MM-DD`.
    pub end_date: String,
    /// The authenticated user creating the period.
    pub created_by: i64,
}

/// A request to create a payroll for a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The period the payroll covers.
    pub period_id: i64,
    /// The authenticated user creating the payroll.
    pub created_by: i64,
}

/// Manages payroll state and computes payslips and summaries.
#[derive(Debug)]
pub struct PayrollService<S> {
    store: Arc<S>,
}

impl<S> Clone for PayrollService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> PayrollService<S>
where
    S: PeriodStore + PayrollStore + SubmissionStore + EmployeeStore,
{
    /// Creates a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates an attendance period after validating its range.
    ///
    /// The range must be well-ordered and must not intersect any existing
    /// period.
    pub fn create_attendance_period(
        &self,
        request: &PeriodRequest,
    ) -> EngineResult<AttendancePeriod> {
        let start_date = parse_submission_date(&request.start_date)?;
        let end_date = parse_submission_date(&request.end_date)?;
        if start_date > end_date {
            return Err(EngineError::InvalidPeriodRange {
                start_date,
                end_date,
            });
        }
        if self.store.period_overlaps(start_date, end_date)? {
            return Err(EngineError::OverlappingPeriod {
                start_date,
                end_date,
            });
        }

        self.store.insert_period(NewPeriod {
            start_date,
            end_date,
            created_by: request.created_by,
        })
    }

    /// Lists attendance periods, most recently created first.
    pub fn list_periods(&self, page: i64, limit: i64) -> EngineResult<Page<AttendancePeriod>> {
        let (page, limit) = clamp_page_params(page, limit);
        let total = self.store.count_periods()?;
        let slice = paginate(total, page, limit);
        if slice.is_empty {
            return Ok(Page::empty(total, page, limit, slice.total_pages));
        }

        let data = self.store.list_periods(limit, slice.offset)?;
        Ok(Page {
            data,
            total_record: total,
            page,
            limit,
            total_pages: slice.total_pages,
        })
    }

    /// Creates a payroll for a period, in pending state.
    ///
    /// The period must exist and must not already have a payroll; one
    /// payroll covers one period.
    pub fn create_payroll(&self, request: &PayrollRequest) -> EngineResult<Payroll> {
        let period = self
            .store
            .get_period(request.period_id)?
            .ok_or(EngineError::PeriodNotFound {
                period_id: request.period_id,
            })?;
        if self.store.payroll_for_period(period.id)?.is_some() {
            return Err(EngineError::PayrollAlreadyExists {
                period_id: period.id,
            });
        }

        self.store.insert_payroll(NewPayroll {
            period_id: period.id,
            created_by: request.created_by,
        })
    }

    /// Runs a payroll: `pending -> processed`, stamping `processed_at`.
    ///
    /// The transition is monotonic; running an already-processed payroll
    /// fails. Once processed, the period gate rejects all further
    /// submissions for the covered period.
    pub fn run_payroll(&self, payroll_id: i64, updated_by: i64) -> EngineResult<Payroll> {
        let payroll = self
            .store
            .get_payroll(payroll_id)?
            .ok_or(EngineError::PayrollNotFound { payroll_id })?;
        if payroll.is_processed() {
            return Err(EngineError::PayrollAlreadyProcessed {
                period_id: payroll.period_id,
            });
        }

        self.store.set_processed(payroll_id, updated_by)
    }

    /// Lists payrolls joined with their period dates, most recent first.
    pub fn list_payrolls(&self, page: i64, limit: i64) -> EngineResult<Page<PayrollListItem>> {
        let (page, limit) = clamp_page_params(page, limit);
        let total = self.store.count_payrolls()?;
        let slice = paginate(total, page, limit);
        if slice.is_empty {
            return Ok(Page::empty(total, page, limit, slice.total_pages));
        }

        let payrolls = self.store.list_payrolls(limit, slice.offset)?;
        let mut data = Vec::with_capacity(payrolls.len());
        for payroll in payrolls {
            let period =
                self.store
                    .get_period(payroll.period_id)?
                    .ok_or(EngineError::PeriodNotFound {
                        period_id: payroll.period_id,
                    })?;
            data.push(PayrollListItem {
                id: payroll.id,
                status: payroll.status,
                start_date: period.start_date,
                end_date: period.end_date,
                processed_at: payroll.processed_at,
            });
        }

        Ok(Page {
            data,
            total_record: total,
            page,
            limit,
            total_pages: slice.total_pages,
        })
    }

    /// Generates one employee's payslip for a processed payroll.
    ///
    /// The payroll must exist and have been run; the employee's salary row
    /// must exist. A missing salary is an error, never a zero default.
    pub fn generate_payslip(&self, user_id: i64, payroll_id: i64) -> EngineResult<EmployeePayslip> {
        let payroll = self
            .store
            .get_payroll(payroll_id)?
            .ok_or(EngineError::PayrollNotFound { payroll_id })?;
        if !payroll.is_processed() {
            return Err(EngineError::PayrollNotProcessed { payroll_id });
        }

        let employee = self
            .store
            .get_employee(user_id)?
            .ok_or(EngineError::EmployeeNotFound { user_id })?;

        let attendance_days = self.store.count_attendance_days(user_id, payroll.period_id)?;
        let overtime_hours = self.store.sum_overtime_hours(user_id, payroll.period_id)?;
        let reimbursements = self.store.sum_reimbursements(user_id, payroll.period_id)?;

        Ok(build_payslip(
            payroll.id,
            user_id,
            &employee.full_name,
            employee.base_salary,
            attendance_days,
            overtime_hours,
            reimbursements,
        ))
    }

    /// Summarizes one page of a payroll's eligible employees.
    ///
    /// Employees qualify only with at least one attendance, overtime or
    /// reimbursement record in the period. `total_take_home_pay` covers the
    /// returned page only.
    pub fn summarize_payroll(
        &self,
        payroll_id: i64,
        page: i64,
        limit: i64,
    ) -> EngineResult<PayrollSummary> {
        let payroll = self
            .store
            .get_payroll(payroll_id)?
            .ok_or(EngineError::PayrollNotFound { payroll_id })?;
        let period =
            self.store
                .get_period(payroll.period_id)?
                .ok_or(EngineError::PeriodNotFound {
                    period_id: payroll.period_id,
                })?;

        let (page, limit) = clamp_page_params(page, limit);
        let total = self.store.count_eligible_employees(period.id)?;
        let slice = paginate(total, page, limit);
        let period_info = PeriodInfo {
            start_date: period.start_date,
            end_date: period.end_date,
        };

        if slice.is_empty {
            return Ok(PayrollSummary {
                payroll_id,
                period: period_info,
                employees: Vec::new(),
                total_take_home_pay: Decimal::ZERO,
                total_record: total,
                page,
                limit,
                total_pages: slice.total_pages,
            });
        }

        let activities = self
            .store
            .list_eligible_employees(period.id, limit, slice.offset)?;

        let mut employees = Vec::with_capacity(activities.len());
        let mut page_total = Decimal::ZERO;
        for activity in activities {
            let breakdown = compute_pay(
                activity.base_salary,
                activity.attendance_days,
                activity.overtime_hours,
                activity.reimbursements,
            );
            page_total += breakdown.take_home_pay;
            employees.push(build_payslip(
                payroll_id,
                activity.user_id,
                &activity.full_name,
                activity.base_salary,
                activity.attendance_days,
                activity.overtime_hours,
                activity.reimbursements,
            ));
        }

        Ok(PayrollSummary {
            payroll_id,
            period: period_info,
            employees,
            total_take_home_pay: round_money(page_total),
            total_record: total,
            page,
            limit,
            total_pages: slice.total_pages,
        })
    }
}
