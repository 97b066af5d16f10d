//! In-memory store backing tests and the demo server.
//!
//! Tables live behind one `Mutex`; each method takes the lock, works on
//! plain `Vec`s and maps, and releases it before returning. The store
//! enforces the constraints the engine relies on at the storage level:
//! (user, date) uniqueness for attendance and overtime, and one payroll
//! per period.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Attendance, AttendancePeriod, EmployeeActivity, EmployeeProfile, Overtime, Payroll,
    PayrollStatus, Reimbursement, SubmissionKind,
};

use super::{
    EmployeeStore, NewAttendance, NewOvertime, NewPayroll, NewPeriod, NewReimbursement,
    PayrollStore, PeriodStore, SubmissionStore,
};

#[derive(Debug, Default)]
struct Tables {
    periods: Vec<AttendancePeriod>,
    payrolls: Vec<Payroll>,
    attendances: Vec<Attendance>,
    overtimes: Vec<Overtime>,
    reimbursements: Vec<Reimbursement>,
    employees: BTreeMap<i64, EmployeeProfile>,
    next_period_id: i64,
    next_payroll_id: i64,
    next_record_id: i64,
}

/// A `Mutex`-guarded in-memory implementation of all storage traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| EngineError::Storage {
            message: "store mutex poisoned".to_string(),
        })
    }

    /// Inserts or replaces an employee's reference data.
    ///
    /// Employees are read-only to the engine; this is the seam through
    /// which tests and the demo environment seed them.
    pub fn put_employee(&self, user_id: i64, profile: EmployeeProfile) -> EngineResult<()> {
        self.lock()?.employees.insert(user_id, profile);
        Ok(())
    }

    fn activity_for(tables: &Tables, user_id: i64, period_id: i64) -> EngineResult<EmployeeActivity> {
        let profile = tables
            .employees
            .get(&user_id)
            .ok_or(EngineError::EmployeeNotFound { user_id })?;

        let attendance_days = tables
            .attendances
            .iter()
            .filter(|a| a.user_id == user_id && a.period_id == period_id)
            .count() as i64;
        let overtime_hours = tables
            .overtimes
            .iter()
            .filter(|o| o.user_id == user_id && o.period_id == period_id)
            .map(|o| o.hours)
            .sum();
        let reimbursements = tables
            .reimbursements
            .iter()
            .filter(|r| r.user_id == user_id && r.period_id == period_id)
            .map(|r| r.amount)
            .sum();

        Ok(EmployeeActivity {
            user_id,
            full_name: profile.full_name.clone(),
            base_salary: profile.base_salary,
            attendance_days,
            overtime_hours,
            reimbursements,
        })
    }

    fn eligible_user_ids(tables: &Tables, period_id: i64) -> Vec<i64> {
        let mut ids: Vec<i64> = tables
            .attendances
            .iter()
            .filter(|a| a.period_id == period_id)
            .map(|a| a.user_id)
            .chain(
                tables
                    .overtimes
                    .iter()
                    .filter(|o| o.period_id == period_id)
                    .map(|o| o.user_id),
            )
            .chain(
                tables
                    .reimbursements
                    .iter()
                    .filter(|r| r.period_id == period_id)
                    .map(|r| r.user_id),
            )
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

fn page<T: Clone>(rows: &[T], limit: i64, offset: i64) -> Vec<T> {
    rows.iter()
        .rev()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect()
}

impl PeriodStore for MemoryStore {
    fn find_period_containing(&self, date: NaiveDate) -> EngineResult<Option<i64>> {
        let tables = self.lock()?;
        Ok(tables
            .periods
            .iter()
            .find(|p| p.contains_date(date))
            .map(|p| p.id))
    }

    fn period_overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<bool> {
        let tables = self.lock()?;
        Ok(tables
            .periods
            .iter()
            .any(|p| p.overlaps(start_date, end_date)))
    }

    fn insert_period(&self, new: NewPeriod) -> EngineResult<AttendancePeriod> {
        let mut tables = self.lock()?;
        tables.next_period_id += 1;
        let period = AttendancePeriod {
            id: tables.next_period_id,
            start_date: new.start_date,
            end_date: new.end_date,
            created_by: new.created_by,
            created_at: now(),
        };
        tables.periods.push(period.clone());
        Ok(period)
    }

    fn get_period(&self, period_id: i64) -> EngineResult<Option<AttendancePeriod>> {
        let tables = self.lock()?;
        Ok(tables.periods.iter().find(|p| p.id == period_id).cloned())
    }

    fn count_periods(&self) -> EngineResult<i64> {
        Ok(self.lock()?.periods.len() as i64)
    }

    fn list_periods(&self, limit: i64, offset: i64) -> EngineResult<Vec<AttendancePeriod>> {
        let tables = self.lock()?;
        Ok(page(&tables.periods, limit, offset))
    }
}

impl PayrollStore for MemoryStore {
    fn insert_payroll(&self, new: NewPayroll) -> EngineResult<Payroll> {
        let mut tables = self.lock()?;
        if tables.payrolls.iter().any(|p| p.period_id == new.period_id) {
            return Err(EngineError::PayrollAlreadyExists {
                period_id: new.period_id,
            });
        }
        tables.next_payroll_id += 1;
        let created_at = now();
        let payroll = Payroll {
            id: tables.next_payroll_id,
            period_id: new.period_id,
            status: PayrollStatus::Pending,
            processed_at: None,
            created_by: new.created_by,
            updated_by: None,
            created_at,
            updated_at: created_at,
        };
        tables.payrolls.push(payroll.clone());
        Ok(payroll)
    }

    fn get_payroll(&self, payroll_id: i64) -> EngineResult<Option<Payroll>> {
        let tables = self.lock()?;
        Ok(tables.payrolls.iter().find(|p| p.id == payroll_id).cloned())
    }

    fn payroll_for_period(&self, period_id: i64) -> EngineResult<Option<Payroll>> {
        let tables = self.lock()?;
        Ok(tables
            .payrolls
            .iter()
            .find(|p| p.period_id == period_id)
            .cloned())
    }

    fn set_processed(&self, payroll_id: i64, updated_by: i64) -> EngineResult<Payroll> {
        let mut tables = self.lock()?;
        let payroll = tables
            .payrolls
            .iter_mut()
            .find(|p| p.id == payroll_id)
            .ok_or(EngineError::PayrollNotFound { payroll_id })?;
        let stamped = now();
        payroll.status = PayrollStatus::Processed;
        payroll.processed_at = Some(stamped);
        payroll.updated_by = Some(updated_by);
        payroll.updated_at = stamped;
        Ok(payroll.clone())
    }

    fn count_payrolls(&self) -> EngineResult<i64> {
        Ok(self.lock()?.payrolls.len() as i64)
    }

    fn list_payrolls(&self, limit: i64, offset: i64) -> EngineResult<Vec<Payroll>> {
        let tables = self.lock()?;
        Ok(page(&tables.payrolls, limit, offset))
    }
}

impl SubmissionStore for MemoryStore {
    fn has_attendance(&self, user_id: i64, date: NaiveDate) -> EngineResult<bool> {
        let tables = self.lock()?;
        Ok(tables
            .attendances
            .iter()
            .any(|a| a.user_id == user_id && a.date == date))
    }

    fn has_overtime(&self, user_id: i64, date: NaiveDate) -> EngineResult<bool> {
        let tables = self.lock()?;
        Ok(tables
            .overtimes
            .iter()
            .any(|o| o.user_id == user_id && o.date == date))
    }

    fn insert_attendance(&self, new: NewAttendance) -> EngineResult<Attendance> {
        let mut tables = self.lock()?;
        if tables
            .attendances
            .iter()
            .any(|a| a.user_id == new.user_id && a.date == new.date)
        {
            return Err(EngineError::DuplicateSubmission {
                kind: SubmissionKind::Attendance,
                date: new.date,
            });
        }
        tables.next_record_id += 1;
        let record = Attendance {
            id: tables.next_record_id,
            user_id: new.user_id,
            period_id: new.period_id,
            date: new.date,
            created_by: new.created_by,
            created_at: now(),
        };
        tables.attendances.push(record.clone());
        Ok(record)
    }

    fn insert_overtime(&self, new: NewOvertime) -> EngineResult<Overtime> {
        let mut tables = self.lock()?;
        if tables
            .overtimes
            .iter()
            .any(|o| o.user_id == new.user_id && o.date == new.date)
        {
            return Err(EngineError::DuplicateSubmission {
                kind: SubmissionKind::Overtime,
                date: new.date,
            });
        }
        tables.next_record_id += 1;
        let record = Overtime {
            id: tables.next_record_id,
            user_id: new.user_id,
            period_id: new.period_id,
            date: new.date,
            hours: new.hours,
            created_by: new.created_by,
            created_at: now(),
        };
        tables.overtimes.push(record.clone());
        Ok(record)
    }

    fn insert_reimbursement(&self, new: NewReimbursement) -> EngineResult<Reimbursement> {
        let mut tables = self.lock()?;
        tables.next_record_id += 1;
        let record = Reimbursement {
            id: tables.next_record_id,
            user_id: new.user_id,
            period_id: new.period_id,
            date: new.date,
            amount: new.amount,
            description: new.description,
            created_by: new.created_by,
            created_at: now(),
        };
        tables.reimbursements.push(record.clone());
        Ok(record)
    }

    fn count_attendance(&self, user_id: i64) -> EngineResult<i64> {
        let tables = self.lock()?;
        Ok(tables
            .attendances
            .iter()
            .filter(|a| a.user_id == user_id)
            .count() as i64)
    }

    fn list_attendance(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> EngineResult<Vec<Attendance>> {
        let tables = self.lock()?;
        let rows: Vec<Attendance> = tables
            .attendances
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        Ok(page(&rows, limit, offset))
    }

    fn count_overtime(&self, user_id: i64) -> EngineResult<i64> {
        let tables = self.lock()?;
        Ok(tables
            .overtimes
            .iter()
            .filter(|o| o.user_id == user_id)
            .count() as i64)
    }

    fn list_overtime(&self, user_id: i64, limit: i64, offset: i64) -> EngineResult<Vec<Overtime>> {
        let tables = self.lock()?;
        let rows: Vec<Overtime> = tables
            .overtimes
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        Ok(page(&rows, limit, offset))
    }

    fn count_reimbursements(&self, user_id: i64) -> EngineResult<i64> {
        let tables = self.lock()?;
        Ok(tables
            .reimbursements
            .iter()
            .filter(|r| r.user_id == user_id)
            .count() as i64)
    }

    fn list_reimbursements(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> EngineResult<Vec<Reimbursement>> {
        let tables = self.lock()?;
        let rows: Vec<Reimbursement> = tables
            .reimbursements
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        Ok(page(&rows, limit, offset))
    }

    fn count_attendance_days(&self, user_id: i64, period_id: i64) -> EngineResult<i64> {
        let tables = self.lock()?;
        // (user, date) uniqueness makes row count equal distinct-day count.
        Ok(tables
            .attendances
            .iter()
            .filter(|a| a.user_id == user_id && a.period_id == period_id)
            .count() as i64)
    }

    fn sum_overtime_hours(&self, user_id: i64, period_id: i64) -> EngineResult<Decimal> {
        let tables = self.lock()?;
        Ok(tables
            .overtimes
            .iter()
            .filter(|o| o.user_id == user_id && o.period_id == period_id)
            .map(|o| o.hours)
            .sum())
    }

    fn sum_reimbursements(&self, user_id: i64, period_id: i64) -> EngineResult<Decimal> {
        let tables = self.lock()?;
        Ok(tables
            .reimbursements
            .iter()
            .filter(|r| r.user_id == user_id && r.period_id == period_id)
            .map(|r| r.amount)
            .sum())
    }
}

impl EmployeeStore for MemoryStore {
    fn get_employee(&self, user_id: i64) -> EngineResult<Option<EmployeeProfile>> {
        let tables = self.lock()?;
        Ok(tables.employees.get(&user_id).cloned())
    }

    fn count_eligible_employees(&self, period_id: i64) -> EngineResult<i64> {
        let tables = self.lock()?;
        Ok(Self::eligible_user_ids(&tables, period_id).len() as i64)
    }

    fn list_eligible_employees(
        &self,
        period_id: i64,
        limit: i64,
        offset: i64,
    ) -> EngineResult<Vec<EmployeeActivity>> {
        let tables = self.lock()?;
        Self::eligible_user_ids(&tables, period_id)
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|user_id| Self::activity_for(&tables, user_id, period_id))
            .collect()
    }
}
