//! Attendance period resolution with payroll-lock checking.
//!
//! Every submission passes through this gate before any type-specific rule
//! runs: the calendar date resolves to its enclosing period, and the
//! period's payroll (if any) must not have been processed.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::store::{PayrollStore, PeriodStore};

/// Resolves the attendance period a submission date belongs to, verifying
/// the period is still open for submissions.
///
/// Fails with [`EngineError::NoPeriodFound`] when no period covers the
/// date, and with [`EngineError::PayrollAlreadyProcessed`] when the
/// covering period's payroll has been run. A period with no payroll row at
/// all is open.
///
/// The returned period id is what submissions are stamped with; it is
/// never supplied by the caller.
///
/// Read-only. The gate-check and the subsequent insert are not atomic; the
/// narrow race between them is accepted and backstopped by storage-level
/// constraints.
pub fn resolve_period_for_submission<S>(store: &S, date: NaiveDate) -> EngineResult<i64>
where
    S: PeriodStore + PayrollStore + ?Sized,
{
    let period_id = store
        .find_period_containing(date)?
        .ok_or(EngineError::NoPeriodFound { date })?;

    if let Some(payroll) = store.payroll_for_period(period_id)? {
        if payroll.is_processed() {
            return Err(EngineError::PayrollAlreadyProcessed { period_id });
        }
    }

    Ok(period_id)
}
