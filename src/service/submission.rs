//! Attendance, overtime and reimbursement submission handling.
//!
//! Each submission runs the period gate and the type-specific validation
//! rules in a fixed order before anything is written. The order is part of
//! the contract: when several rules would reject an input, callers see the
//! first one in sequence.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    clamp_page_params, ensure_not_future, ensure_overtime_after_hours, ensure_overtime_hours,
    ensure_working_day, paginate, parse_submission_date, resolve_period_for_submission,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, Overtime, Page, Reimbursement, SubmissionKind};
use crate::store::{
    NewAttendance, NewOvertime, NewReimbursement, PayrollStore, PeriodStore, SubmissionStore,
};

/// An attendance submission as received from the boundary layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSubmission {
    /// The attending employee.
    pub user_id: i64,
    /// The attended day, `YYYY-MM-DD`.
    pub date: String,
    /// The authenticated user making the submission.
    pub submitted_by: i64,
}

/// An overtime submission as received from the boundary layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeSubmission {
    /// The employee that worked overtime.
    pub user_id: i64,
    /// The day the overtime was worked, `YYYY-MM-DD`.
    pub date: String,
    /// Hours worked; must satisfy `0 < hours <= 3`.
    pub hours: Decimal,
    /// The authenticated user making the submission.
    pub submitted_by: i64,
}

/// A reimbursement submission as received from the boundary layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReimbursementSubmission {
    /// The employee claiming reimbursement.
    pub user_id: i64,
    /// The day the expense was incurred, `YYYY-MM-DD`.
    pub date: String,
    /// The claimed amount; must be positive.
    pub amount: Decimal,
    /// What the expense was for; must be non-empty.
    pub description: String,
    /// The authenticated user making the submission.
    pub submitted_by: i64,
}

/// Handles submission of attendance, overtime and reimbursement records.
#[derive(Debug)]
pub struct SubmissionService<S> {
    store: Arc<S>,
}

impl<S> Clone for SubmissionService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> SubmissionService<S>
where
    S: PeriodStore + PayrollStore + SubmissionStore,
{
    /// Creates a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Submits an attendance record for the current instant.
    pub fn submit_attendance(&self, request: &AttendanceSubmission) -> EngineResult<Attendance> {
        self.submit_attendance_at(request, Local::now().naive_local())
    }

    /// Submits an attendance record as of `now`.
    ///
    /// Rule order: date parse, period gate, weekday, future date,
    /// duplicate.
    pub fn submit_attendance_at(
        &self,
        request: &AttendanceSubmission,
        now: NaiveDateTime,
    ) -> EngineResult<Attendance> {
        let date = parse_submission_date(&request.date)?;
        let period_id = resolve_period_for_submission(self.store.as_ref(), date)?;
        ensure_working_day(date)?;
        ensure_not_future(date, now.date())?;

        if self.store.has_attendance(request.user_id, date)? {
            return Err(EngineError::DuplicateSubmission {
                kind: SubmissionKind::Attendance,
                date,
            });
        }

        self.store.insert_attendance(NewAttendance {
            user_id: request.user_id,
            period_id,
            date,
            created_by: request.submitted_by,
        })
    }

    /// Submits an overtime record for the current instant.
    pub fn submit_overtime(&self, request: &OvertimeSubmission) -> EngineResult<Overtime> {
        self.submit_overtime_at(request, Local::now().naive_local())
    }

    /// Submits an overtime record as of `now`.
    ///
    /// Rule order: hour bounds, date parse, period gate, same-day cutoff,
    /// duplicate. The cheap hour and format checks run before the gate so
    /// malformed input fails without a store round trip.
    pub fn submit_overtime_at(
        &self,
        request: &OvertimeSubmission,
        now: NaiveDateTime,
    ) -> EngineResult<Overtime> {
        ensure_overtime_hours(request.hours)?;
        let date = parse_submission_date(&request.date)?;
        let period_id = resolve_period_for_submission(self.store.as_ref(), date)?;
        ensure_overtime_after_hours(date, now)?;

        if self.store.has_overtime(request.user_id, date)? {
            return Err(EngineError::DuplicateSubmission {
                kind: SubmissionKind::Overtime,
                date,
            });
        }

        self.store.insert_overtime(NewOvertime {
            user_id: request.user_id,
            period_id,
            date,
            hours: request.hours,
            created_by: request.submitted_by,
        })
    }

    /// Submits a reimbursement claim.
    ///
    /// Rule order: amount, description, date parse, period gate. No
    /// duplicate or temporal constraint applies.
    pub fn submit_reimbursement(
        &self,
        request: &ReimbursementSubmission,
    ) -> EngineResult<Reimbursement> {
        if request.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                amount: request.amount,
            });
        }
        if request.description.trim().is_empty() {
            return Err(EngineError::MissingField {
                field: "description".to_string(),
            });
        }
        let date = parse_submission_date(&request.date)?;
        let period_id = resolve_period_for_submission(self.store.as_ref(), date)?;

        self.store.insert_reimbursement(NewReimbursement {
            user_id: request.user_id,
            period_id,
            date,
            amount: request.amount,
            description: request.description.clone(),
            created_by: request.submitted_by,
        })
    }

    /// Lists a user's attendance records, most recent first.
    pub fn list_attendance(
        &self,
        user_id: i64,
        page: i64,
        limit: i64,
    ) -> EngineResult<Page<Attendance>> {
        let (page, limit) = clamp_page_params(page, limit);
        let total = self.store.count_attendance(user_id)?;
        let slice = paginate(total, page, limit);
        if slice.is_empty {
            return Ok(Page::empty(total, page, limit, slice.total_pages));
        }

        let data = self.store.list_attendance(user_id, limit, slice.offset)?;
        Ok(Page {
            data,
            total_record: total,
            page,
            limit,
            total_pages: slice.total_pages,
        })
    }

    /// Lists a user's overtime records, most recent first.
    pub fn list_overtime(
        &self,
        user_id: i64,
        page: i64,
        limit: i64,
    ) -> EngineResult<Page<Overtime>> {
        let (page, limit) = clamp_page_params(page, limit);
        let total = self.store.count_overtime(user_id)?;
        let slice = paginate(total, page, limit);
        if slice.is_empty {
            return Ok(Page::empty(total, page, limit, slice.total_pages));
        }

        let data = self.store.list_overtime(user_id, limit, slice.offset)?;
        Ok(Page {
            data,
            total_record: total,
            page,
            limit,
            total_pages: slice.total_pages,
        })
    }

    /// Lists a user's reimbursement claims, most recent first.
    pub fn list_reimbursements(
        &self,
        user_id: i64,
        page: i64,
        limit: i64,
    ) -> EngineResult<Page<Reimbursement>> {
        let (page, limit) = clamp_page_params(page, limit);
        let total = self.store.count_reimbursements(user_id)?;
        let slice = paginate(total, page, limit);
        if slice.is_empty {
            return Ok(Page::empty(total, page, limit, slice.total_pages));
        }

        let data = self
            .store
            .list_reimbursements(user_id, limit, slice.offset)?;
        Ok(Page {
            data,
            total_record: total,
            page,
            limit,
            total_pages: slice.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, NewPayroll, NewPeriod};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // A fixed Monday-evening instant inside the June 2025 period.
    fn monday_evening() -> NaiveDateTime {
        date("2025-06-16").and_hms_opt(18, 0, 0).unwrap()
    }

    fn service_with_period() -> (SubmissionService<MemoryStore>, Arc<MemoryStore>, i64) {
        let store = Arc::new(MemoryStore::new());
        let period = store
            .insert_period(NewPeriod {
                start_date: date("2025-06-01"),
                end_date: date("2025-06-30"),
                created_by: 1,
            })
            .unwrap();
        (SubmissionService::new(Arc::clone(&store)), store, period.id)
    }

    fn attendance_request(day: &str) -> AttendanceSubmission {
        AttendanceSubmission {
            user_id: 42,
            date: day.to_string(),
            submitted_by: 42,
        }
    }

    fn overtime_request(day: &str, hours: &str) -> OvertimeSubmission {
        OvertimeSubmission {
            user_id: 42,
            date: day.to_string(),
            hours: dec(hours),
            submitted_by: 42,
        }
    }

    #[test]
    fn test_attendance_is_stamped_with_resolved_period() {
        let (service, _, period_id) = service_with_period();
        let record = service
            .submit_attendance_at(&attendance_request("2025-06-16"), monday_evening())
            .unwrap();
        assert_eq!(record.period_id, period_id);
        assert_eq!(record.date, date("2025-06-16"));
    }

    #[test]
    fn test_attendance_invalid_date_rejected_first() {
        let (service, _, _) = service_with_period();
        let err = service
            .submit_attendance_at(&attendance_request("16-06-2025"), monday_evening())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidDateFormat { .. }));
    }

    #[test]
    fn test_attendance_on_sunday_rejected() {
        let (service, _, _) = service_with_period();
        // 2025-06-15 is a Sunday inside the period.
        let err = service
            .submit_attendance_at(&attendance_request("2025-06-15"), monday_evening())
            .unwrap_err();
        assert!(matches!(err, EngineError::NonWorkingDay { .. }));
    }

    #[test]
    fn test_processed_payroll_blocks_before_weekday_rule() {
        let (service, store, period_id) = service_with_period();
        let payroll = store
            .insert_payroll(NewPayroll {
                period_id,
                created_by: 1,
            })
            .unwrap();
        store.set_processed(payroll.id, 1).unwrap();

        // A Sunday inside a frozen period: the gate failure wins over the
        // weekday rule.
        let err = service
            .submit_attendance_at(&attendance_request("2025-06-15"), monday_evening())
            .unwrap_err();
        assert!(matches!(err, EngineError::PayrollAlreadyProcessed { .. }));
    }

    #[test]
    fn test_attendance_future_date_rejected() {
        let (service, _, _) = service_with_period();
        // Submitting Tuesday's attendance on Monday evening.
        let err = service
            .submit_attendance_at(&attendance_request("2025-06-17"), monday_evening())
            .unwrap_err();
        assert!(matches!(err, EngineError::FutureDate { .. }));
    }

    #[test]
    fn test_attendance_same_day_counts_once() {
        let (service, _, _) = service_with_period();
        service
            .submit_attendance_at(&attendance_request("2025-06-16"), monday_evening())
            .unwrap();

        let err = service
            .submit_attendance_at(&attendance_request("2025-06-16"), monday_evening())
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::DuplicateSubmission {
                kind: SubmissionKind::Attendance,
                ..
            }
        ));
    }

    #[test]
    fn test_attendance_outside_any_period_rejected() {
        let (service, _, _) = service_with_period();
        let err = service
            .submit_attendance_at(
                &attendance_request("2025-05-30"),
                date("2025-05-30").and_hms_opt(18, 0, 0).unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::NoPeriodFound { .. }));
    }

    #[test]
    fn test_overtime_hour_bounds_checked_before_gate() {
        let (service, _, _) = service_with_period();
        // The date lies outside any period, but the hour bound fires first.
        let err = service
            .submit_overtime_at(&overtime_request("2025-05-30", "4"), monday_evening())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidHours { .. }));
    }

    #[test]
    fn test_overtime_exactly_three_hours_accepted() {
        let (service, _, _) = service_with_period();
        let record = service
            .submit_overtime_at(&overtime_request("2025-06-16", "3"), monday_evening())
            .unwrap();
        assert_eq!(record.hours, dec("3"));
    }

    #[test]
    fn test_overtime_just_over_three_hours_rejected() {
        let (service, _, _) = service_with_period();
        let err = service
            .submit_overtime_at(&overtime_request("2025-06-16", "3.0001"), monday_evening())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidHours { .. }));
    }

    #[test]
    fn test_same_day_overtime_before_five_pm_rejected() {
        let (service, _, _) = service_with_period();
        let at_1659 = date("2025-06-16").and_hms_opt(16, 59, 0).unwrap();
        let err = service
            .submit_overtime_at(&overtime_request("2025-06-16", "2"), at_1659)
            .unwrap_err();
        assert!(matches!(err, EngineError::OvertimeTooEarly { .. }));
    }

    #[test]
    fn test_same_day_overtime_at_five_pm_accepted() {
        let (service, _, _) = service_with_period();
        let at_1700 = date("2025-06-16").and_hms_opt(17, 0, 0).unwrap();
        assert!(
            service
                .submit_overtime_at(&overtime_request("2025-06-16", "2"), at_1700)
                .is_ok()
        );
    }

    #[test]
    fn test_past_day_overtime_accepted_in_the_morning() {
        let (service, _, _) = service_with_period();
        let tuesday_morning = date("2025-06-17").and_hms_opt(9, 0, 0).unwrap();
        assert!(
            service
                .submit_overtime_at(&overtime_request("2025-06-16", "2"), tuesday_morning)
                .is_ok()
        );
    }

    #[test]
    fn test_overtime_same_day_counts_once() {
        let (service, _, _) = service_with_period();
        service
            .submit_overtime_at(&overtime_request("2025-06-16", "2"), monday_evening())
            .unwrap();
        let err = service
            .submit_overtime_at(&overtime_request("2025-06-16", "1"), monday_evening())
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::DuplicateSubmission {
                kind: SubmissionKind::Overtime,
                ..
            }
        ));
    }

    #[test]
    fn test_reimbursement_requires_positive_amount() {
        let (service, _, _) = service_with_period();
        let err = service
            .submit_reimbursement(&ReimbursementSubmission {
                user_id: 42,
                date: "2025-06-16".to_string(),
                amount: dec("0"),
                description: "taxi".to_string(),
                submitted_by: 42,
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount { .. }));
    }

    #[test]
    fn test_reimbursement_requires_description() {
        let (service, _, _) = service_with_period();
        let err = service
            .submit_reimbursement(&ReimbursementSubmission {
                user_id: 42,
                date: "2025-06-16".to_string(),
                amount: dec("50000"),
                description: "  ".to_string(),
                submitted_by: 42,
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingField { .. }));
    }

    #[test]
    fn test_reimbursements_allow_multiple_per_day() {
        let (service, _, _) = service_with_period();
        for description in ["taxi", "lunch"] {
            service
                .submit_reimbursement(&ReimbursementSubmission {
                    user_id: 42,
                    date: "2025-06-16".to_string(),
                    amount: dec("50000"),
                    description: description.to_string(),
                    submitted_by: 42,
                })
                .unwrap();
        }
    }

    #[test]
    fn test_list_attendance_pages() {
        let (service, _, _) = service_with_period();
        for day in ["2025-06-10", "2025-06-11", "2025-06-12"] {
            service
                .submit_attendance_at(&attendance_request(day), monday_evening())
                .unwrap();
        }

        let first = service.list_attendance(42, 1, 2).unwrap();
        assert_eq!(first.data.len(), 2);
        assert_eq!(first.total_record, 3);
        assert_eq!(first.total_pages, 2);

        let second = service.list_attendance(42, 2, 2).unwrap();
        assert_eq!(second.data.len(), 1);
    }

    #[test]
    fn test_list_past_last_page_is_empty_without_fetch() {
        let (service, _, _) = service_with_period();
        let page = service.list_attendance(42, 5, 20).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_record, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_list_clamps_page_params() {
        let (service, _, _) = service_with_period();
        let page = service.list_overtime(42, 0, -3).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 20);
    }
}
