//! Engine services.
//!
//! The operations exposed to callers, wiring the period gate and validation
//! rules in front of storage writes, and the pay arithmetic behind payslip
//! and summary reads. Services are stateless apart from a shared store
//! handle and are safe to invoke from concurrent requests.

mod payroll;
mod submission;

pub use payroll::{PayrollRequest, PayrollService, PeriodRequest};
pub use submission::{
    AttendanceSubmission, OvertimeSubmission, ReimbursementSubmission, SubmissionService,
};
