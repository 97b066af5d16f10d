//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payroll;
mod payslip;
mod period;
mod submission;

pub use employee::{EmployeeActivity, EmployeeProfile};
pub use payroll::{Payroll, PayrollListItem, PayrollStatus};
pub use payslip::{EmployeePayslip, Page, PayrollSummary, PeriodInfo};
pub use period::AttendancePeriod;
pub use submission::{Attendance, Overtime, Reimbursement, SubmissionKind};
