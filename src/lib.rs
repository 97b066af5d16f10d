//! Payroll and Attendance Engine
//!
//! This crate validates attendance, overtime and reimbursement submissions
//! against attendance periods and payroll state, and computes take-home pay
//! per employee for a payroll run.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
