//! HTTP API module for the Payroll Engine.
//!
//! A thin boundary over the services: JSON in, JSON out, engine errors
//! mapped to status codes. No business logic lives here.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreatePayrollRequest, CreatePeriodRequest, PageQuery, RunPayrollRequest, SubmitAttendanceRequest,
    SubmitOvertimeRequest, SubmitReimbursementRequest, UserPageQuery,
};
pub use response::ApiError;
pub use state::AppState;
