//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::{PayrollService, SubmissionService};
use crate::store::MemoryStore;

/// Shared application state.
///
/// Holds the engine services over one shared store. The store is the only
/// stateful resource; the services themselves are stateless.
#[derive(Clone)]
pub struct AppState {
    submissions: SubmissionService<MemoryStore>,
    payrolls: PayrollService<MemoryStore>,
}

impl AppState {
    /// Creates application state over the given store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            submissions: SubmissionService::new(Arc::clone(&store)),
            payrolls: PayrollService::new(store),
        }
    }

    /// Returns the submission service.
    pub fn submissions(&self) -> &SubmissionService<MemoryStore> {
        &self.submissions
    }

    /// Returns the payroll service.
    pub fn payrolls(&self) -> &PayrollService<MemoryStore> {
        &self.payrolls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
