//! Payroll model and lifecycle status.
//!
//! A payroll is a single processing run tied to one attendance period. It is
//! created in [`PayrollStatus::Pending`] state and transitions to
//! [`PayrollStatus::Processed`] exactly once; from then on the period it
//! covers is frozen against further submissions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// The payroll exists but has not been run.
    Pending,
    /// The payroll has been run; its period is frozen.
    Processed,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayrollStatus::Pending => write!(f, "pending"),
            PayrollStatus::Processed => write!(f, "processed"),
        }
    }
}

/// Represents a payroll run for one attendance period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payroll {
    /// Unique identifier for the payroll.
    pub id: i64,
    /// The attendance period this payroll covers (1:1).
    pub period_id: i64,
    /// Current lifecycle status.
    pub status: PayrollStatus,
    /// When the payroll was run; `None` while pending.
    pub processed_at: Option<NaiveDateTime>,
    /// The user that created the payroll.
    pub created_by: i64,
    /// The user that last updated the payroll, if any.
    pub updated_by: Option<i64>,
    /// When the payroll was created.
    pub created_at: NaiveDateTime,
    /// When the payroll was last updated.
    pub updated_at: NaiveDateTime,
}

impl Payroll {
    /// Returns true once the payroll has been run.
    pub fn is_processed(&self) -> bool {
        self.status == PayrollStatus::Processed
    }
}

/// A payroll row joined with its period dates, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollListItem {
    /// The payroll id.
    pub id: i64,
    /// Current lifecycle status.
    pub status: PayrollStatus,
    /// Start of the covered period.
    pub start_date: chrono::NaiveDate,
    /// End of the covered period.
    pub end_date: chrono::NaiveDate,
    /// When the payroll was run; `None` while pending.
    pub processed_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pending_payroll() -> Payroll {
        let created = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Payroll {
            id: 1,
            period_id: 1,
            status: PayrollStatus::Pending,
            processed_at: None,
            created_by: 1,
            updated_by: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Processed).unwrap(),
            "\"processed\""
        );
    }

    #[test]
    fn test_status_displays_lowercase() {
        assert_eq!(PayrollStatus::Pending.to_string(), "pending");
        assert_eq!(PayrollStatus::Processed.to_string(), "processed");
    }

    #[test]
    fn test_is_processed() {
        let mut payroll = pending_payroll();
        assert!(!payroll.is_processed());
        payroll.status = PayrollStatus::Processed;
        assert!(payroll.is_processed());
    }

    #[test]
    fn test_serialize_round_trip() {
        let payroll = pending_payroll();
        let json = serde_json::to_string(&payroll).unwrap();
        let back: Payroll = serde_json::from_str(&json).unwrap();
        assert_eq!(payroll, back);
    }
}
