//! Attendance period model.
//!
//! This module contains the [`AttendancePeriod`] type: the fixed date range
//! within which attendance, overtime and reimbursement records are collected
//! before payroll runs.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Represents an attendance period with its inclusive date range.
///
/// Periods are immutable once created, except that an associated payroll
/// reaching `processed` state implicitly locks the period against further
/// submissions. Date ranges of distinct periods never overlap; this is
/// checked at creation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendancePeriod;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let period = AttendancePeriod {
///     id: 1,
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     created_by: 1,
///     created_at: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap().and_hms_opt(9, 0, 0).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePeriod {
    /// Unique identifier for the period.
    pub id: i64,
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// The user that created the period.
    pub created_by: i64,
    /// When the period was created.
    pub created_at: NaiveDateTime,
}

impl AttendancePeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::AttendancePeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = AttendancePeriod {
    ///     id: 1,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    ///     created_by: 1,
    ///     created_at: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap().and_hms_opt(9, 0, 0).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));  // start
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())); // end
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a candidate date range intersects this period.
    ///
    /// Both ranges are treated as inclusive intervals; touching endpoints
    /// count as an overlap.
    pub fn overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        !(end_date < self.start_date || start_date > self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn june_period() -> AttendancePeriod {
        AttendancePeriod {
            id: 1,
            start_date: date("2025-06-01"),
            end_date: date("2025-06-30"),
            created_by: 1,
            created_at: date("2025-05-31").and_hms_opt(9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        assert!(june_period().contains_date(date("2025-06-15")));
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = june_period();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = june_period();
        assert!(!period.contains_date(date("2025-05-31")));
        assert!(!period.contains_date(date("2025-07-01")));
    }

    #[test]
    fn test_overlaps_detects_intersections() {
        let period = june_period();
        // Fully inside
        assert!(period.overlaps(date("2025-06-10"), date("2025-06-20")));
        // Straddles the start
        assert!(period.overlaps(date("2025-05-20"), date("2025-06-05")));
        // Straddles the end
        assert!(period.overlaps(date("2025-06-25"), date("2025-07-05")));
        // Fully covers
        assert!(period.overlaps(date("2025-05-01"), date("2025-07-31")));
        // Touching a single endpoint counts
        assert!(period.overlaps(date("2025-06-30"), date("2025-07-31")));
    }

    #[test]
    fn test_overlaps_rejects_disjoint_ranges() {
        let period = june_period();
        assert!(!period.overlaps(date("2025-05-01"), date("2025-05-31")));
        assert!(!period.overlaps(date("2025-07-01"), date("2025-07-31")));
    }

    #[test]
    fn test_serialize_period() {
        let json = serde_json::to_string(&june_period()).unwrap();
        assert!(json.contains("\"start_date\":\"2025-06-01\""));
        assert!(json.contains("\"end_date\":\"2025-06-30\""));
    }
}
