//! Submission validation rules.
//!
//! Pure checks over a submission date, the current instant and the
//! submitted values. Services run these in a fixed order before writing;
//! callers rely on the first failing rule being the one reported.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::calculation::pay::MAX_OVERTIME_HOURS;
use crate::error::{EngineError, EngineResult};

/// Hour of day (local time) from which same-day overtime may be submitted.
///
/// 17:00:00 itself is accepted; anything earlier on the overtime's own day
/// is rejected. Past dates are not subject to the cutoff.
pub const OVERTIME_SUBMISSION_HOUR: u32 = 17;

/// Parses a submission date in `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::parse_submission_date;
/// use chrono::NaiveDate;
///
/// let date = parse_submission_date("2025-06-16").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
///
/// assert!(parse_submission_date("16-06-2025").is_err());
/// assert!(parse_submission_date("2025-02-30").is_err());
/// ```
pub fn parse_submission_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDateFormat {
        value: value.to_string(),
    })
}

/// Returns true for Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Rejects weekend dates with [`EngineError::NonWorkingDay`].
pub fn ensure_working_day(date: NaiveDate) -> EngineResult<()> {
    if !is_working_day(date) {
        return Err(EngineError::NonWorkingDay { date });
    }
    Ok(())
}

/// Rejects dates strictly after `today` with [`EngineError::FutureDate`].
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> EngineResult<()> {
    if date > today {
        return Err(EngineError::FutureDate { date });
    }
    Ok(())
}

/// Rejects overtime hours outside `0 < hours <= 3`.
///
/// The bounds are exact: 3 is accepted, 3.0001 is not.
pub fn ensure_overtime_hours(hours: Decimal) -> EngineResult<()> {
    if hours <= Decimal::ZERO || hours > MAX_OVERTIME_HOURS {
        return Err(EngineError::InvalidHours { hours });
    }
    Ok(())
}

/// Rejects same-day overtime submitted before the end of working hours.
///
/// Only applies when the overtime date equals the current calendar date;
/// overtime for past days may be submitted at any time.
pub fn ensure_overtime_after_hours(date: NaiveDate, now: NaiveDateTime) -> EngineResult<()> {
    if date == now.date() && now.hour() < OVERTIME_SUBMISSION_HOUR {
        return Err(EngineError::OvertimeTooEarly { date });
    }
    Ok(())
}
