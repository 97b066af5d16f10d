//! Pay arithmetic.
//!
//! Turns raw per-period aggregates (attendance days, overtime hours,
//! reimbursement totals) into payslip figures. All functions are
//! deterministic; rounding happens once, when a payslip is assembled.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::EmployeePayslip;

/// Standard working days per attendance period.
///
/// Attendance pay is prorated against this count. Fixed by design, not
/// configuration.
pub const STANDARD_WORKING_DAYS: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Base hours per period used as the overtime rate divisor.
pub const OVERTIME_BASE_HOURS: Decimal = Decimal::from_parts(160, 0, 0, false, 0);

/// Overtime is paid at twice the derived hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Maximum overtime hours accepted per day.
pub const MAX_OVERTIME_HOURS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Rounds a monetary amount to 2 decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an hours figure to whole hours for display, half away from zero.
pub fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Prorated attendance pay: `base_salary / 20 * attendance_days`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::attendance_pay;
/// use rust_decimal::Decimal;
///
/// let pay = attendance_pay(Decimal::from(4_000_000), 20);
/// assert_eq!(pay, Decimal::from(4_000_000));
///
/// let half = attendance_pay(Decimal::from(4_000_000), 10);
/// assert_eq!(half, Decimal::from(2_000_000));
/// ```
pub fn attendance_pay(base_salary: Decimal, attendance_days: i64) -> Decimal {
    base_salary / STANDARD_WORKING_DAYS * Decimal::from(attendance_days)
}

/// Overtime pay: `total_hours * (base_salary / 160) * 2`.
///
/// The closed form over summed hours equals the per-record sum because the
/// base salary is constant across a period, which this engine assumes.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::overtime_pay;
/// use rust_decimal::Decimal;
///
/// let pay = overtime_pay(Decimal::from(4_000_000), Decimal::from(10));
/// assert_eq!(pay, Decimal::from(500_000));
/// ```
pub fn overtime_pay(base_salary: Decimal, total_hours: Decimal) -> Decimal {
    total_hours * (base_salary / OVERTIME_BASE_HOURS) * OVERTIME_MULTIPLIER
}

/// Unrounded pay figures for one employee in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayBreakdown {
    /// Prorated attendance pay.
    pub attendance_pay: Decimal,
    /// Overtime pay over the summed hours.
    pub overtime_pay: Decimal,
    /// Attendance pay + overtime pay + reimbursements.
    pub take_home_pay: Decimal,
}

/// Computes the unrounded pay figures from raw aggregates.
pub fn compute_pay(
    base_salary: Decimal,
    attendance_days: i64,
    overtime_hours: Decimal,
    reimbursements: Decimal,
) -> PayBreakdown {
    let attendance = attendance_pay(base_salary, attendance_days);
    let overtime = overtime_pay(base_salary, overtime_hours);
    PayBreakdown {
        attendance_pay: attendance,
        overtime_pay: overtime,
        take_home_pay: attendance + overtime + reimbursements,
    }
}

/// Assembles a rounded payslip from raw aggregates.
///
/// Monetary fields are rounded to 2 decimal places; overtime hours are
/// rounded to whole hours for display.
pub fn build_payslip(
    payroll_id: i64,
    user_id: i64,
    full_name: &str,
    base_salary: Decimal,
    attendance_days: i64,
    overtime_hours: Decimal,
    reimbursements: Decimal,
) -> EmployeePayslip {
    let breakdown = compute_pay(base_salary, attendance_days, overtime_hours, reimbursements);

    EmployeePayslip {
        payroll_id,
        user_id,
        full_name: full_name.to_string(),
        base_salary: round_money(base_salary),
        attendance_days,
        attendance_pay: round_money(breakdown.attendance_pay),
        overtime_hours: round_hours(overtime_hours),
        overtime_pay: round_money(breakdown.overtime_pay),
        reimbursements: round_money(reimbursements),
        take_home_pay: round_money(breakdown.take_home_pay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_attendance_pay_full_month() {
        assert_eq!(
            attendance_pay(dec("4000000"), 20),
            dec("4000000")
        );
    }

    #[test]
    fn test_attendance_pay_partial_month() {
        assert_eq!(attendance_pay(dec("4000000"), 15), dec("3000000"));
        assert_eq!(attendance_pay(dec("4000000"), 0), dec("0"));
    }

    #[test]
    fn test_overtime_pay_is_double_hourly_rate() {
        // 4,000,000 / 160 = 25,000 per hour, doubled for overtime.
        assert_eq!(overtime_pay(dec("4000000"), dec("1")), dec("50000"));
        assert_eq!(overtime_pay(dec("4000000"), dec("10")), dec("500000"));
    }

    #[test]
    fn test_overtime_pay_fractional_hours() {
        assert_eq!(overtime_pay(dec("4000000"), dec("2.5")), dec("125000"));
    }

    #[test]
    fn test_take_home_pay_sums_components() {
        let breakdown = compute_pay(dec("4000000"), 20, dec("10"), dec("200000"));
        assert_eq!(breakdown.attendance_pay, dec("4000000"));
        assert_eq!(breakdown.overtime_pay, dec("500000"));
        assert_eq!(breakdown.take_home_pay, dec("4700000"));
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec("10.005")), dec("10.01"));
        assert_eq!(round_money(dec("10.004")), dec("10.00"));
        assert_eq!(round_money(dec("-10.005")), dec("-10.01"));
    }

    #[test]
    fn test_round_hours_to_whole_hours() {
        assert_eq!(round_hours(dec("2.5")), dec("3"));
        assert_eq!(round_hours(dec("2.4")), dec("2"));
    }

    #[test]
    fn test_build_payslip_rounds_all_figures() {
        // Salary not divisible by 20: 3,333,333 / 20 * 7 = 1,166,666.55
        let payslip = build_payslip(1, 42, "Ayu Lestari", dec("3333333"), 7, dec("2.5"), dec("0"));

        assert_eq!(payslip.attendance_pay, dec("1166666.55"));
        // 2.5 * (3333333 / 160) * 2 = 104166.65625 -> 104166.66
        assert_eq!(payslip.overtime_pay, dec("104166.66"));
        assert_eq!(payslip.overtime_hours, dec("3"));
        // Take-home rounds the unrounded sum: 1270833.20625 -> 1270833.21
        assert_eq!(payslip.take_home_pay, dec("1270833.21"));
        assert_eq!(payslip.full_name, "Ayu Lestari");
        assert_eq!(payslip.attendance_days, 7);
    }

    #[test]
    fn test_zero_activity_payslip_is_zero() {
        let payslip = build_payslip(1, 42, "Idle", dec("4000000"), 0, dec("0"), dec("0"));
        assert_eq!(payslip.take_home_pay, dec("0.00"));
        assert_eq!(payslip.attendance_pay, dec("0.00"));
        assert_eq!(payslip.overtime_pay, dec("0.00"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(STANDARD_WORKING_DAYS, dec("20"));
        assert_eq!(OVERTIME_BASE_HOURS, dec("160"));
        assert_eq!(OVERTIME_MULTIPLIER, dec("2"));
        assert_eq!(MAX_OVERTIME_HOURS, dec("3"));
    }
}
