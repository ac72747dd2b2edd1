//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and its line items, which
//! itemise the wages behind a payroll total per employee and per date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wages earned by one employee on one date.
///
/// # Example
///
/// ```
/// use timecard_payroll::models::PayrollLine;
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
///
/// let line = PayrollLine {
///     employee: "John Doe".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 7, 21).unwrap(),
///     hours: Decimal::from(9),
///     rate: Decimal::from(25),
///     amount: Decimal::from(225),
/// };
/// assert_eq!(line.hours * line.rate, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The employee's full name.
    pub employee: String,
    /// The date worked.
    pub date: NaiveDate,
    /// Hours worked on the date.
    pub hours: Decimal,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// Wages for the date (hours * rate).
    pub amount: Decimal,
}

/// Aggregated totals for a single employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// The employee's full name.
    pub employee: String,
    /// The employee's job title.
    pub title: String,
    /// Number of dates contributing to the totals (repeats included).
    pub days_worked: usize,
    /// Total hours over all dates.
    pub hours: Decimal,
    /// Total wages over all dates.
    pub wages: Decimal,
}

/// The itemised result of a payroll run.
///
/// `lines` are ordered by employee (input order) and then by the order the
/// employee's time-in events were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// One line per employee per date worked.
    pub lines: Vec<PayrollLine>,
    /// Per-employee totals, in input order.
    pub employees: Vec<EmployeeTotals>,
    /// Total hours across all employees.
    pub total_hours: Decimal,
    /// Total wages across all employees.
    pub total: Decimal,
}

impl PayrollReport {
    /// Returns the totals for the employee with the given full name.
    pub fn employee(&self, full_name: &str) -> Option<&EmployeeTotals> {
        self.employees.iter().find(|e| e.employee == full_name)
    }
}
