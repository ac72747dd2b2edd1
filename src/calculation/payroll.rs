//! Payroll aggregation across employees.
//!
//! This module sums wages over a set of employee records and builds the
//! itemised [`PayrollReport`].

use rust_decimal::Decimal;
use tracing::info;

use crate::config::PayrollSettings;
use crate::error::PayrollResult;
use crate::models::{EmployeeRecord, EmployeeTotals, PayrollLine, PayrollReport};

use super::{all_wages_for, hours_worked_on_date};

/// Sums the wages of every employee across every recorded date.
///
/// Employees are processed in input order; the first failing lookup aborts
/// the whole calculation.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::calculate_payroll;
/// use timecard_payroll::config::PayrollSettings;
/// use timecard_payroll::models::EmployeeFields;
/// use timecard_payroll::records::{create_employee_records, create_time_in_event, create_time_out_event};
/// use rust_decimal::Decimal;
///
/// let settings = PayrollSettings::default();
/// let mut employees = create_employee_records(vec![
///     EmployeeFields::from(("John", "Doe", "Engineer", Decimal::from(25))),
///     EmployeeFields::from(("Jane", "Smith", "Manager", Decimal::from(30))),
/// ]);
/// create_time_in_event(&mut employees[0], "2024-07-21 0800", &settings)?;
/// create_time_out_event(&mut employees[0], "2024-07-21 1700", &settings)?;
/// create_time_in_event(&mut employees[1], "2024-07-21 0900", &settings)?;
/// create_time_out_event(&mut employees[1], "2024-07-21 1800", &settings)?;
///
/// assert_eq!(calculate_payroll(&employees, &settings)?, Decimal::from(495));
/// # Ok::<(), timecard_payroll::error::PayrollError>(())
/// ```
pub fn calculate_payroll(
    records: &[EmployeeRecord],
    settings: &PayrollSettings,
) -> PayrollResult<Decimal> {
    let mut total = Decimal::ZERO;
    for record in records {
        total += all_wages_for(record, settings)?;
    }

    info!(employees = records.len(), total = %total, "Calculated payroll");
    Ok(total)
}

/// Builds an itemised payroll report.
///
/// Produces one [`PayrollLine`] per employee per time-in date (in the same
/// order [`calculate_payroll`] visits them), per-employee totals, and grand
/// totals. The report total always equals [`calculate_payroll`] for the same
/// inputs.
pub fn payroll_report(
    records: &[EmployeeRecord],
    settings: &PayrollSettings,
) -> PayrollResult<PayrollReport> {
    let mut lines = Vec::new();
    let mut employees = Vec::with_capacity(records.len());

    for record in records {
        let name = record.full_name();
        let mut totals = EmployeeTotals {
            employee: name.clone(),
            title: record.title.clone(),
            days_worked: 0,
            hours: Decimal::ZERO,
            wages: Decimal::ZERO,
        };

        for date in record.time_in_events.dates() {
            let hours = hours_worked_on_date(record, date, settings)?;
            let amount = hours * record.pay_per_hour;

            totals.days_worked += 1;
            totals.hours += hours;
            totals.wages += amount;

            lines.push(PayrollLine {
                employee: name.clone(),
                date,
                hours,
                rate: record.pay_per_hour,
                amount,
            });
        }

        employees.push(totals);
    }

    let total_hours = employees.iter().map(|e| e.hours).sum();
    let total = employees.iter().map(|e| e.wages).sum();

    info!(
        employees = employees.len(),
        lines = lines.len(),
        total = %total,
        "Built payroll report"
    );

    Ok(PayrollReport {
        lines,
        employees,
        total_hours,
        total,
    })
}
