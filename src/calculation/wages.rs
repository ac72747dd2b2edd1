//! Wage calculation for a single employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PayrollSettings;
use crate::error::PayrollResult;
use crate::models::EmployeeRecord;

use super::hours_worked_on_date;

/// Calculates the wages an employee earned on `date`.
///
/// Wages are hours worked on the date multiplied by the employee's hourly
/// rate. Fails under the same conditions as [`hours_worked_on_date`].
pub fn wages_earned_on_date(
    record: &EmployeeRecord,
    date: NaiveDate,
    settings: &PayrollSettings,
) -> PayrollResult<Decimal> {
    let hours = hours_worked_on_date(record, date, settings)?;
    Ok(hours * record.pay_per_hour)
}

/// Calculates the wages an employee earned across every recorded date.
///
/// Iterates the dates of the employee's time-in events in recorded order.
/// A date recorded twice (only possible under `DuplicatePolicy::Allow`) is
/// counted twice. An employee with no events earns zero.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::all_wages_for;
/// use timecard_payroll::config::PayrollSettings;
/// use timecard_payroll::models::EmployeeFields;
/// use timecard_payroll::records::{create_employee_record, create_time_in_event, create_time_out_event};
/// use rust_decimal::Decimal;
///
/// let settings = PayrollSettings::default();
/// let mut record = create_employee_record(EmployeeFields::from((
///     "Jane", "Smith", "Manager", Decimal::from(30),
/// )));
/// create_time_in_event(&mut record, "2024-07-21 0900", &settings)?;
/// create_time_out_event(&mut record, "2024-07-21 1800", &settings)?;
/// create_time_in_event(&mut record, "2024-07-22 0900", &settings)?;
/// create_time_out_event(&mut record, "2024-07-22 1300", &settings)?;
///
/// assert_eq!(all_wages_for(&record, &settings)?, Decimal::from(390));
/// # Ok::<(), timecard_payroll::error::PayrollError>(())
/// ```
pub fn all_wages_for(record: &EmployeeRecord, settings: &PayrollSettings) -> PayrollResult<Decimal> {
    record
        .time_in_events
        .dates()
        .try_fold(Decimal::ZERO, |total, date| -> PayrollResult<Decimal> {
            Ok(total + wages_earned_on_date(record, date, settings)?)
        })
}
