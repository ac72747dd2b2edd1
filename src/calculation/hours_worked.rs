//! Hours worked on a single date.
//!
//! This module pairs an employee's first time-in and first time-out on a
//! date and converts the pair into hours using the configured method.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{HoursMethod, PayrollSettings};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, EventKind, TimeEvent};

/// Calculates the hours an employee worked on `date`.
///
/// Uses the first time-in and first time-out recorded on the date.
///
/// # Arguments
///
/// * `record` - The employee whose events are read
/// * `date` - The date worked
/// * `settings` - Selects [`HoursMethod::Elapsed`] or [`HoursMethod::ClockDifference`]
///
/// # Returns
///
/// The hours worked as a Decimal, or an error if:
/// - No time-in or no time-out was recorded on the date (`EventNotFound`)
/// - The time-out is earlier than the time-in (`ClockOutBeforeClockIn`)
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::hours_worked_on_date;
/// use timecard_payroll::config::{HoursMethod, PayrollSettings};
/// use timecard_payroll::models::EmployeeFields;
/// use timecard_payroll::records::{create_employee_record, create_time_in_event, create_time_out_event};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = PayrollSettings::default();
/// let mut record = create_employee_record(EmployeeFields::from((
///     "John", "Doe", "Engineer", Decimal::from(25),
/// )));
/// create_time_in_event(&mut record, "2024-07-21 0830", &settings)?;
/// create_time_out_event(&mut record, "2024-07-21 1700", &settings)?;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 21).unwrap();
/// assert_eq!(hours_worked_on_date(&record, date, &settings)?, Decimal::new(85, 1));
///
/// let legacy = PayrollSettings { hours_method: HoursMethod::ClockDifference, ..settings };
/// assert_eq!(hours_worked_on_date(&record, date, &legacy)?, Decimal::new(87, 1));
/// # Ok::<(), timecard_payroll::error::PayrollError>(())
/// ```
pub fn hours_worked_on_date(
    record: &EmployeeRecord,
    date: NaiveDate,
    settings: &PayrollSettings,
) -> PayrollResult<Decimal> {
    let time_in = record
        .time_in_events
        .first_on(date)
        .ok_or(PayrollError::EventNotFound {
            kind: EventKind::TimeIn,
            date,
        })?;
    let time_out = record
        .time_out_events
        .first_on(date)
        .ok_or(PayrollError::EventNotFound {
            kind: EventKind::TimeOut,
            date,
        })?;

    let hours = match settings.hours_method {
        HoursMethod::Elapsed => elapsed_hours(time_in, time_out),
        HoursMethod::ClockDifference => clock_difference_hours(time_in, time_out),
    }
    .ok_or(PayrollError::ClockOutBeforeClockIn {
        date,
        time_in: time_in.hour,
        time_out: time_out.hour,
    })?;

    debug!(
        employee = %record.full_name(),
        date = %date,
        time_in = time_in.hour,
        time_out = time_out.hour,
        hours = %hours,
        "Calculated hours worked"
    );

    Ok(hours)
}

/// Returns `None` when the time-out precedes the time-in.
fn elapsed_hours(time_in: &TimeEvent, time_out: &TimeEvent) -> Option<Decimal> {
    let minutes = time_out
        .minutes_since_midnight()
        .checked_sub(time_in.minutes_since_midnight())?;
    Some(Decimal::from(minutes) / Decimal::from(60))
}

/// Returns `None` when the time-out precedes the time-in.
fn clock_difference_hours(time_in: &TimeEvent, time_out: &TimeEvent) -> Option<Decimal> {
    let difference = time_out.hour.checked_sub(time_in.hour)?;
    Some(Decimal::from(difference) / Decimal::from(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::models::EmployeeFields;
    use crate::records::{create_employee_record, create_time_in_event, create_time_out_event};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn elapsed() -> PayrollSettings {
        PayrollSettings::default()
    }

    fn clock_difference() -> PayrollSettings {
        PayrollSettings {
            hours_method: HoursMethod::ClockDifference,
            ..PayrollSettings::default()
        }
    }

    fn record_with_shift(time_in: &str, time_out: &str) -> EmployeeRecord {
        let settings = PayrollSettings::default();
        let mut record = create_employee_record(EmployeeFields::from((
            "John",
            "Doe",
            "Engineer",
            Decimal::from(25),
        )));
        create_time_in_event(&mut record, time_in, &settings).unwrap();
        create_time_out_event(&mut record, time_out, &settings).unwrap();
        record
    }

    /// On-the-hour shifts agree under both methods.
    #[test]
    fn test_on_the_hour_shift() {
        let record = record_with_shift("2024-07-21 0800", "2024-07-21 1700");
        let date = make_date("2024-07-21");

        assert_eq!(
            hours_worked_on_date(&record, date, &elapsed()).unwrap(),
            Decimal::from(9)
        );
        assert_eq!(
            hours_worked_on_date(&record, date, &clock_difference()).unwrap(),
            Decimal::from(9)
        );
    }

    #[test]
    fn test_half_hour_clock_in() {
        let record = record_with_shift("2024-07-21 0830", "2024-07-21 1700");
        let date = make_date("2024-07-21");

        assert_eq!(
            hours_worked_on_date(&record, date, &elapsed()).unwrap(),
            Decimal::new(85, 1)
        );
        assert_eq!(
            hours_worked_on_date(&record, date, &clock_difference()).unwrap(),
            Decimal::new(87, 1)
        );
    }

    #[test]
    fn test_quarter_hours() {
        let record = record_with_shift("2024-07-21 0945", "2024-07-21 1215");
        let date = make_date("2024-07-21");

        assert_eq!(
            hours_worked_on_date(&record, date, &elapsed()).unwrap(),
            Decimal::new(25, 1)
        );
    }

    #[test]
    fn test_zero_length_shift() {
        let record = record_with_shift("2024-07-21 0900", "2024-07-21 0900");

        assert_eq!(
            hours_worked_on_date(&record, make_date("2024-07-21"), &elapsed()).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_missing_time_out() {
        let mut record = create_employee_record(EmployeeFields::from((
            "John",
            "Doe",
            "Engineer",
            Decimal::from(25),
        )));
        create_time_in_event(&mut record, "2024-07-21 0800", &elapsed()).unwrap();

        match hours_worked_on_date(&record, make_date("2024-07-21"), &elapsed()) {
            Err(PayrollError::EventNotFound { kind, date }) => {
                assert_eq!(kind, EventKind::TimeOut);
                assert_eq!(date, make_date("2024-07-21"));
            }
            other => panic!("Expected EventNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_time_in() {
        let record = record_with_shift("2024-07-21 0800", "2024-07-21 1700");

        match hours_worked_on_date(&record, make_date("2024-07-22"), &elapsed()) {
            Err(PayrollError::EventNotFound { kind, .. }) => {
                assert_eq!(kind, EventKind::TimeIn);
            }
            other => panic!("Expected EventNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_clock_out_before_clock_in() {
        let record = record_with_shift("2024-07-21 1700", "2024-07-21 0800");

        let result = hours_worked_on_date(&record, make_date("2024-07-21"), &clock_difference());
        assert!(matches!(
            result,
            Err(PayrollError::ClockOutBeforeClockIn {
                time_in: 1700,
                time_out: 800,
                ..
            })
        ));
    }

    #[test]
    fn test_reversed_pair_under_elapsed_is_an_error() {
        let record = record_with_shift("2024-07-21 1730", "2024-07-21 0845");

        let result = hours_worked_on_date(&record, make_date("2024-07-21"), &elapsed());
        assert!(matches!(
            result,
            Err(PayrollError::ClockOutBeforeClockIn {
                time_in: 1730,
                time_out: 845,
                ..
            })
        ));
    }

    #[test]
    fn test_events_pushed_through_log_with_bad_minutes_are_rejected() {
        let settings = elapsed();
        let mut record = create_employee_record(EmployeeFields::from((
            "John",
            "Doe",
            "Engineer",
            Decimal::from(25),
        )));
        let date = make_date("2024-07-21");

        let time_in = TimeEvent {
            kind: EventKind::TimeIn,
            date,
            hour: 1299,
        };
        let result = record
            .time_in_events
            .record(time_in, settings.duplicate_policy);
        assert!(matches!(
            result,
            Err(PayrollError::MalformedTimestamp { .. })
        ));

        let time_out = TimeEvent {
            kind: EventKind::TimeOut,
            date,
            hour: 1300,
        };
        record
            .time_out_events
            .record(time_out, settings.duplicate_policy)
            .unwrap();

        // The bad time-in never landed, so the lookup fails cleanly.
        assert!(matches!(
            hours_worked_on_date(&record, date, &settings),
            Err(PayrollError::EventNotFound {
                kind: EventKind::TimeIn,
                ..
            })
        ));
    }

    #[test]
    fn test_first_match_with_allowed_duplicates() {
        let settings = PayrollSettings {
            duplicate_policy: DuplicatePolicy::Allow,
            hours_method: HoursMethod::ClockDifference,
        };
        let mut record = create_employee_record(EmployeeFields::from((
            "John",
            "Doe",
            "Engineer",
            Decimal::from(25),
        )));
        create_time_in_event(&mut record, "2024-07-21 0800", &settings).unwrap();
        create_time_in_event(&mut record, "2024-07-21 1000", &settings).unwrap();
        create_time_out_event(&mut record, "2024-07-21 1700", &settings).unwrap();
        create_time_out_event(&mut record, "2024-07-21 1800", &settings).unwrap();

        // First time-in (0800) and first time-out (1700).
        assert_eq!(
            hours_worked_on_date(&record, make_date("2024-07-21"), &settings).unwrap(),
            Decimal::from(9)
        );
    }
}
