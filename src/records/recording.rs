//! Employee record creation and clock event recording.

use tracing::{debug, warn};

use crate::config::{DuplicatePolicy, PayrollSettings};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeFields, EmployeeRecord, EventKind, TimeEvent};

use super::timestamp::parse_timestamp;

/// Creates a new employee record with no time events.
///
/// # Examples
///
/// ```
/// use timecard_payroll::records::create_employee_record;
/// use timecard_payroll::models::EmployeeFields;
/// use rust_decimal::Decimal;
///
/// let record = create_employee_record(EmployeeFields::from((
///     "John", "Doe", "Engineer", Decimal::from(25),
/// )));
/// assert_eq!(record.pay_per_hour, Decimal::from(25));
/// assert!(record.time_in_events.is_empty());
/// ```
pub fn create_employee_record(fields: EmployeeFields) -> EmployeeRecord {
    EmployeeRecord::from(fields)
}

/// Creates one employee record per set of fields, preserving order.
pub fn create_employee_records<I>(list: I) -> Vec<EmployeeRecord>
where
    I: IntoIterator<Item = EmployeeFields>,
{
    list.into_iter().map(create_employee_record).collect()
}

/// Records a time-in event from a `YYYY-MM-DD HHMM` timestamp.
///
/// Returns the same record so calls can be chained. On error the record is
/// unchanged.
///
/// # Errors
///
/// - `MalformedTimestamp` if the timestamp does not parse
/// - `DuplicateEvent` if the date already has a time-in and the policy is `Reject`
///
/// # Examples
///
/// ```
/// use timecard_payroll::config::PayrollSettings;
/// use timecard_payroll::models::EmployeeFields;
/// use timecard_payroll::records::{create_employee_record, create_time_in_event, create_time_out_event};
/// use rust_decimal::Decimal;
///
/// let settings = PayrollSettings::default();
/// let mut record = create_employee_record(EmployeeFields::from((
///     "John", "Doe", "Engineer", Decimal::from(25),
/// )));
///
/// create_time_in_event(&mut record, "2024-07-21 0800", &settings)?;
/// create_time_out_event(&mut record, "2024-07-21 1700", &settings)?;
///
/// assert_eq!(record.time_in_events.last().unwrap().hour, 800);
/// assert_eq!(record.time_out_events.last().unwrap().hour, 1700);
/// # Ok::<(), timecard_payroll::error::PayrollError>(())
/// ```
pub fn create_time_in_event<'a>(
    record: &'a mut EmployeeRecord,
    timestamp: &str,
    settings: &PayrollSettings,
) -> PayrollResult<&'a mut EmployeeRecord> {
    record_event(record, EventKind::TimeIn, timestamp, settings.duplicate_policy)
}

/// Records a time-out event from a `YYYY-MM-DD HHMM` timestamp.
///
/// Same contract as [`create_time_in_event`], applied to the time-out sequence.
pub fn create_time_out_event<'a>(
    record: &'a mut EmployeeRecord,
    timestamp: &str,
    settings: &PayrollSettings,
) -> PayrollResult<&'a mut EmployeeRecord> {
    record_event(record, EventKind::TimeOut, timestamp, settings.duplicate_policy)
}

/// Records an event of the given kind.
pub(crate) fn record_event<'a>(
    record: &'a mut EmployeeRecord,
    kind: EventKind,
    timestamp: &str,
    policy: DuplicatePolicy,
) -> PayrollResult<&'a mut EmployeeRecord> {
    let (date, hour) = parse_timestamp(timestamp)?;
    let event = TimeEvent { kind, date, hour };

    let log = match kind {
        EventKind::TimeIn => &mut record.time_in_events,
        EventKind::TimeOut => &mut record.time_out_events,
    };
    let duplicate = log.first_on(date).is_some();

    if let Err(err) = log.record(event, policy) {
        if let PayrollError::DuplicateEvent { .. } = err {
            warn!(
                employee = %record.full_name(),
                kind = %kind,
                date = %date,
                "Rejected duplicate event"
            );
        }
        return Err(err);
    }

    if duplicate {
        warn!(
            employee = %record.full_name(),
            kind = %kind,
            date = %date,
            policy = ?policy,
            "Recorded event for a date that already had one"
        );
    } else {
        debug!(
            employee = %record.full_name(),
            kind = %kind,
            date = %date,
            hour,
            "Recorded event"
        );
    }

    Ok(record)
}
