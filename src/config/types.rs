//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeFields, EventKind};

/// What to do when an event is recorded for a date that already has one of the same kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateEvent` and keep the existing event.
    #[default]
    Reject,
    /// Replace the existing event, keeping its position.
    Overwrite,
    /// Append the duplicate; lookups use the first event and wage totals count the date twice.
    Allow,
}

/// How hours are derived from a time-in/time-out pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursMethod {
    /// Elapsed minutes between the two clock times, divided by 60.
    #[default]
    Elapsed,
    /// `(time_out - time_in) / 100` on the raw HHMM values.
    ///
    /// Only matches elapsed time when both clock times fall on the hour.
    /// A time-out earlier than the time-in is rejected with
    /// `ClockOutBeforeClockIn` rather than yielding negative hours.
    ClockDifference,
}

/// Settings that govern event recording and hours calculation.
///
/// Loaded from `payroll.yaml`; every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Policy for same-date duplicate events.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Arithmetic used for hours worked.
    #[serde(default)]
    pub hours_method: HoursMethod,
}

/// A single clock event to apply to a roster employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    /// Position of the employee in the roster's `employees` list.
    pub employee: usize,
    /// Whether this is a time-in or a time-out.
    pub kind: EventKind,
    /// Timestamp in `YYYY-MM-DD HHMM` form.
    pub timestamp: String,
}

/// Employees and their punches, loaded from `roster.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Employee construction tuples, in order.
    #[serde(default)]
    pub employees: Vec<EmployeeFields>,
    /// Punches applied in order after the employees are created.
    #[serde(default)]
    pub punches: Vec<Punch>,
}
