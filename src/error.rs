//! Error types for the timecard payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording time events and
//! aggregating wages.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::EventKind;

/// The main error type for the timecard payroll engine.
///
/// Every fallible operation in the crate returns this error type, so lookups,
/// timestamp parsing and configuration loading can all be propagated with `?`.
///
/// # Example
///
/// ```
/// use timecard_payroll::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// No event of the requested kind was recorded on the requested date.
    #[error("No {kind} event recorded on {date}")]
    EventNotFound {
        /// The kind of event that was looked up.
        kind: EventKind,
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// A timestamp did not match the `YYYY-MM-DD HHMM` format.
    #[error("Malformed timestamp '{timestamp}': {message}")]
    MalformedTimestamp {
        /// The raw timestamp that failed to parse.
        timestamp: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A second event of the same kind was recorded for a date that already has one.
    #[error("Duplicate {kind} event on {date}")]
    DuplicateEvent {
        /// The kind of the rejected event.
        kind: EventKind,
        /// The date that already holds an event of this kind.
        date: NaiveDate,
    },

    /// The time-out on a date is earlier than the time-in.
    #[error("Time out {time_out:04} is earlier than time in {time_in:04} on {date}")]
    ClockOutBeforeClockIn {
        /// The date of the inconsistent pair.
        date: NaiveDate,
        /// The recorded time-in clock value (HHMM).
        time_in: u32,
        /// The recorded time-out clock value (HHMM).
        time_out: u32,
    },

    /// No employee exists at the given position in a record store.
    #[error("Employee not found at index {index}")]
    EmployeeNotFound {
        /// The index that was requested.
        index: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
