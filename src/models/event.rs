//! Time event model and the per-employee event log.
//!
//! This module defines the [`TimeEvent`] struct and [`EventKind`] enum for
//! clock-in/clock-out markers, and the [`EventLog`] that keeps them in
//! insertion order with a per-date index.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::DuplicatePolicy;
use crate::error::{PayrollError, PayrollResult};

/// Whether an event marks the start or the end of a work period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The employee clocked in.
    TimeIn,
    /// The employee clocked out.
    TimeOut,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::TimeIn => f.write_str("TimeIn"),
            EventKind::TimeOut => f.write_str("TimeOut"),
        }
    }
}

/// A single clock-in or clock-out marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvent {
    /// Whether this is a time-in or a time-out.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// The calendar date of the event.
    pub date: NaiveDate,
    /// The 24-hour clock value as an integer (e.g. `"0830"` is stored as `830`).
    pub hour: u32,
}

impl TimeEvent {
    /// Returns the number of minutes between midnight and this event.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_payroll::models::{EventKind, TimeEvent};
    /// use chrono::NaiveDate;
    ///
    /// let event = TimeEvent {
    ///     kind: EventKind::TimeIn,
    ///     date: NaiveDate::from_ymd_opt(2024, 7, 21).unwrap(),
    ///     hour: 830,
    /// };
    /// assert_eq!(event.minutes_since_midnight(), 510);
    /// ```
    pub fn minutes_since_midnight(&self) -> u32 {
        (self.hour / 100) * 60 + self.hour % 100
    }
}

/// An append-ordered sequence of events of one kind, indexed by date.
///
/// The index always points at the first event recorded on a date, so
/// lookups keep first-match semantics even when duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<TimeEvent>,
    #[serde(skip)]
    by_date: HashMap<NaiveDate, usize>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            by_date: HashMap::new(),
        }
    }

    /// Records an event, applying the duplicate policy if its date is already present.
    ///
    /// Fails with `MalformedTimestamp` if the clock value is not a valid
    /// HHMM time, or with `DuplicateEvent` under [`DuplicatePolicy::Reject`].
    /// On error the log is left unchanged.
    pub fn record(&mut self, event: TimeEvent, policy: DuplicatePolicy) -> PayrollResult<()> {
        if event.hour / 100 > 23 || event.hour % 100 > 59 {
            return Err(PayrollError::MalformedTimestamp {
                timestamp: format!("{} {:04}", event.date.format("%Y-%m-%d"), event.hour),
                message: "clock value must be a valid HHMM time".to_string(),
            });
        }

        match (self.by_date.get(&event.date).copied(), policy) {
            (None, _) => {
                self.by_date.insert(event.date, self.events.len());
                self.events.push(event);
            }
            (Some(_), DuplicatePolicy::Reject) => {
                return Err(PayrollError::DuplicateEvent {
                    kind: event.kind,
                    date: event.date,
                });
            }
            (Some(position), DuplicatePolicy::Overwrite) => {
                self.events[position] = event;
            }
            (Some(_), DuplicatePolicy::Allow) => {
                self.events.push(event);
            }
        }
        Ok(())
    }

    /// Returns the first event recorded on `date`, if any.
    pub fn first_on(&self, date: NaiveDate) -> Option<&TimeEvent> {
        self.by_date.get(&date).map(|&position| &self.events[position])
    }

    /// Returns the dates of all events in recorded order, repeats included.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.events.iter().map(|e| e.date)
    }

    /// Returns the most recently recorded event.
    pub fn last(&self) -> Option<&TimeEvent> {
        self.events.last()
    }

    /// Returns all events in recorded order.
    pub fn as_slice(&self) -> &[TimeEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
