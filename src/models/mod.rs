//! Core data models for the timecard payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod event;
mod payroll_report;

pub use employee::{EmployeeFields, EmployeeRecord};
pub use event::{EventKind, EventLog, TimeEvent};
pub use payroll_report::{EmployeeTotals, PayrollLine, PayrollReport};
