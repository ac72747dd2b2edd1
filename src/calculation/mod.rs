//! Calculation logic for the timecard payroll engine.
//!
//! This module contains the aggregation functions: hours worked on a date,
//! wages earned on a date, wages across all of an employee's dates, and the
//! payroll total and itemised report across employees.

mod hours_worked;
mod payroll;
mod wages;

pub use hours_worked::hours_worked_on_date;
pub use payroll::{calculate_payroll, payroll_report};
pub use wages::{all_wages_for, wages_earned_on_date};
