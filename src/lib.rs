//! Timecard payroll engine
//!
//! This crate keeps employee records with clock-in/clock-out events and
//! derives hours worked, daily wages, and payroll totals from them.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
