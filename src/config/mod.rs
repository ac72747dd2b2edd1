//! Configuration loading and management for the timecard payroll engine.
//!
//! This module provides functionality to load payroll settings and employee
//! rosters from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timecard_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/demo").unwrap();
//! println!("Hours method: {:?}", config.settings().hours_method);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DuplicatePolicy, HoursMethod, PayrollSettings, Punch, Roster};
