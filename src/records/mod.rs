//! Record store for the timecard payroll engine.
//!
//! This module creates employee records, parses clock timestamps, records
//! time-in and time-out events under the configured duplicate policy, and
//! provides the [`RecordStore`] collection.

mod recording;
mod store;
mod timestamp;

pub use recording::{
    create_employee_record, create_employee_records, create_time_in_event, create_time_out_event,
};
pub use store::RecordStore;
pub use timestamp::parse_timestamp;
