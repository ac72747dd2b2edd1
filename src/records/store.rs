//! The in-memory record store.

use rust_decimal::Decimal;

use crate::calculation::{calculate_payroll, payroll_report};
use crate::config::{PayrollSettings, Roster};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeFields, EmployeeRecord, EventKind, PayrollReport};

use super::recording::{create_employee_record, record_event};

/// An ordered collection of employee records and the settings applied to them.
///
/// The store is plain caller-owned data; nothing in the crate keeps
/// process-wide state.
///
/// # Example
///
/// ```
/// use timecard_payroll::config::PayrollSettings;
/// use timecard_payroll::models::EmployeeFields;
/// use timecard_payroll::records::RecordStore;
/// use rust_decimal::Decimal;
///
/// let mut store = RecordStore::new(PayrollSettings::default());
/// let john = store.add_employee(EmployeeFields::from(("John", "Doe", "Engineer", Decimal::from(25))));
///
/// store.clock_in(john, "2024-07-21 0800")?;
/// store.clock_out(john, "2024-07-21 1700")?;
///
/// assert_eq!(store.total_payroll()?, Decimal::from(225));
/// # Ok::<(), timecard_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<EmployeeRecord>,
    settings: PayrollSettings,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new(settings: PayrollSettings) -> Self {
        Self {
            records: Vec::new(),
            settings,
        }
    }

    /// Wraps existing records.
    pub fn from_records(records: Vec<EmployeeRecord>, settings: PayrollSettings) -> Self {
        Self { records, settings }
    }

    /// Builds a store from a roster, creating every employee and then applying
    /// each punch in order.
    ///
    /// Fails on the first punch that names an unknown employee, carries a
    /// malformed timestamp, or is rejected as a duplicate.
    pub fn from_roster(roster: &Roster, settings: PayrollSettings) -> PayrollResult<Self> {
        let mut store = Self::new(settings);
        store.add_employees(roster.employees.iter().cloned());

        for punch in &roster.punches {
            store.punch(punch.employee, punch.kind, &punch.timestamp)?;
        }

        Ok(store)
    }

    /// Adds an employee and returns their index.
    pub fn add_employee(&mut self, fields: EmployeeFields) -> usize {
        self.records.push(create_employee_record(fields));
        self.records.len() - 1
    }

    /// Adds employees in order.
    pub fn add_employees<I>(&mut self, list: I)
    where
        I: IntoIterator<Item = EmployeeFields>,
    {
        self.records
            .extend(list.into_iter().map(create_employee_record));
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> PayrollResult<&EmployeeRecord> {
        self.records
            .get(index)
            .ok_or(PayrollError::EmployeeNotFound { index })
    }

    /// Returns the index of the first employee with the given names.
    pub fn find(&self, first_name: &str, family_name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.first_name == first_name && r.family_name == family_name)
    }

    /// Records a time-in for the employee at `index`.
    pub fn clock_in(&mut self, index: usize, timestamp: &str) -> PayrollResult<&EmployeeRecord> {
        self.punch(index, EventKind::TimeIn, timestamp)
    }

    /// Records a time-out for the employee at `index`.
    pub fn clock_out(&mut self, index: usize, timestamp: &str) -> PayrollResult<&EmployeeRecord> {
        self.punch(index, EventKind::TimeOut, timestamp)
    }

    fn punch(
        &mut self,
        index: usize,
        kind: EventKind,
        timestamp: &str,
    ) -> PayrollResult<&EmployeeRecord> {
        let policy = self.settings.duplicate_policy;
        let record = self
            .records
            .get_mut(index)
            .ok_or(PayrollError::EmployeeNotFound { index })?;

        let record = record_event(record, kind, timestamp, policy)?;
        Ok(&*record)
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the settings applied by this store.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no employees.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sums wages for every employee over every recorded date.
    pub fn total_payroll(&self) -> PayrollResult<Decimal> {
        calculate_payroll(&self.records, &self.settings)
    }

    /// Builds an itemised payroll report for every employee.
    pub fn report(&self) -> PayrollResult<PayrollReport> {
        payroll_report(&self.records, &self.settings)
    }
}
