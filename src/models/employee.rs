//! Employee model and related types.
//!
//! This module defines the [`EmployeeFields`] construction tuple and the
//! [`EmployeeRecord`] that accumulates an employee's time events.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EventLog;

/// The fixed-position fields an employee record is built from.
///
/// Serialized as a four-element sequence
/// `[first_name, family_name, title, pay_per_hour]`.
///
/// # Examples
///
/// ```
/// use timecard_payroll::models::EmployeeFields;
/// use rust_decimal::Decimal;
///
/// let fields = EmployeeFields::from(("John", "Doe", "Engineer", Decimal::from(25)));
/// assert_eq!(fields.title, "Engineer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(String, String, String, Decimal)",
    into = "(String, String, String, Decimal)"
)]
pub struct EmployeeFields {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The employee's job title.
    pub title: String,
    /// The hourly pay rate.
    pub pay_per_hour: Decimal,
}

impl<S: Into<String>> From<(S, S, S, Decimal)> for EmployeeFields {
    fn from((first_name, family_name, title, pay_per_hour): (S, S, S, Decimal)) -> Self {
        Self {
            first_name: first_name.into(),
            family_name: family_name.into(),
            title: title.into(),
            pay_per_hour,
        }
    }
}

impl From<EmployeeFields> for (String, String, String, Decimal) {
    fn from(fields: EmployeeFields) -> Self {
        (
            fields.first_name,
            fields.family_name,
            fields.title,
            fields.pay_per_hour,
        )
    }
}

/// An employee together with every time event recorded for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The employee's job title.
    pub title: String,
    /// The hourly pay rate.
    pub pay_per_hour: Decimal,
    /// Clock-in events in recorded order.
    pub time_in_events: EventLog,
    /// Clock-out events in recorded order.
    pub time_out_events: EventLog,
}

impl EmployeeRecord {
    /// Returns "first family", used to label the employee in logs and reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
    }
}

impl From<EmployeeFields> for EmployeeRecord {
    fn from(fields: EmployeeFields) -> Self {
        Self {
            first_name: fields.first_name,
            family_name: fields.family_name,
            title: fields.title,
            pay_per_hour: fields.pay_per_hour,
            time_in_events: EventLog::new(),
            time_out_events: EventLog::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fields_from_sequence() {
        let json = r#"["Jane", "Smith", "Manager", 30]"#;

        let fields: EmployeeFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.first_name, "Jane");
        assert_eq!(fields.family_name, "Smith");
        assert_eq!(fields.title, "Manager");
        assert_eq!(fields.pay_per_hour, Decimal::from(30));
    }

    #[test]
    fn test_deserialize_fields_with_fractional_rate() {
        let json = r#"["Jane", "Smith", "Manager", "30.50"]"#;

        let fields: EmployeeFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.pay_per_hour, Decimal::new(3050, 2));
    }

    #[test]
    fn test_deserialize_fields_rejects_short_sequence() {
        let json = r#"["Jane", "Smith", "Manager"]"#;

        let result: Result<EmployeeFields, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_fields_as_sequence() {
        let fields = EmployeeFields::from(("John", "Doe", "Engineer", Decimal::from(25)));

        let json = serde_json::to_value(&fields).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0], "John");
        assert_eq!(json[2], "Engineer");
    }

    #[test]
    fn test_record_from_fields_starts_empty() {
        let fields = EmployeeFields::from(("John", "Doe", "Engineer", Decimal::from(25)));
        let record = EmployeeRecord::from(fields);

        assert_eq!(record.first_name, "John");
        assert_eq!(record.family_name, "Doe");
        assert_eq!(record.title, "Engineer");
        assert_eq!(record.pay_per_hour, Decimal::from(25));
        assert!(record.time_in_events.is_empty());
        assert!(record.time_out_events.is_empty());
    }

    #[test]
    fn test_full_name() {
        let record =
            EmployeeRecord::from(EmployeeFields::from(("Jane", "Smith", "Manager", Decimal::ONE)));
        assert_eq!(record.full_name(), "Jane Smith");
    }
}
