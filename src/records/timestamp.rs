//! Timestamp parsing for clock events.
//!
//! Timestamps have the exact form `YYYY-MM-DD HHMM`: a calendar date, a
//! single space, and a four-digit 24-hour clock value.

use chrono::NaiveDate;

use crate::error::{PayrollError, PayrollResult};

/// Parses a `YYYY-MM-DD HHMM` timestamp into its date and clock value.
///
/// The clock value is returned as the integer read from the four digits,
/// so `"0800"` becomes `800`.
///
/// # Examples
///
/// ```
/// use timecard_payroll::records::parse_timestamp;
/// use chrono::NaiveDate;
///
/// let (date, hour) = parse_timestamp("2024-07-21 0830").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 21).unwrap());
/// assert_eq!(hour, 830);
/// ```
pub fn parse_timestamp(timestamp: &str) -> PayrollResult<(NaiveDate, u32)> {
    let malformed = |message: &str| PayrollError::MalformedTimestamp {
        timestamp: timestamp.to_string(),
        message: message.to_string(),
    };

    let (date_part, clock_part) = timestamp
        .split_once(' ')
        .ok_or_else(|| malformed("expected a single space between date and time"))?;

    if date_part.len() != 10 {
        return Err(malformed(&format!(
            "invalid date '{}': expected YYYY-MM-DD",
            date_part
        )));
    }

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| malformed(&format!("invalid date '{}': {}", date_part, e)))?;

    if clock_part.len() != 4 || !clock_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("time must be exactly four digits (HHMM)"));
    }

    // Four ASCII digits always fit in a u32.
    let hour: u32 = clock_part
        .parse()
        .map_err(|_| malformed("time must be exactly four digits (HHMM)"))?;

    if hour / 100 > 23 {
        return Err(malformed("hour must be between 00 and 23"));
    }
    if hour % 100 > 59 {
        return Err(malformed("minute must be between 00 and 59"));
    }

    Ok((date, hour))
}
