use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A hosted gathering as returned by the remote API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Party {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// ISO-8601 timestamp
    pub date: String,
    pub location: String,
}

impl Party {
    /// The calendar day part of the timestamp (`YYYY-MM-DD`)
    pub fn calendar_date(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }
}

/// Raw values submitted through the create-event form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPartyForm {
    pub name: String,
    pub description: String,
    /// Value of the date picker (`YYYY-MM-DD`)
    pub date: String,
    pub location: String,
}

impl NewPartyForm {
    /// Convert the form into the request body, normalizing the date.
    pub fn into_request(self) -> Result<NewParty, String> {
        let date = normalize_date(&self.date)?;

        Ok(NewParty {
            name: self.name,
            description: self.description,
            date,
            location: self.location,
        })
    }
}

/// Request body for creating an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewParty {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

/// Normalize a date picker value to a full UTC timestamp with millisecond precision.
///
/// A bare calendar day maps to UTC midnight of that day. Full RFC 3339 timestamps
/// are converted to UTC.
///
/// # Example
/// ```
/// use party_planner_core::types::normalize_date;
/// assert_eq!(
///     normalize_date("2025-01-15").unwrap(),
///     "2025-01-15T00:00:00.000Z"
/// );
/// ```
pub fn normalize_date(value: &str) -> Result<String, String> {
    let value = value.trim();

    let timestamp = if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        day.and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc())
            .ok_or_else(|| format!("Invalid date: {value}"))?
    } else {
        DateTime::parse_from_rfc3339(value)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(|e| format!("Invalid date '{value}': {e}"))?
    };

    Ok(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
