//! Scheduled events managed from the admin back-office.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::validation::{self, MAX_LONG_TEXT, MAX_SHORT_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(EventStatus::Upcoming),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" => Ok(EventStatus::Cancelled),
            other => Err(CoreError::validation(format!("Unknown event status '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(alias = "date")]
    pub event_date: NaiveDate,
    #[serde(alias = "time", deserialize_with = "deserialize_clock_time")]
    pub event_time: NaiveTime,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: EventStatus,
}

impl EventDraft {
    pub fn validate(self) -> Result<Self, CoreError> {
        Ok(Self {
            title: validation::required_text("Title", &self.title, MAX_SHORT_TEXT)?,
            event_date: self.event_date,
            event_time: self.event_time,
            location: validation::required_text("Location", &self.location, MAX_SHORT_TEXT)?,
            description: validation::optional_text(
                "Description",
                Some(&self.description),
                MAX_LONG_TEXT,
            )?
            .unwrap_or_default(),
            status: self.status,
        })
    }
}

/// Parse a wall-clock time written as `HH:MM` (form inputs) or `HH:MM:SS`.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, CoreError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| CoreError::validation(format!("Invalid time '{value}', expected HH:MM")))
}

fn deserialize_clock_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_clock_time(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_form_style_time() {
        let draft: EventDraft = serde_json::from_value(serde_json::json!({
            "title": "Corporate Gala Dinner",
            "date": "2024-04-15",
            "time": "19:00",
            "location": "Grand Ballroom"
        }))
        .unwrap();
        assert_eq!(draft.event_time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(draft.status, EventStatus::Upcoming);
    }

    #[test]
    fn rejects_unknown_status() {
        let result: Result<EventDraft, _> = serde_json::from_value(serde_json::json!({
            "title": "Expo",
            "event_date": "2024-03-30",
            "event_time": "10:00:00",
            "location": "Convention Center",
            "status": "postponed"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn clock_time_errors_are_validation_errors() {
        assert!(matches!(parse_clock_time("7pm"), Err(CoreError::Validation(_))));
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [EventStatus::Upcoming, EventStatus::Completed, EventStatus::Cancelled] {
            assert_eq!(status.as_str().parse::<EventStatus>().unwrap(), status);
        }
    }
}
