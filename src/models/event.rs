//! Event model

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Backend identifier of an event
pub type EventId = i64;

/// Event as listed by `GET /events/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Date as sent by the backend; see [`Event::event_day`]
    pub event_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub registration_open: Option<bool>,
}

impl Event {
    /// Calendar day of the event in local time
    ///
    /// Accepts RFC 3339 timestamps, naive ISO date-times and plain dates.
    pub fn event_day(&self) -> Option<NaiveDate> {
        let raw = self.event_date.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local).date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Label used in event pickers: `"<name> - <date>"`
    pub fn display_label(&self) -> String {
        match self.event_day() {
            Some(day) => format!("{} - {}", self.name, day.format("%Y-%m-%d")),
            None => format!("{} - {}", self.name, self.event_date),
        }
    }
}
