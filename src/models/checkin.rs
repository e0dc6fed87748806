//! Check-in models

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::event::EventId;

/// `detail` field of a failed backend response
///
/// The backend sends either a plain string or the structured result of the
/// failed check-in (`{success, message, reason, ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Plain(String),
    Structured {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        reason: Option<String>,
    },
    Other(serde_json::Value),
}

impl ErrorDetail {
    /// Human readable message carried by the detail
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorDetail::Plain(text) => Some(text.as_str()),
            ErrorDetail::Structured { message, .. } => message.as_deref(),
            ErrorDetail::Other(_) => None,
        }
    }

    /// Machine readable reason code (`not_found`, `wrong_event`, ...)
    pub fn reason(&self) -> Option<&str> {
        match self {
            ErrorDetail::Structured { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }
}

/// Response of `GET /checkin/stats/{event_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
    pub total_registrations: u64,
    pub checked_in_registrations: u64,
    pub csv_checkins: u64,
    #[serde(default)]
    pub total_checkins: u64,
    pub remaining_capacity: i64,
}

/// Point-in-time stats for the selected event, as rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStatsSnapshot {
    pub event_id: EventId,
    pub total_registrations: u64,
    pub checked_in_registrations: u64,
    pub csv_checkins: u64,
    pub remaining_capacity: i64,
    pub total_checkins: u64,
}

impl EventStatsSnapshot {
    pub fn new(event_id: EventId, stats: &EventStats) -> Self {
        Self {
            event_id,
            total_registrations: stats.total_registrations,
            checked_in_registrations: stats.checked_in_registrations,
            csv_checkins: stats.csv_checkins,
            remaining_capacity: stats.remaining_capacity,
            total_checkins: stats.total_checkins,
        }
    }
}

/// Where a check-in was recorded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinSource {
    Qr,
    Csv,
    Email,
    Manual,
    #[serde(other)]
    Unknown,
}

impl CheckinSource {
    /// Badge shown next to a recent check-in
    pub fn badge(&self) -> &'static str {
        match self {
            CheckinSource::Qr => "🎫 QR",
            _ => "📧 Email",
        }
    }
}

/// Entry of `GET /checkin/recent/{event_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentCheckin {
    pub email: String,
    pub checked_in_at: String,
    pub source: CheckinSource,
}

impl RecentCheckin {
    /// Local wall-clock time of the check-in, or the raw value if unparseable
    pub fn display_time(&self) -> String {
        let raw = self.checked_in_at.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.with_timezone(&Local).format("%H:%M:%S").to_string();
        }
        // Backend timestamps without an offset are UTC
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.and_utc().with_timezone(&Local).format("%H:%M:%S").to_string();
        }
        raw.to_string()
    }
}

/// Successful response of `POST /checkin/email`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailCheckinResponse {
    #[serde(default)]
    pub message: String,
    pub participant_name: String,
    pub email: String,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Successful response of `POST /checkin/qr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCheckinResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub participant_name: String,
    pub email: String,
    #[serde(default)]
    pub college: Option<String>,
    pub event_name: String,
}
