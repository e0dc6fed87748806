//! Text rendering of view models
//!
//! Pure functions shared by every text-based view. They hold the exact
//! operator-facing wording so controllers and views stay free of it.

use crate::dashboard::{EmailCheckinStatus, OverallStats, ResultKind};
use crate::models::{
    CsvStats, Event, EventId, EventStatsSnapshot, Participant, ParticipantLookup, RecentCheckin,
    UploadResult,
};
use crate::scanner::{RecentScanEntry, RecentScans, ScanResult};
use crate::utils::helpers::format_local_time;

/// Summary shown after a completed CSV upload
pub fn upload_message(result: &UploadResult, preview_limit: usize) -> String {
    let mut message = String::from("✅ Upload Complete!\n\n");
    message.push_str(&format!("Total rows: {}\n", result.total_rows));
    message.push_str(&format!("✔ Imported: {}\n", result.imported));
    message.push_str(&format!("⚠ Duplicates: {}\n", result.duplicates));
    message.push_str(&format!("❌ Errors: {}", result.errors));

    if !result.error_details.is_empty() && preview_limit > 0 {
        let preview: Vec<&str> = result
            .error_details
            .iter()
            .take(preview_limit)
            .map(String::as_str)
            .collect();
        message.push_str("\n\nFirst few errors:\n");
        message.push_str(&preview.join("\n"));
    }

    message
}

/// Result class of a completed upload
pub fn upload_kind(result: &UploadResult) -> ResultKind {
    if result.errors > 0 {
        ResultKind::Info
    } else {
        ResultKind::Success
    }
}

pub fn csv_stats(stats: &CsvStats) -> String {
    let mut text = format!("{}  Total Hackathon Participants", stats.total_participants);
    if let Some(latest) = &stats.latest_import {
        text.push_str(&format!(" (latest import: {})", latest));
    }
    text
}

pub fn participant_line(participant: &Participant) -> String {
    format!(
        "{} <{}>  {}",
        participant.name,
        participant.email,
        participant.college.as_deref().unwrap_or("-")
    )
}

pub fn participants(participants: &[Participant]) -> String {
    if participants.is_empty() {
        return "No participants imported yet.".to_string();
    }
    participants
        .iter()
        .map(participant_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn participant_lookup(email: &str, lookup: &ParticipantLookup) -> String {
    match (&lookup.participant, lookup.exists) {
        (Some(participant), true) => format!("✅ {}", participant_line(participant)),
        (None, true) => format!("✅ {} is a hackathon participant", email),
        _ => format!(
            "❌ {}",
            lookup
                .message
                .clone()
                .unwrap_or_else(|| format!("{} not found in hackathon participants", email))
        ),
    }
}

/// Event picker; the selected entry is marked
pub fn event_options(events: &[Event], selected: Option<EventId>) -> String {
    if events.is_empty() {
        return "Select an event... (no events available)".to_string();
    }
    events
        .iter()
        .map(|event| {
            let marker = if Some(event.id) == selected { "▶" } else { " " };
            format!("{} [{}] {}", marker, event.id, event.display_label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn event_stats(stats: &EventStatsSnapshot) -> String {
    format!(
        "{}  Total Registrations\n{}  Checked In\n{}  CSV Check-ins\n{}  Remaining Capacity",
        stats.total_registrations,
        stats.checked_in_registrations,
        stats.csv_checkins,
        stats.remaining_capacity
    )
}

pub fn recent_checkins(checkins: &[RecentCheckin]) -> String {
    if checkins.is_empty() {
        return "No check-ins yet.".to_string();
    }
    checkins
        .iter()
        .map(|c| format!("{}  {}  {}", c.email, c.display_time(), c.source.badge()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn email_checkin(status: &EmailCheckinStatus) -> String {
    match status {
        EmailCheckinStatus::Processing => "Processing...".to_string(),
        EmailCheckinStatus::Blocked(message) => message.clone(),
        EmailCheckinStatus::CheckedIn(response) => {
            let mut text = format!(
                "✅ {}\nName: {}\nEmail: {}",
                response.message, response.participant_name, response.email
            );
            if let Some(college) = &response.college {
                text.push_str(&format!("\nCollege: {}", college));
            }
            text
        }
        EmailCheckinStatus::Rejected(message) => format!("❌ Check-in Failed\n{}", message),
        EmailCheckinStatus::Failed(message) => format!("Error: {}", message),
    }
}

pub fn overall_stats(stats: &OverallStats) -> String {
    format!(
        "{}  Total Events\n{}  Total Registrations\n{}  Total Check-ins\n{}  Hackathon Participants",
        stats.total_events, stats.total_registrations, stats.total_checkins, stats.total_participants
    )
}

pub fn scan_result(result: &ScanResult) -> String {
    match result {
        ScanResult::CheckedIn(response) => {
            let mut text = format!(
                "✅ Check-in Successful!\nName: {}\nEmail: {}",
                response.participant_name, response.email
            );
            if let Some(college) = &response.college {
                text.push_str(&format!("\nCollege: {}", college));
            }
            text.push_str(&format!("\nEvent: {}", response.event_name));
            text
        }
        ScanResult::Failed { message, reason } => {
            let mut text = format!("❌ Check-in Failed\n{}", message);
            if let Some(reason) = reason {
                text.push_str(&format!("\nReason: {}", reason));
            }
            text
        }
    }
}

pub fn recent_scan_line(entry: &RecentScanEntry) -> String {
    let time = format_local_time(entry.timestamp);
    if entry.success {
        format!(
            "✅ {}  {} - {}",
            entry.name.as_deref().unwrap_or("-"),
            time,
            entry.email.as_deref().unwrap_or("-")
        )
    } else {
        format!("❌ Failed  {} - {}", time, entry.message.as_deref().unwrap_or("-"))
    }
}

pub fn recent_scans(scans: &RecentScans) -> String {
    if scans.is_empty() {
        return "No scans yet".to_string();
    }
    scans.iter().map(recent_scan_line).collect::<Vec<_>>().join("\n")
}
