//! Dashboard rendering contract

use crate::models::{
    CsvStats, EmailCheckinResponse, Event, EventId, EventStatsSnapshot, Participant,
    ParticipantLookup, RecentCheckin,
};

use super::tabs::Tab;

/// Visual class of a result box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Info,
    Error,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Success => "success",
            ResultKind::Info => "info",
            ResultKind::Error => "error",
        }
    }
}

/// State of the manual email check-in panel
#[derive(Debug, Clone, PartialEq)]
pub enum EmailCheckinStatus {
    /// Request issued, waiting for the backend
    Processing,
    /// Local validation failed; nothing was sent
    Blocked(String),
    CheckedIn(EmailCheckinResponse),
    /// Backend refused the check-in
    Rejected(String),
    /// Transport or decoding failure
    Failed(String),
}

impl EmailCheckinStatus {
    pub fn kind(&self) -> ResultKind {
        match self {
            EmailCheckinStatus::Processing => ResultKind::Info,
            EmailCheckinStatus::CheckedIn(_) => ResultKind::Success,
            _ => ResultKind::Error,
        }
    }
}

/// Totals across every event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverallStats {
    pub total_events: usize,
    pub total_registrations: u64,
    pub total_checkins: u64,
    pub total_participants: u64,
}

/// Surface the dashboard renders into
pub trait DashboardView: Send + Sync {
    /// Every tab with its active flag; exactly one is active
    fn render_tabs(&self, tabs: &[(Tab, bool)]);

    fn show_upload_result(&self, message: &str, kind: ResultKind);

    fn show_csv_stats(&self, stats: &CsvStats);

    fn show_participants(&self, participants: &[Participant]);

    fn show_participant_lookup(&self, email: &str, lookup: &ParticipantLookup);

    fn show_events(&self, events: &[Event], selected: Option<EventId>);

    fn show_event_stats(&self, stats: &EventStatsSnapshot);

    fn show_recent_checkins(&self, checkins: &[RecentCheckin]);

    fn show_email_checkin(&self, status: &EmailCheckinStatus);

    fn show_overall_stats(&self, stats: &OverallStats);

    /// One-off confirmation or warning outside the panels above
    fn show_notice(&self, message: &str, kind: ResultKind);
}
