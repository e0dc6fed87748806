//! Terminal view
//!
//! Renders both controllers as plain text on stdout. Logs go to stderr, so
//! the output stays readable when piped.

use std::io::Write;

use tracing::trace;

use crate::dashboard::{DashboardView, EmailCheckinStatus, OverallStats, ResultKind, Tab};
use crate::models::{
    CsvStats, Event, EventId, EventStatsSnapshot, Participant, ParticipantLookup, RecentCheckin,
};
use crate::scanner::{RecentScans, ScanResult, ScannerView};

use super::render;

/// Plain-text view writing to stdout
#[derive(Debug, Clone, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }

    fn section(&self, title: &str, body: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "── {} ──", title);
        let _ = writeln!(out, "{}", body);
        let _ = writeln!(out);
        let _ = out.flush();
    }

    fn boxed(&self, title: &str, body: &str, kind: ResultKind) {
        self.section(&format!("{} [{}]", title, kind.as_str()), body);
    }
}

impl DashboardView for TerminalView {
    fn render_tabs(&self, tabs: &[(Tab, bool)]) {
        let line = tabs
            .iter()
            .map(|(tab, active)| {
                if *active {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.section("Dashboard", &line);
    }

    fn show_upload_result(&self, message: &str, kind: ResultKind) {
        self.boxed("Upload", message, kind);
    }

    fn show_csv_stats(&self, stats: &CsvStats) {
        self.section("Participants", &render::csv_stats(stats));
    }

    fn show_participants(&self, participants: &[Participant]) {
        self.section("Participant List", &render::participants(participants));
    }

    fn show_participant_lookup(&self, email: &str, lookup: &ParticipantLookup) {
        self.section("Participant Lookup", &render::participant_lookup(email, lookup));
    }

    fn show_events(&self, events: &[Event], selected: Option<EventId>) {
        self.section("Events", &render::event_options(events, selected));
    }

    fn show_event_stats(&self, stats: &EventStatsSnapshot) {
        self.section(&format!("Event {} Stats", stats.event_id), &render::event_stats(stats));
    }

    fn show_recent_checkins(&self, checkins: &[RecentCheckin]) {
        self.section("Recent Check-ins", &render::recent_checkins(checkins));
    }

    fn show_email_checkin(&self, status: &EmailCheckinStatus) {
        self.boxed("Email Check-in", &render::email_checkin(status), status.kind());
    }

    fn show_overall_stats(&self, stats: &OverallStats) {
        self.section("Overall Statistics", &render::overall_stats(stats));
    }

    fn show_notice(&self, message: &str, kind: ResultKind) {
        self.boxed("Notice", message, kind);
    }
}

impl ScannerView for TerminalView {
    fn show_events(&self, events: &[Event], selected: Option<EventId>) {
        self.section("Scanner Events", &render::event_options(events, selected));
    }

    fn alert(&self, message: &str) {
        self.section("⚠ Alert", message);
    }

    fn set_scanning(&self, scanning: bool) {
        let status = if scanning {
            "📷 Scanning... type or scan a ticket code, Ctrl-D to stop"
        } else {
            "⏹ Scanner stopped"
        };
        self.section("Scanner", status);
    }

    fn show_scan_result(&self, result: &ScanResult) {
        let kind = if result.is_success() { ResultKind::Success } else { ResultKind::Error };
        self.boxed("Scan Result", &render::scan_result(result), kind);
    }

    fn hide_scan_result(&self) {
        trace!("Scan result display expired");
    }

    fn show_recent_scans(&self, scans: &RecentScans) {
        self.section("Recent Scans", &render::recent_scans(scans));
    }
}
