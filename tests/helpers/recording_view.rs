//! View that records every render call

use std::sync::{Arc, Mutex};

use checkin_console::dashboard::{
    DashboardView, EmailCheckinStatus, OverallStats, ResultKind, Tab,
};
use checkin_console::models::{
    CsvStats, Event, EventId, EventStatsSnapshot, Participant, ParticipantLookup, RecentCheckin,
};
use checkin_console::scanner::{RecentScanEntry, RecentScans, ScanResult, ScannerView};

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Tabs(Vec<(Tab, bool)>),
    UploadResult(String, ResultKind),
    CsvStats(u64),
    Participants(usize),
    ParticipantLookup(String, bool),
    Events(Vec<EventId>, Option<EventId>),
    EventStats(EventStatsSnapshot),
    RecentCheckins(usize),
    EmailCheckin(EmailCheckinStatus),
    OverallStats(OverallStats),
    Notice(String, ResultKind),
    ScannerEvents(Vec<EventId>, Option<EventId>),
    Alert(String),
    Scanning(bool),
    ScanResult(ScanResult),
    HideScanResult,
    RecentScans(Vec<RecentScanEntry>),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    rendered: Mutex<Vec<Rendered>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn record(&self, rendered: Rendered) {
        self.rendered.lock().unwrap().push(rendered);
    }

    pub fn rendered(&self) -> Vec<Rendered> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.rendered.lock().unwrap().clear();
    }

    pub fn last_tabs(&self) -> Option<Vec<(Tab, bool)>> {
        self.rendered().into_iter().rev().find_map(|r| match r {
            Rendered::Tabs(tabs) => Some(tabs),
            _ => None,
        })
    }

    pub fn upload_results(&self) -> Vec<(String, ResultKind)> {
        self.rendered()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::UploadResult(message, kind) => Some((message, kind)),
                _ => None,
            })
            .collect()
    }

    pub fn event_stats(&self) -> Vec<EventStatsSnapshot> {
        self.rendered()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::EventStats(stats) => Some(stats),
                _ => None,
            })
            .collect()
    }

    pub fn email_checkins(&self) -> Vec<EmailCheckinStatus> {
        self.rendered()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::EmailCheckin(status) => Some(status),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.rendered()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn scan_results(&self) -> Vec<ScanResult> {
        self.rendered()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::ScanResult(result) => Some(result),
                _ => None,
            })
            .collect()
    }

    pub fn hide_count(&self) -> usize {
        self.rendered()
            .iter()
            .filter(|r| matches!(r, Rendered::HideScanResult))
            .count()
    }

    pub fn last_recent_scans(&self) -> Option<Vec<RecentScanEntry>> {
        self.rendered().into_iter().rev().find_map(|r| match r {
            Rendered::RecentScans(entries) => Some(entries),
            _ => None,
        })
    }
}

impl DashboardView for RecordingView {
    fn render_tabs(&self, tabs: &[(Tab, bool)]) {
        self.record(Rendered::Tabs(tabs.to_vec()));
    }

    fn show_upload_result(&self, message: &str, kind: ResultKind) {
        self.record(Rendered::UploadResult(message.to_string(), kind));
    }

    fn show_csv_stats(&self, stats: &CsvStats) {
        self.record(Rendered::CsvStats(stats.total_participants));
    }

    fn show_participants(&self, participants: &[Participant]) {
        self.record(Rendered::Participants(participants.len()));
    }

    fn show_participant_lookup(&self, email: &str, lookup: &ParticipantLookup) {
        self.record(Rendered::ParticipantLookup(email.to_string(), lookup.exists));
    }

    fn show_events(&self, events: &[Event], selected: Option<EventId>) {
        self.record(Rendered::Events(events.iter().map(|e| e.id).collect(), selected));
    }

    fn show_event_stats(&self, stats: &EventStatsSnapshot) {
        self.record(Rendered::EventStats(stats.clone()));
    }

    fn show_recent_checkins(&self, checkins: &[RecentCheckin]) {
        self.record(Rendered::RecentCheckins(checkins.len()));
    }

    fn show_email_checkin(&self, status: &EmailCheckinStatus) {
        self.record(Rendered::EmailCheckin(status.clone()));
    }

    fn show_overall_stats(&self, stats: &OverallStats) {
        self.record(Rendered::OverallStats(*stats));
    }

    fn show_notice(&self, message: &str, kind: ResultKind) {
        self.record(Rendered::Notice(message.to_string(), kind));
    }
}

impl ScannerView for RecordingView {
    fn show_events(&self, events: &[Event], selected: Option<EventId>) {
        self.record(Rendered::ScannerEvents(events.iter().map(|e| e.id).collect(), selected));
    }

    fn alert(&self, message: &str) {
        self.record(Rendered::Alert(message.to_string()));
    }

    fn set_scanning(&self, scanning: bool) {
        self.record(Rendered::Scanning(scanning));
    }

    fn show_scan_result(&self, result: &ScanResult) {
        self.record(Rendered::ScanResult(result.clone()));
    }

    fn hide_scan_result(&self) {
        self.record(Rendered::HideScanResult);
    }

    fn show_recent_scans(&self, scans: &RecentScans) {
        self.record(Rendered::RecentScans(scans.iter().cloned().collect()));
    }
}
