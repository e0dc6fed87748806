//! Scanner rendering contract

use std::fmt;

use crate::models::{Event, EventId, QrCheckinResponse};

use super::recent::RecentScans;

/// Camera lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerState {
    Stopped,
    Scanning,
    PausedForCheckIn,
}

impl fmt::Display for ScannerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScannerState::Stopped => "stopped",
            ScannerState::Scanning => "scanning",
            ScannerState::PausedForCheckIn => "paused_for_checkin",
        };
        f.write_str(name)
    }
}

/// Result panel content for one scan
#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult {
    CheckedIn(QrCheckinResponse),
    Failed {
        message: String,
        reason: Option<String>,
    },
}

impl ScanResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ScanResult::CheckedIn(_))
    }
}

/// Surface the scanner renders into
pub trait ScannerView: Send + Sync {
    fn show_events(&self, events: &[Event], selected: Option<EventId>);

    /// Blocking operator alert
    fn alert(&self, message: &str);

    /// Toggle between the start and stop controls
    fn set_scanning(&self, scanning: bool);

    fn show_scan_result(&self, result: &ScanResult);

    fn hide_scan_result(&self);

    /// Full re-render of the recent-scan log
    fn show_recent_scans(&self, scans: &RecentScans);
}
