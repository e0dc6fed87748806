//! QR scanner
//!
//! Camera lifecycle, decode handling, result rendering and the rolling log
//! of recent scan outcomes.

pub mod controller;
pub mod recent;
pub mod view;

pub use controller::{Scanner, SELECT_EVENT_ALERT, START_FAILED_ALERT};
pub use recent::{RecentScanEntry, RecentScans};
pub use view::{ScanResult, ScannerState, ScannerView};
