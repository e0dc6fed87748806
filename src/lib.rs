//! Check-in Console
//!
//! Operator console for an event check-in system. This library provides the
//! administrative dashboard (CSV import, event statistics, manual email
//! check-in, aggregate statistics) and the QR scanner (decode loop, ticket
//! check-in, recent-scan log) on top of the check-in backend's HTTP API.

pub mod config;
pub mod dashboard;
pub mod models;
pub mod scanner;
pub mod services;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CheckinError, Result};

// Re-export main components for easy access
pub use dashboard::{Dashboard, DashboardView, Tab};
pub use scanner::{Scanner, ScannerView};
pub use services::{ApiClient, KeyboardWedgeDecoder, QrDecoder};
pub use view::TerminalView;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
