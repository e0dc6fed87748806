//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

use chrono::{DateTime, Local, Utc};

/// Turn a decoded QR payload into a ticket id
///
/// Surrounding whitespace is stripped; the rest is used verbatim.
pub fn normalize_ticket_id(decoded: &str) -> &str {
    decoded.trim()
}

/// Format a timestamp as local wall-clock time
pub fn format_local_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Size of an upload for log lines (`812 B`, `1.5 KB`)
pub fn format_bytes(bytes: u64) -> String {
    const SCALED: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = SCALED[0];
    for &next in &SCALED[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", size, unit)
}
