//! Minimal test environment setup

use std::sync::Once;

use checkin_console::config::{DashboardConfig, ScannerConfig, Settings};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("checkin_console=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Dashboard settings used by the integration tests
pub fn test_dashboard_config() -> DashboardConfig {
    Settings::default().dashboard
}

/// Scanner settings with short delays so tests run on real time
pub fn test_scanner_config() -> ScannerConfig {
    ScannerConfig {
        resume_delay_ms: 20,
        result_display_ms: 150,
        ..Settings::default().scanner
    }
}
