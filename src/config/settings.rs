//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `CHECKIN_API__BASE_URL`
pub const ENV_PREFIX: &str = "CHECKIN";

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub scanner: ScannerConfig,
    pub logging: LoggingConfig,
}

/// Check-in backend configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Number of recent check-ins fetched with the event stats
    pub recent_checkins_limit: u32,
    /// Maximum number of CSV error messages shown after an upload
    pub error_preview_limit: usize,
}

/// QR scanner configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScannerConfig {
    /// Cooldown between a rendered result and the decoder resuming
    pub resume_delay_ms: u64,
    /// How long a scan result stays visible
    pub result_display_ms: u64,
    /// Capacity of the recent-scan log
    pub recent_capacity: usize,
    pub fps: u32,
    pub qrbox_size: u32,
    pub facing_mode: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stderr only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from defaults, `config.toml` and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings, reading the given file instead of `config.toml`
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CheckinError> {
        super::validation::validate_settings(self)
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl ScannerConfig {
    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    pub fn result_display(&self) -> Duration {
        Duration::from_millis(self.result_display_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_seconds: 10,
                user_agent: format!("checkin-console/{}", env!("CARGO_PKG_VERSION")),
            },
            dashboard: DashboardConfig {
                recent_checkins_limit: 10,
                error_preview_limit: 10,
            },
            scanner: ScannerConfig {
                resume_delay_ms: 2000,
                result_display_ms: 5000,
                recent_capacity: 10,
                fps: 10,
                qrbox_size: 250,
                facing_mode: "environment".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}
