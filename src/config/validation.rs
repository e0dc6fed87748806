//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{CheckinError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_dashboard_config(&settings.dashboard)?;
    validate_scanner_config(&settings.scanner)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(CheckinError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| CheckinError::Config(format!("Invalid API base URL {}: {}", config.base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CheckinError::Config(
            format!("API base URL must use http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(CheckinError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate dashboard configuration
fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    // backend caps the recent list at 50
    if config.recent_checkins_limit == 0 || config.recent_checkins_limit > 50 {
        return Err(CheckinError::Config(
            "Recent check-ins limit must be between 1 and 50".to_string()
        ));
    }

    Ok(())
}

/// Validate scanner configuration
fn validate_scanner_config(config: &super::ScannerConfig) -> Result<()> {
    if config.recent_capacity == 0 {
        return Err(CheckinError::Config(
            "Recent scan capacity must be greater than 0".to_string()
        ));
    }

    if config.fps == 0 {
        return Err(CheckinError::Config(
            "Scanner fps must be greater than 0".to_string()
        ));
    }

    let valid_modes = ["environment", "user"];
    if !valid_modes.contains(&config.facing_mode.as_str()) {
        return Err(CheckinError::Config(
            format!("Invalid facing mode: {}. Valid modes: {:?}", config.facing_mode, valid_modes)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CheckinError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CheckinError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
