//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the check-in console. Log output goes to stderr so it never interleaves
//! with rendered views on stdout.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LoggingConfig;
use crate::models::EventId;
use crate::utils::errors::{CheckinError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender and must be held for the
/// lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| CheckinError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let stderr_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "checkin-console.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CheckinError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a check-in attempt and its outcome
pub fn log_checkin_attempt(channel: &str, event_id: EventId, subject: &str, outcome: std::result::Result<(), &CheckinError>) {
    match outcome {
        Ok(()) => info!(
            channel = channel,
            event_id = event_id,
            subject = subject,
            "Check-in succeeded"
        ),
        Err(e) if e.is_api_error() => warn!(
            channel = channel,
            event_id = event_id,
            subject = subject,
            reason = e.reason(),
            error = %e,
            "Check-in rejected by backend"
        ),
        Err(e) => error!(
            channel = channel,
            event_id = event_id,
            subject = subject,
            error = %e,
            "Check-in request failed"
        ),
    }
}

/// Log the counts of a completed CSV upload
pub fn log_upload_result(file_name: &str, total_rows: u64, imported: u64, duplicates: u64, errors: u64) {
    info!(
        file_name = file_name,
        total_rows = total_rows,
        imported = imported,
        duplicates = duplicates,
        errors = errors,
        "CSV upload processed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &CheckinError, context: Option<&str>) {
    error!(
        api = api,
        error = %error,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        context = context,
        "API error occurred"
    );
}

/// Log scanner lifecycle transitions
pub fn log_scanner_transition(from: &str, to: &str, event_id: Option<EventId>) {
    debug!(
        from = from,
        to = to,
        event_id = event_id,
        "Scanner state changed"
    );
}
