//! Error handling for the check-in console
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

use crate::models::ErrorDetail;

/// Main error type for the check-in console
#[derive(Error, Debug)]
pub enum CheckinError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}", api_error_message(.status, .detail))]
    Api {
        status: u16,
        detail: Option<ErrorDetail>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Decoder error: {0}")]
    Decoder(#[from] DecoderError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// QR decoder specific errors
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Decoder is not running")]
    NotRunning,

    #[error("Decoder is already running")]
    AlreadyRunning,

    #[error("Decoder input failed: {0}")]
    Input(String),
}

/// Result type alias for check-in console operations
pub type Result<T> = std::result::Result<T, CheckinError>;

/// Result type alias for decoder operations
pub type DecoderResult<T> = std::result::Result<T, DecoderError>;

fn api_error_message(status: &u16, detail: &Option<ErrorDetail>) -> String {
    detail
        .as_ref()
        .and_then(ErrorDetail::message)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

impl CheckinError {
    /// Build a backend application error from a status code and parsed detail
    pub fn api(status: u16, detail: Option<ErrorDetail>) -> Self {
        CheckinError::Api { status, detail }
    }

    /// Message suitable for showing to the operator
    ///
    /// Backend errors are surfaced verbatim, everything else uses the
    /// error's display text.
    pub fn user_message(&self) -> String {
        match self {
            CheckinError::Api { status, detail } => api_error_message(status, detail),
            CheckinError::Http(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    /// Reason code attached to a structured backend error, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            CheckinError::Api { detail: Some(detail), .. } => detail.reason(),
            _ => None,
        }
    }

    /// True for non-2xx responses from the backend
    pub fn is_api_error(&self) -> bool {
        matches!(self, CheckinError::Api { .. })
    }

    /// Check if the error is recoverable
    ///
    /// Nothing is retried automatically; recoverable means the operator can
    /// repeat the action and reasonably expect a different outcome.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CheckinError::Http(_) => true,
            CheckinError::Api { status, .. } => *status >= 500,
            CheckinError::InvalidResponse(_) => true,
            CheckinError::Validation(_) => true,
            CheckinError::InvalidInput(_) => false,
            CheckinError::Config(_) => false,
            CheckinError::ConfigLoad(_) => false,
            CheckinError::Decoder(_) => true,
            CheckinError::Serialization(_) => false,
            CheckinError::Io(_) => true,
            CheckinError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CheckinError::Config(_) => ErrorSeverity::Critical,
            CheckinError::ConfigLoad(_) => ErrorSeverity::Critical,
            CheckinError::UrlParse(_) => ErrorSeverity::Critical,
            CheckinError::Validation(_) => ErrorSeverity::Info,
            CheckinError::InvalidInput(_) => ErrorSeverity::Info,
            CheckinError::Api { status, .. } if *status < 500 => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
