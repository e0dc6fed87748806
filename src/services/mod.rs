//! Services module
//!
//! This module contains the clients for collaborators outside the process:
//! the check-in backend and the QR decoding capability.

pub mod api;
pub mod decoder;

// Re-export commonly used services
pub use api::{ApiClient, HealthStatus};
pub use decoder::{CameraConstraints, DecodeEvent, KeyboardWedgeDecoder, QrDecoder, ScanConfig};
