//! Administrative dashboard
//!
//! Tab navigation plus the CSV upload, per-event check-in and aggregate
//! statistics panels.

pub mod controller;
pub mod tabs;
pub mod view;

pub use controller::{Dashboard, UploadStatus};
pub use tabs::Tab;
pub use view::{DashboardView, EmailCheckinStatus, OverallStats, ResultKind};
