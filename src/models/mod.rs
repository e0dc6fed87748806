//! Data models module
//!
//! Wire types of the check-in backend and the view models built from them.
//! Nothing here is persisted; every value lives for one request or one render.

pub mod checkin;
pub mod csv;
pub mod event;

// Re-export commonly used models
pub use checkin::{
    CheckinSource, EmailCheckinResponse, ErrorDetail, EventStats, EventStatsSnapshot,
    QrCheckinResponse, RecentCheckin,
};
pub use csv::{CsvStats, DeleteParticipantsResponse, Participant, ParticipantLookup, UploadFile, UploadResult};
pub use event::{Event, EventId};
