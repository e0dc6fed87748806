//! Rolling log of recent scan outcomes

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default number of outcomes kept
pub const DEFAULT_CAPACITY: usize = 10;

/// Outcome of one decode-and-check-in attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentScanEntry {
    pub id: Uuid,
    pub success: bool,
    pub ticket_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl RecentScanEntry {
    pub fn success(ticket_id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            success: true,
            ticket_id: ticket_id.into(),
            name: Some(name.into()),
            email: Some(email.into()),
            message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(ticket_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            success: false,
            ticket_id: ticket_id.into(),
            name: None,
            email: None,
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }
}

/// Most-recent-first log with a fixed capacity; the oldest entry is evicted
/// on overflow
#[derive(Debug, Clone)]
pub struct RecentScans {
    entries: VecDeque<RecentScanEntry>,
    capacity: usize,
}

impl RecentScans {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, entry: RecentScanEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&RecentScanEntry> {
        self.entries.front()
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &RecentScanEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentScans {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
