//! Dashboard controller
//!
//! Owns the dashboard's client-side state (active tab, event list, selected
//! event) and drives the CSV upload, event stats, email check-in and
//! aggregate stats flows against the backend.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::models::{
    CsvStats, DeleteParticipantsResponse, Event, EventId, EventStatsSnapshot, Participant,
    ParticipantLookup, UploadFile, UploadResult,
};
use crate::services::ApiClient;
use crate::utils::errors::{CheckinError, Result};
use crate::utils::helpers::format_bytes;
use crate::utils::logging::{log_api_error, log_checkin_attempt, log_upload_result};
use crate::view::render;

use super::tabs::Tab;
use super::view::{DashboardView, EmailCheckinStatus, OverallStats, ResultKind};

/// Outcome of one CSV upload attempt
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    /// No file chosen; nothing was sent
    Rejected(String),
    Completed(UploadResult),
    /// Backend or transport failure, as rendered
    Failed(String),
}

/// Dashboard context, constructed once and passed to every handler
pub struct Dashboard<V> {
    api: ApiClient,
    view: Arc<V>,
    config: DashboardConfig,
    active_tab: Tab,
    events: Vec<Event>,
    selected_event: Option<EventId>,
}

impl<V: DashboardView> Dashboard<V> {
    pub fn new(api: ApiClient, view: Arc<V>, config: DashboardConfig) -> Self {
        Self {
            api,
            view,
            config,
            active_tab: Tab::default(),
            events: Vec::new(),
            selected_event: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn selected_event(&self) -> Option<EventId> {
        self.selected_event
    }

    /// Page load: render the tab bar and the CSV stats of the default tab
    pub async fn init(&mut self) -> Result<()> {
        self.render_tabs();
        self.load_csv_stats().await.map(|_| ())
    }

    fn render_tabs(&self) {
        let tabs: Vec<(Tab, bool)> = Tab::ALL
            .iter()
            .map(|tab| (*tab, *tab == self.active_tab))
            .collect();
        self.view.render_tabs(&tabs);
    }

    /// Activate a tab and refresh the data it shows
    pub async fn show_tab(&mut self, tab: Tab) -> Result<()> {
        debug!(from = %self.active_tab, to = %tab, "Switching tab");
        self.active_tab = tab;
        self.render_tabs();

        match tab {
            Tab::Checkin => self.load_events().await,
            Tab::Stats => self.load_overall_stats().await.map(|_| ()),
            Tab::CsvUpload => self.load_csv_stats().await.map(|_| ()),
        }
    }

    /// Upload a participant CSV
    pub async fn submit_upload(&mut self, file: Option<UploadFile>) -> UploadStatus {
        let Some(file) = file else {
            let message = "Please select a CSV file".to_string();
            self.view.show_upload_result(&message, ResultKind::Error);
            return UploadStatus::Rejected(message);
        };

        info!(
            file_name = %file.file_name,
            size = %format_bytes(file.bytes.len() as u64),
            "Uploading participant CSV"
        );
        self.view
            .show_upload_result("Uploading and processing CSV...", ResultKind::Info);

        match self.api.upload_csv(&file).await {
            Ok(result) => {
                log_upload_result(
                    &file.file_name,
                    result.total_rows,
                    result.imported,
                    result.duplicates,
                    result.errors,
                );
                let message = render::upload_message(&result, self.config.error_preview_limit);
                self.view.show_upload_result(&message, render::upload_kind(&result));

                if let Err(e) = self.load_csv_stats().await {
                    warn!(error = %e, "CSV stats refresh after upload failed");
                }
                UploadStatus::Completed(result)
            }
            Err(e) => {
                log_api_error("csv/upload", &e, Some(&file.file_name));
                let message = if e.is_api_error() {
                    format!("Error: {}", e.user_message())
                } else {
                    format!("Upload failed: {}", e.user_message())
                };
                self.view.show_upload_result(&message, ResultKind::Error);
                UploadStatus::Failed(message)
            }
        }
    }

    /// Load the imported participant count
    pub async fn load_csv_stats(&mut self) -> Result<CsvStats> {
        let stats = self.api.csv_stats().await.map_err(|e| {
            log_api_error("csv/stats", &e, None);
            e
        })?;
        self.view.show_csv_stats(&stats);
        Ok(stats)
    }

    /// Load the imported participant list
    pub async fn load_participants(&mut self) -> Result<Vec<Participant>> {
        let participants = self.api.participants().await.map_err(|e| {
            log_api_error("csv/participants", &e, None);
            e
        })?;
        self.view.show_participants(&participants);
        Ok(participants)
    }

    /// Check whether an email belongs to an imported participant
    pub async fn lookup_participant(&mut self, email: &str) -> Result<ParticipantLookup> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CheckinError::Validation("Please enter an email address".to_string()));
        }

        let lookup = self.api.lookup_participant(email).await.map_err(|e| {
            log_api_error("csv/participants/{email}", &e, Some(email));
            e
        })?;
        self.view.show_participant_lookup(email, &lookup);
        Ok(lookup)
    }

    /// Delete every imported participant
    pub async fn clear_participants(&mut self) -> Result<DeleteParticipantsResponse> {
        let response = self.api.delete_participants().await.map_err(|e| {
            log_api_error("csv/participants", &e, Some("delete"));
            e
        })?;

        warn!(deleted = response.deleted_count, "Deleted all imported participants");
        let message = if response.message.is_empty() {
            format!("Deleted {} participants", response.deleted_count)
        } else {
            response.message.clone()
        };
        self.view.show_notice(&message, ResultKind::Success);
        self.load_csv_stats().await?;
        Ok(response)
    }

    /// Select an event before the event list is loaded
    ///
    /// [`Dashboard::load_events`] keeps the selection if the event exists.
    pub fn preselect_event(&mut self, event_id: EventId) {
        self.selected_event = Some(event_id);
    }

    /// Load the event list, auto-select the first event if nothing valid is
    /// selected, and load that event's stats
    pub async fn load_events(&mut self) -> Result<()> {
        let events = self.api.events().await.map_err(|e| {
            log_api_error("events", &e, None);
            e
        })?;

        self.selected_event = match self.selected_event {
            Some(id) if events.iter().any(|event| event.id == id) => Some(id),
            _ => events.first().map(|event| event.id),
        };
        self.events = events;
        self.view.show_events(&self.events, self.selected_event);

        if self.selected_event.is_some() {
            self.load_event_stats().await?;
        }
        Ok(())
    }

    /// Switch to another loaded event and refresh its stats
    pub async fn select_event(&mut self, event_id: EventId) -> Result<()> {
        if !self.events.iter().any(|event| event.id == event_id) {
            return Err(CheckinError::InvalidInput(format!("Unknown event id: {}", event_id)));
        }

        self.selected_event = Some(event_id);
        self.view.show_events(&self.events, self.selected_event);
        self.load_event_stats().await
    }

    /// Load stats and recent check-ins of the selected event
    ///
    /// The snapshot is tagged with the event it was requested for; `&mut self`
    /// keeps the selection fixed until the response is rendered.
    pub async fn load_event_stats(&mut self) -> Result<()> {
        let Some(event_id) = self.selected_event else {
            return Ok(());
        };

        let stats = self.api.event_stats(event_id).await.map_err(|e| {
            log_api_error("checkin/stats", &e, Some(&event_id.to_string()));
            e
        })?;
        self.view.show_event_stats(&EventStatsSnapshot::new(event_id, &stats));

        let checkins = self
            .api
            .recent_checkins(event_id, self.config.recent_checkins_limit)
            .await
            .map_err(|e| {
                log_api_error("checkin/recent", &e, Some(&event_id.to_string()));
                e
            })?;
        self.view.show_recent_checkins(&checkins);
        Ok(())
    }

    /// Manually check in a participant by email for the selected event
    pub async fn check_in_by_email(&mut self, email: &str) -> EmailCheckinStatus {
        let Some(event_id) = self.selected_event else {
            return self.finish_email_checkin(EmailCheckinStatus::Blocked(
                "Please select an event first".to_string(),
            ));
        };

        let email = email.trim();
        if email.is_empty() {
            return self.finish_email_checkin(EmailCheckinStatus::Blocked(
                "Please enter an email address".to_string(),
            ));
        }

        self.view.show_email_checkin(&EmailCheckinStatus::Processing);

        let status = match self.api.check_in_by_email(email, event_id).await {
            Ok(response) => {
                log_checkin_attempt("email", event_id, email, Ok(()));
                EmailCheckinStatus::CheckedIn(response)
            }
            Err(e) => {
                log_checkin_attempt("email", event_id, email, Err(&e));
                if e.is_api_error() {
                    EmailCheckinStatus::Rejected(e.user_message())
                } else {
                    EmailCheckinStatus::Failed(e.user_message())
                }
            }
        };

        let status = self.finish_email_checkin(status);
        if matches!(status, EmailCheckinStatus::CheckedIn(_)) {
            if let Err(e) = self.load_event_stats().await {
                warn!(error = %e, "Stats refresh after check-in failed");
            }
        }
        status
    }

    fn finish_email_checkin(&self, status: EmailCheckinStatus) -> EmailCheckinStatus {
        self.view.show_email_checkin(&status);
        status
    }

    /// Totals across all events
    ///
    /// The event list and CSV stats are fetched concurrently; per-event stats
    /// are fetched one event at a time.
    pub async fn load_overall_stats(&mut self) -> Result<OverallStats> {
        let (events, csv_stats) = tokio::join!(self.api.events(), self.api.csv_stats());
        let events = events.map_err(|e| {
            log_api_error("events", &e, Some("overall stats"));
            e
        })?;
        let csv_stats = csv_stats.map_err(|e| {
            log_api_error("csv/stats", &e, Some("overall stats"));
            e
        })?;

        let mut overall = OverallStats {
            total_events: events.len(),
            total_participants: csv_stats.total_participants,
            ..OverallStats::default()
        };

        for event in &events {
            let stats = self.api.event_stats(event.id).await.map_err(|e| {
                log_api_error("checkin/stats", &e, Some(&event.id.to_string()));
                e
            })?;
            overall.total_registrations += stats.total_registrations;
            overall.total_checkins += stats.total_checkins;
        }

        self.view.show_overall_stats(&overall);
        Ok(overall)
    }
}
