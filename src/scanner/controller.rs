//! Scanner controller
//!
//! Drives the decode loop: every decoded payload pauses the decoder, becomes
//! one QR check-in for the selected event, is rendered and logged, and the
//! decoder resumes after a fixed cooldown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, trace, warn};

use crate::config::ScannerConfig;
use crate::models::{ErrorDetail, Event, EventId};
use crate::services::{ApiClient, DecodeEvent, QrDecoder};
use crate::utils::errors::{CheckinError, Result};
use crate::utils::helpers::normalize_ticket_id;
use crate::utils::logging::{log_api_error, log_checkin_attempt, log_scanner_transition};

use super::recent::{RecentScanEntry, RecentScans};
use super::view::{ScanResult, ScannerState, ScannerView};

pub const SELECT_EVENT_ALERT: &str = "Please select an event first!";
pub const START_FAILED_ALERT: &str = "Failed to start scanner. Please check camera permissions.";
const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Scanner context, constructed once and passed to every handler
pub struct Scanner<D, V> {
    api: ApiClient,
    decoder: D,
    view: Arc<V>,
    config: ScannerConfig,
    state: ScannerState,
    events: Vec<Event>,
    selected_event: Option<EventId>,
    recent: RecentScans,
    decode_events: Option<mpsc::Receiver<DecodeEvent>>,
    in_flight: bool,
    result_generation: Arc<AtomicU64>,
}

impl<D, V> Scanner<D, V>
where
    D: QrDecoder,
    V: ScannerView + 'static,
{
    pub fn new(api: ApiClient, decoder: D, view: Arc<V>, config: ScannerConfig) -> Self {
        let recent = RecentScans::new(config.recent_capacity);
        Self {
            api,
            decoder,
            view,
            config,
            state: ScannerState::Stopped,
            events: Vec::new(),
            selected_event: None,
            recent,
            decode_events: None,
            in_flight: false,
            result_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn state(&self) -> ScannerState {
        self.state
    }

    pub fn selected_event(&self) -> Option<EventId> {
        self.selected_event
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn recent_scans(&self) -> &RecentScans {
        &self.recent
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    fn transition(&mut self, to: ScannerState) {
        if self.state != to {
            log_scanner_transition(&self.state.to_string(), &to.to_string(), self.selected_event);
            self.state = to;
        }
    }

    /// Select an event before the event list is loaded
    pub fn preselect_event(&mut self, event_id: EventId) {
        self.selected_event = Some(event_id);
    }

    /// Load the event list and auto-select the first event if nothing valid
    /// is selected
    pub async fn load_events(&mut self) -> Result<()> {
        let events = self.api.events().await.map_err(|e| {
            log_api_error("events", &e, Some("scanner"));
            e
        })?;

        self.selected_event = match self.selected_event {
            Some(id) if events.iter().any(|event| event.id == id) => Some(id),
            _ => events.first().map(|event| event.id),
        };
        self.events = events;
        self.view.show_events(&self.events, self.selected_event);
        Ok(())
    }

    /// Switch the event subsequent scans are checked in to
    pub fn select_event(&mut self, event_id: EventId) -> Result<()> {
        if !self.events.iter().any(|event| event.id == event_id) {
            return Err(CheckinError::InvalidInput(format!("Unknown event id: {}", event_id)));
        }
        self.selected_event = Some(event_id);
        self.view.show_events(&self.events, self.selected_event);
        Ok(())
    }

    /// Start the decoder; requires a selected event
    pub async fn start(&mut self) -> Result<()> {
        if self.state != ScannerState::Stopped {
            debug!(state = %self.state, "Scanner already running");
            return Ok(());
        }

        let Some(event_id) = self.selected_event else {
            self.view.alert(SELECT_EVENT_ALERT);
            return Err(CheckinError::Validation(SELECT_EVENT_ALERT.to_string()));
        };

        match self
            .decoder
            .start((&self.config).into(), (&self.config).into())
            .await
        {
            Ok(receiver) => {
                self.decode_events = Some(receiver);
                self.transition(ScannerState::Scanning);
                self.view.set_scanning(true);
                info!(event_id = event_id, "Scanner started");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error starting scanner");
                self.view.alert(START_FAILED_ALERT);
                Err(e.into())
            }
        }
    }

    /// Stop the decoder; a no-op when already stopped
    pub async fn stop(&mut self) -> Result<()> {
        if self.state == ScannerState::Stopped {
            return Ok(());
        }

        if let Err(e) = self.decoder.stop().await {
            error!(error = %e, "Error stopping scanner");
            return Err(e.into());
        }

        self.decode_events = None;
        self.transition(ScannerState::Stopped);
        self.view.set_scanning(false);
        info!("Scanner stopped");
        Ok(())
    }

    /// Release the decoder unconditionally; called on shutdown
    pub async fn teardown(&mut self) {
        if self.state != ScannerState::Stopped {
            if let Err(e) = self.decoder.stop().await {
                warn!(error = %e, "Decoder stop failed during teardown");
            }
        }
        self.decode_events = None;
        self.in_flight = false;
        self.transition(ScannerState::Stopped);
    }

    /// Process decode events until the decoder's stream ends
    ///
    /// The scanner is stopped when the stream ends; an input failure that
    /// ended it is returned.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let Some(receiver) = self.decode_events.as_mut() else {
                return Ok(());
            };

            let next = receiver.recv().await;
            match next {
                Some(DecodeEvent::Decoded(text)) => {
                    self.handle_decoded(&text).await;
                }
                Some(DecodeEvent::Miss(reason)) => {
                    trace!(reason = %reason, "No code in frame");
                }
                None => {
                    debug!("Decode stream ended");
                    return self.finish_stream().await;
                }
            }
        }
    }

    async fn finish_stream(&mut self) -> Result<()> {
        let stopped = self.decoder.stop().await;
        self.decode_events = None;
        self.in_flight = false;
        self.transition(ScannerState::Stopped);
        self.view.set_scanning(false);

        if let Err(e) = stopped {
            error!(error = %e, "Decoder input ended the scan session");
            return Err(e.into());
        }
        info!("Scanner stopped at end of input");
        Ok(())
    }

    /// Turn one decoded payload into a check-in
    ///
    /// Returns `None` when the payload is discarded because another check-in
    /// is in flight or the scanner is not scanning.
    pub async fn handle_decoded(&mut self, decoded: &str) -> Option<ScanResult> {
        if self.in_flight || self.state != ScannerState::Scanning {
            debug!(state = %self.state, "Discarding decode while not scanning");
            return None;
        }
        let event_id = self.selected_event?;

        self.in_flight = true;
        if let Err(e) = self.decoder.pause().await {
            warn!(error = %e, "Decoder pause failed");
        }
        self.transition(ScannerState::PausedForCheckIn);

        let ticket_id = normalize_ticket_id(decoded).to_string();
        let (result, entry) = self.check_in(&ticket_id, event_id).await;

        self.show_result(&result);
        self.recent.push(entry);
        self.view.show_recent_scans(&self.recent);

        tokio::time::sleep(self.config.resume_delay()).await;
        self.resume_scanning().await;

        Some(result)
    }

    async fn check_in(&self, ticket_id: &str, event_id: EventId) -> (ScanResult, RecentScanEntry) {
        match self.api.check_in_by_qr(ticket_id, event_id).await {
            Ok(response) => {
                log_checkin_attempt("qr", event_id, ticket_id, Ok(()));
                let entry = RecentScanEntry::success(
                    ticket_id,
                    response.participant_name.clone(),
                    response.email.clone(),
                );
                (ScanResult::CheckedIn(response), entry)
            }
            Err(e) => {
                log_checkin_attempt("qr", event_id, ticket_id, Err(&e));
                let (message, reason) = match &e {
                    CheckinError::Api { detail, .. } => (
                        detail
                            .as_ref()
                            .and_then(ErrorDetail::message)
                            .unwrap_or(UNKNOWN_ERROR)
                            .to_string(),
                        e.reason().map(str::to_string),
                    ),
                    other => (format!("Error: {}", other.user_message()), None),
                };
                let log_message = match &e {
                    CheckinError::Api { .. } => message.clone(),
                    other => other.user_message(),
                };
                let entry = RecentScanEntry::failure(ticket_id, log_message);
                (ScanResult::Failed { message, reason }, entry)
            }
        }
    }

    /// Render a result and schedule it to hide; a newer result cancels the
    /// older timer
    fn show_result(&self, result: &ScanResult) {
        let generation = self.result_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.show_scan_result(result);

        let view = Arc::clone(&self.view);
        let current = Arc::clone(&self.result_generation);
        let delay = self.config.result_display();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                view.hide_scan_result();
            }
        });
    }

    /// Drop decodes buffered during the check-in, then resume the decoder
    async fn resume_scanning(&mut self) {
        if let Some(receiver) = self.decode_events.as_mut() {
            let mut dropped = 0usize;
            while let Ok(event) = receiver.try_recv() {
                if matches!(event, DecodeEvent::Decoded(_)) {
                    dropped += 1;
                }
            }
            if dropped > 0 {
                debug!(dropped = dropped, "Discarded decodes received during cooldown");
            }
        }

        if self.state == ScannerState::PausedForCheckIn {
            if let Err(e) = self.decoder.resume().await {
                warn!(error = %e, "Decoder resume failed");
            }
            self.transition(ScannerState::Scanning);
        }
        self.in_flight = false;
    }
}
