//! Mock check-in backend for testing
//!
//! A wiremock server answering the backend's JSON endpoints, plus fixture
//! builders for the bodies it returns.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};

use checkin_console::config::Settings;
use checkin_console::models::EventId;
use checkin_console::ApiClient;

/// Mock check-in backend
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    /// Start a new mock backend
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// API client pointed at this server
    pub fn api_client(&self) -> ApiClient {
        let mut config = Settings::default().api;
        config.base_url = self.base_url();
        config.timeout_seconds = 5;
        ApiClient::new(&config).expect("Failed to build API client")
    }

    /// Requests received after the first `seen` ones, as `METHOD /path`
    pub async fn requests_since(&self, seen: usize) -> Vec<String> {
        self.requested_paths().await.into_iter().skip(seen).collect()
    }

    async fn mount(&self, http_method: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_health(&self) {
        self.mount("GET", "/health", 200, json!({ "status": "healthy" })).await;
    }

    pub async fn mock_events(&self, events: Value) {
        self.mount("GET", "/events/", 200, events).await;
    }

    pub async fn mock_event_stats(&self, event_id: EventId, stats: Value) {
        self.mount("GET", &format!("/checkin/stats/{}", event_id), 200, stats)
            .await;
    }

    pub async fn mock_recent_checkins(&self, event_id: EventId, checkins: Value) {
        self.mount("GET", &format!("/checkin/recent/{}", event_id), 200, checkins)
            .await;
    }

    /// Stats and an empty recent list for every event id
    pub async fn mock_any_event_stats(&self, stats: Value) {
        Mock::given(method("GET"))
            .and(path_regex(r"^/checkin/stats/\d+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stats))
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/checkin/recent/\d+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_csv_stats(&self, total_participants: u64) {
        self.mount(
            "GET",
            "/csv/stats",
            200,
            json!({ "total_participants": total_participants }),
        )
        .await;
    }

    pub async fn mock_upload(&self, status: u16, body: Value) {
        self.mount("POST", "/csv/upload", status, body).await;
    }

    pub async fn mock_email_checkin(&self, status: u16, body: Value) {
        self.mount("POST", "/checkin/email", status, body).await;
    }

    pub async fn mock_qr_checkin(&self, status: u16, body: Value) {
        self.mount("POST", "/checkin/qr", status, body).await;
    }

    /// `METHOD /path` of every request received so far, in order
    pub async fn requested_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| format!("{} {}", request.method, request.url.path()))
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.requested_paths().await.len()
    }

    /// Number of requests made to one `METHOD /path`
    pub async fn count(&self, route: &str) -> usize {
        self.requested_paths()
            .await
            .iter()
            .filter(|requested| requested.as_str() == route)
            .count()
    }

    /// Query strings of every request made to `path`
    pub async fn queries(&self, route: &str) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == route)
            .map(|request| request.url.query().unwrap_or_default().to_string())
            .collect()
    }
}

/// API client whose backend refuses connections
pub fn unreachable_api_client() -> ApiClient {
    let mut config = Settings::default().api;
    config.base_url = "http://127.0.0.1:1".to_string();
    config.timeout_seconds = 2;
    ApiClient::new(&config).expect("Failed to build API client")
}

pub fn event_json(id: EventId, name: &str, event_date: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "event_date": event_date,
        "event_type": "workshop",
        "capacity": 100,
        "registration_open": true
    })
}

pub fn two_events() -> Value {
    json!([
        event_json(1, "Hack Night", "2024-03-15T18:00:00"),
        event_json(2, "Demo Day", "2024-03-16")
    ])
}

pub fn stats_json(total_registrations: u64, total_checkins: u64) -> Value {
    json!({
        "event_name": "Hack Night",
        "capacity": 100,
        "total_registrations": total_registrations,
        "checked_in_registrations": total_checkins,
        "csv_checkins": 0,
        "total_checkins": total_checkins,
        "remaining_capacity": 100 - total_registrations as i64
    })
}

pub fn upload_json(total_rows: u64, errors: u64) -> Value {
    let error_details: Vec<String> = (0..errors)
        .map(|row| format!("Row {}: Invalid email format", row + 2))
        .collect();
    json!({
        "message": "CSV processed",
        "total_rows": total_rows,
        "imported": total_rows - errors,
        "duplicates": 0,
        "errors": errors,
        "error_details": error_details
    })
}

/// Participant with generated name and email
pub fn fake_participant() -> (String, String) {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    (name, email)
}

pub fn email_checkin_json(name: &str, email: &str) -> Value {
    json!({
        "message": "Check-in successful!",
        "participant_name": name,
        "email": email,
        "college": "State University",
        "source": "email"
    })
}

pub fn qr_checkin_json(name: &str, email: &str) -> Value {
    json!({
        "message": "Check-in successful!",
        "participant_name": name,
        "email": email,
        "event_name": "Hack Night"
    })
}

pub fn error_json(message: &str, reason: &str) -> Value {
    json!({ "detail": { "message": message, "reason": reason } })
}
