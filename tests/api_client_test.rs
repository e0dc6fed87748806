//! Backend API client against a mock server

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

use checkin_console::models::CheckinSource;
use checkin_console::CheckinError;

use helpers::*;

#[tokio::test]
async fn test_health_check() {
    init_test_env();
    let backend = BackendMockServer::new().await;
    backend.mock_health().await;

    let health = backend.api_client().health_check().await.unwrap();

    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_events_and_stats_decode() {
    let backend = BackendMockServer::new().await;
    backend.mock_events(two_events()).await;
    backend.mock_event_stats(1, stats_json(120, 40)).await;
    let api = backend.api_client();

    let events = api.events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].display_label(), "Hack Night - 2024-03-15");

    let stats = api.event_stats(1).await.unwrap();
    assert_eq!(stats.total_registrations, 120);
    assert_eq!(stats.remaining_capacity, -20);
}

#[tokio::test]
async fn test_recent_checkins_sends_limit() {
    let backend = BackendMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/checkin/recent/3"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "email": "a@example.com", "checked_in_at": "2024-03-15T18:05:00", "source": "qr" },
            { "email": "b@example.com", "checked_in_at": "2024-03-15T18:06:00", "source": "csv" }
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let checkins = backend.api_client().recent_checkins(3, 10).await.unwrap();

    assert_eq!(checkins[0].source, CheckinSource::Qr);
    assert_eq!(checkins[1].source.badge(), "📧 Email");
}

#[tokio::test]
async fn test_email_query_is_percent_encoded() {
    let backend = BackendMockServer::new().await;
    Mock::given(method("POST"))
        .and(path("/checkin/email"))
        .and(query_param("email", "ada+hack@example.com"))
        .and(query_param("event_id", "4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(email_checkin_json("Ada", "ada+hack@example.com")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let response = backend
        .api_client()
        .check_in_by_email("ada+hack@example.com", 4)
        .await
        .unwrap();

    assert_eq!(response.participant_name, "Ada");
}

#[tokio::test]
async fn test_participant_lookup_and_delete() {
    let backend = BackendMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/csv/participants/ada%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "exists": true,
            "participant": { "name": "Ada", "email": "ada@example.com", "college": "MIT" }
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/csv/participants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Deleted 3 participants",
            "deleted_count": 3
        })))
        .mount(&backend.server)
        .await;
    let api = backend.api_client();

    let lookup = api.lookup_participant("ada@example.com").await.unwrap();
    assert!(lookup.exists);
    assert_eq!(lookup.participant.unwrap().college.as_deref(), Some("MIT"));

    let deleted = api.delete_participants().await.unwrap();
    assert_eq!(deleted.deleted_count, 3);
}

#[tokio::test]
async fn test_error_body_becomes_api_error() {
    let backend = BackendMockServer::new().await;
    backend
        .mock_qr_checkin(404, error_json("Invalid ticket", "not_found"))
        .await;

    let error = backend.api_client().check_in_by_qr("T-0", 1).await.unwrap_err();

    assert_matches!(error, CheckinError::Api { status: 404, .. });
    assert_eq!(error.user_message(), "Invalid ticket");
    assert_eq!(error.reason(), Some("not_found"));
}

#[tokio::test]
async fn test_non_json_error_falls_back_to_status() {
    let backend = BackendMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/csv/stats"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&backend.server)
        .await;

    let error = backend.api_client().csv_stats().await.unwrap_err();

    assert_eq!(error.user_message(), "HTTP 502");
    assert!(error.is_recoverable());
}

#[tokio::test]
async fn test_unexpected_success_body_is_invalid_response() {
    let backend = BackendMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/csv/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": "many" })))
        .mount(&backend.server)
        .await;

    let error = backend.api_client().csv_stats().await.unwrap_err();

    assert_matches!(error, CheckinError::InvalidResponse(_));
}
