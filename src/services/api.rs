//! Check-in backend API client
//!
//! Typed client for the JSON-over-HTTP contract of the check-in backend.
//! Every non-2xx response becomes [`CheckinError::Api`] carrying the parsed
//! `detail` field; transport failures surface as [`CheckinError::Http`].

use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::models::{
    CsvStats, DeleteParticipantsResponse, EmailCheckinResponse, ErrorDetail, Event, EventId,
    EventStats, Participant, ParticipantLookup, QrCheckinResponse, RecentCheckin, UploadFile,
    UploadResult,
};
use crate::utils::errors::{CheckinError, Result};

/// Error body shape used by the backend for every failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

/// Health endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// HTTP client for the check-in backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(CheckinError::Http)?;

        // Relative joins keep any path prefix of the base URL
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base)?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Decode a response, mapping non-2xx statuses to [`CheckinError::Api`]
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.detail);
            return Err(CheckinError::api(status.as_u16(), detail));
        }

        serde_json::from_slice(&body).map_err(|e| CheckinError::InvalidResponse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        Self::parse(response).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST");
        let response = self.client.post(url).send().await?;
        Self::parse(response).await
    }

    /// `GET /health`
    pub async fn health_check(&self) -> Result<HealthStatus> {
        self.get("health").await
    }

    /// `POST /csv/upload` with the file as multipart field `file`
    pub async fn upload_csv(&self, file: &UploadFile) -> Result<UploadResult> {
        let url = self.endpoint("csv/upload")?;
        debug!(url = %url, file_name = %file.file_name, bytes = file.bytes.len(), "POST multipart");

        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;
        Self::parse(response).await
    }

    /// `GET /csv/stats`
    pub async fn csv_stats(&self) -> Result<CsvStats> {
        self.get("csv/stats").await
    }

    /// `GET /csv/participants`
    pub async fn participants(&self) -> Result<Vec<Participant>> {
        self.get("csv/participants").await
    }

    /// `GET /csv/participants/{email}`
    pub async fn lookup_participant(&self, email: &str) -> Result<ParticipantLookup> {
        let path = format!("csv/participants/{}", urlencoding::encode(email));
        self.get(&path).await
    }

    /// `DELETE /csv/participants`
    pub async fn delete_participants(&self) -> Result<DeleteParticipantsResponse> {
        let url = self.endpoint("csv/participants")?;
        debug!(url = %url, "DELETE");
        let response = self.client.delete(url).send().await?;
        Self::parse(response).await
    }

    /// `GET /events/`
    pub async fn events(&self) -> Result<Vec<Event>> {
        self.get("events/").await
    }

    /// `GET /checkin/stats/{event_id}`
    pub async fn event_stats(&self, event_id: EventId) -> Result<EventStats> {
        self.get(&format!("checkin/stats/{}", event_id)).await
    }

    /// `GET /checkin/recent/{event_id}?limit=`
    pub async fn recent_checkins(&self, event_id: EventId, limit: u32) -> Result<Vec<RecentCheckin>> {
        self.get(&format!("checkin/recent/{}?limit={}", event_id, limit)).await
    }

    /// `POST /checkin/email?email=&event_id=`
    pub async fn check_in_by_email(&self, email: &str, event_id: EventId) -> Result<EmailCheckinResponse> {
        let path = format!(
            "checkin/email?email={}&event_id={}",
            urlencoding::encode(email),
            event_id
        );
        self.post(&path).await
    }

    /// `POST /checkin/qr?ticket_id=&event_id=`
    pub async fn check_in_by_qr(&self, ticket_id: &str, event_id: EventId) -> Result<QrCheckinResponse> {
        let path = format!(
            "checkin/qr?ticket_id={}&event_id={}",
            urlencoding::encode(ticket_id),
            event_id
        );
        self.post(&path).await
    }
}
