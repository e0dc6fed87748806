//! CSV participant import models

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::errors::Result;

/// Response of `POST /csv/upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub message: Option<String>,
    pub total_rows: u64,
    pub imported: u64,
    pub duplicates: u64,
    pub errors: u64,
    #[serde(default)]
    pub error_details: Vec<String>,
}

/// Response of `GET /csv/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvStats {
    pub total_participants: u64,
    #[serde(default)]
    pub latest_import: Option<String>,
}

/// Imported hackathon participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Response of `GET /csv/participants/{email}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantLookup {
    pub exists: bool,
    #[serde(default)]
    pub participant: Option<Participant>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `DELETE /csv/participants`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteParticipantsResponse {
    #[serde(default)]
    pub message: String,
    pub deleted_count: u64,
}

/// A file chosen for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping its file name for the multipart part
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());

        Ok(Self { file_name, bytes })
    }
}
