//! Remote backend client — the single point of entry for every HTTP call
//! the wizard and the recommendation caches make.
//!
//! The system of record, the job matcher, and the cover-letter generator
//! are opaque endpoints behind one base URL; everything here speaks to them
//! through the `ResumeBackend` trait so tests can swap in mocks.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::feeds::{
    CoverLetterRequest, CoverLetterResponse, JobPosting, NetworkingResources,
};
use crate::models::resume::ResumeRecord;
use crate::wizard::section::Section;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BackendError {
    /// Every remote failure is recoverable; this is the retryable message
    /// shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Http(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            BackendError::Api { message, .. } => message.clone(),
            BackendError::Parse(_) => {
                "The server returned an unexpected response. Please try again.".to_string()
            }
        }
    }
}

/// The remote contract the wizard and the feed caches depend on.
/// Carried as `Arc<dyn ResumeBackend>` so mocks can stand in for HTTP.
#[async_trait]
pub trait ResumeBackend: Send + Sync {
    /// Fetches the full stored resume for a returning user.
    async fn fetch_resume(&self, user_id: Uuid) -> Result<ResumeRecord, BackendError>;

    /// Persists one section's slice of the record. Idempotent.
    async fn persist_section(
        &self,
        user_id: Uuid,
        section: Section,
        body: Value,
    ) -> Result<(), BackendError>;

    /// Marks the whole resume complete on the system of record.
    async fn finalize_resume(&self, user_id: Uuid) -> Result<(), BackendError>;

    async fn fetch_job_matches(&self, user_id: Uuid) -> Result<Vec<JobPosting>, BackendError>;

    async fn fetch_networking(&self, user_id: Uuid) -> Result<NetworkingResources, BackendError>;

    async fn fetch_skill_suggestions(&self, user_id: Uuid) -> Result<Vec<String>, BackendError>;

    async fn generate_cover_letter(
        &self,
        request: &CoverLetterRequest,
    ) -> Result<String, BackendError>;
}

#[derive(Debug, Deserialize)]
struct NetworkingEnvelope {
    networking: NetworkingResources,
}

#[derive(Debug, Deserialize)]
struct SkillsEnvelope {
    skills: Vec<String>,
}

/// HTTP implementation of `ResumeBackend` against the configured base URL.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout_secs: Option<u64>) -> Self {
        let timeout = std::time::Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Converts a non-2xx response into `BackendError::Api`, pulling the
    /// `message` field out of the JSON error body when there is one.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Api {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}

#[async_trait]
impl ResumeBackend for HttpBackend {
    async fn fetch_resume(&self, user_id: Uuid) -> Result<ResumeRecord, BackendError> {
        let response = self
            .client
            .get(self.url(&format!("resume/{user_id}")))
            .send()
            .await?;
        let record = Self::check_status(response).await?.json().await?;
        debug!("Fetched stored resume for user {user_id}");
        Ok(record)
    }

    async fn persist_section(
        &self,
        user_id: Uuid,
        section: Section,
        body: Value,
    ) -> Result<(), BackendError> {
        let response = self
            .client
            .put(self.url(&format!("resume/{user_id}/{}", section.endpoint())))
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;
        debug!("Persisted section {} for user {user_id}", section.title());
        Ok(())
    }

    async fn finalize_resume(&self, user_id: Uuid) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.url(&format!("resume/{user_id}/finalize")))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn fetch_job_matches(&self, user_id: Uuid) -> Result<Vec<JobPosting>, BackendError> {
        let response = self
            .client
            .post(self.url("recommend/jobs"))
            .json(&json!({ "user_id": user_id }))
            .send()
            .await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    async fn fetch_networking(&self, user_id: Uuid) -> Result<NetworkingResources, BackendError> {
        let response = self
            .client
            .post(self.url("recommend/networking"))
            .json(&json!({ "user_id": user_id }))
            .send()
            .await?;
        let envelope: NetworkingEnvelope = Self::check_status(response).await?.json().await?;
        Ok(envelope.networking)
    }

    async fn fetch_skill_suggestions(&self, user_id: Uuid) -> Result<Vec<String>, BackendError> {
        let response = self
            .client
            .post(self.url("recommend/skills"))
            .json(&json!({ "user_id": user_id }))
            .send()
            .await?;
        let envelope: SkillsEnvelope = Self::check_status(response).await?.json().await?;
        Ok(envelope.skills)
    }

    async fn generate_cover_letter(
        &self,
        request: &CoverLetterRequest,
    ) -> Result<String, BackendError> {
        let response = self
            .client
            .post(self.url("cover-letter"))
            .json(request)
            .send()
            .await?;
        let body: CoverLetterResponse = Self::check_status(response).await?.json().await?;
        Ok(body.cover_letter)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pulls the `message` field from a JSON error body, falling back to the
/// raw text (or a placeholder for an empty body).
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "The server reported an error.".to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_json_body() {
        let body = r#"{"message":"Email is already registered"}"#;
        assert_eq!(extract_error_message(body), "Email is already registered");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_text() {
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_extract_error_message_empty_body() {
        assert_eq!(extract_error_message(""), "The server reported an error.");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("https://api.example.com/", None);
        assert_eq!(
            backend.url("resume/u1"),
            "https://api.example.com/resume/u1"
        );
    }

    #[test]
    fn test_api_error_user_message_uses_remote_message() {
        let err = BackendError::Api {
            status: 422,
            message: "Missing required field: name".to_string(),
        };
        assert_eq!(err.user_message(), "Missing required field: name");
    }
}
