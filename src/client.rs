// src/client.rs
//! HTTP client for a remote parsing/matching backend

use crate::error::FlowError;
use crate::types::{ErrorDetail, JobQuery, MatchRequest, MatchResultModel, ResumeModel};
use crate::workflow::{MatchingCollaborator, ParsingCollaborator};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{error, trace};

const PARSE_RESUME_ENDPOINT: &str = "/parse-resume";
const MATCH_RESUME_ENDPOINT: &str = "/match-resume";

/// Client for the two backend endpoints. Implements both collaborator
/// traits, so a workflow can run against a remote backend unchanged.
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self, FlowError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| FlowError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn content_type(file_name: &str) -> &'static str {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            "application/pdf"
        } else if lower.ends_with(".docx") {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        } else {
            "text/plain"
        }
    }
}

#[rocket::async_trait]
impl ParsingCollaborator for ServiceClient {
    async fn parse_resume(&self, file_name: &str, bytes: &[u8]) -> Result<ResumeModel, FlowError> {
        let url = format!("{}{}", self.base_url, PARSE_RESUME_ENDPOINT);
        let form = Form::new().part(
            "file",
            Part::bytes(bytes.to_vec())
                .file_name(file_name.to_string())
                .mime_str(Self::content_type(file_name))
                .map_err(|e| FlowError::Transport(format!("Failed to build multipart: {e}")))?,
        );

        trace!("Calling resume parsing service: {}", url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| FlowError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<ResumeModel>()
                .await
                .map_err(|e| FlowError::Transport(format!("Failed to parse response: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Resume parsing service error {}: {}", status, body);
            Err(error_from_reply(status, &body))
        }
    }
}

#[rocket::async_trait]
impl MatchingCollaborator for ServiceClient {
    async fn match_resume(
        &self,
        resume: &ResumeModel,
        query: &JobQuery,
    ) -> Result<MatchResultModel, FlowError> {
        let url = format!("{}{}", self.base_url, MATCH_RESUME_ENDPOINT);
        let payload = MatchRequest::new(resume, query);

        trace!("Calling job matching service: {}", url);
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FlowError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<MatchResultModel>()
                .await
                .map_err(|e| FlowError::Transport(format!("Failed to parse response: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Job matching service error {}: {}", status, body);
            Err(error_from_reply(status, &body))
        }
    }
}

/// A non-2xx reply with a parsable `detail` body is a backend error whose
/// detail is surfaced verbatim; anything else is a transport failure.
fn error_from_reply(status: StatusCode, body: &str) -> FlowError {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(reply) => FlowError::Backend(reply.detail),
        Err(_) => FlowError::Transport(format!("status {status}: {body}")),
    }
}
