// src/types/job.rs
//! Job query, match result, and the wire shapes shared by client and server

use crate::error::FlowError;
use crate::types::resume::ResumeModel;
use serde::{Deserialize, Serialize};

/// A validated job title/description pair. Built fresh per match attempt
/// and never constructed with empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    title: String,
    description: String,
}

impl JobQuery {
    /// Trim and validate both fields. Empty input is rejected locally,
    /// before any request is issued.
    pub fn new(title: &str, description: &str) -> Result<Self, FlowError> {
        let title = title.trim();
        let description = description.trim();

        if title.is_empty() {
            return Err(FlowError::validation("job title must not be empty"));
        }
        if description.is_empty() {
            return Err(FlowError::validation("job description must not be empty"));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Outcome of one resume/job comparison: a relevance percentage and the
/// resume skills the job asked for. Superseded wholesale by the next match
/// attempt, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResultModel {
    pub match_score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
}

/// JSON body of `POST /match-resume`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub resume: ResumeModel,
    pub job_title: String,
    pub job_description: String,
}

impl MatchRequest {
    pub fn new(resume: &ResumeModel, query: &JobQuery) -> Self {
        Self {
            resume: resume.clone(),
            job_title: query.title().to_string(),
            job_description: query.description().to_string(),
        }
    }
}

/// Error body carried by every non-2xx backend reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
