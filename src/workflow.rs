// src/workflow.rs
//! Three-stage workflow state machine: Upload -> Job Input -> Result
//!
//! State is derived from session presence on every read rather than cached,
//! so a machine handed a session written elsewhere always sees a consistent
//! picture. The machine is cyclic: a new job query replaces the match
//! result, a new resume returns everything to the start.

use crate::error::FlowError;
use crate::session::{Session, SessionStore};
use crate::types::{JobQuery, MatchResultModel, ResumeModel};
use std::fmt;
use tracing::{info, warn};

/// Upload extensions accepted by the parse contract.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    NoResume,
    ResumeReady,
    MatchReady,
}

/// Navigable entry points into the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Upload,
    JobInput,
    Result,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Upload => write!(f, "upload"),
            Stage::JobInput => write!(f, "job input"),
            Stage::Result => write!(f, "result"),
        }
    }
}

/// Turns an uploaded file into a structured resume.
#[rocket::async_trait]
pub trait ParsingCollaborator: Send + Sync {
    async fn parse_resume(&self, file_name: &str, bytes: &[u8]) -> Result<ResumeModel, FlowError>;
}

/// Compares a structured resume against a job query.
#[rocket::async_trait]
pub trait MatchingCollaborator: Send + Sync {
    async fn match_resume(
        &self,
        resume: &ResumeModel,
        query: &JobQuery,
    ) -> Result<MatchResultModel, FlowError>;
}

/// The workflow orchestrator. One outstanding call per action: the busy
/// flags gate re-submission and are cleared on success and failure alike.
pub struct Workflow<P, M, S>
where
    P: ParsingCollaborator,
    M: MatchingCollaborator,
    S: SessionStore,
{
    parser: P,
    matcher: M,
    session: Session<S>,
    parsing: bool,
    matching: bool,
}

impl<P, M, S> Workflow<P, M, S>
where
    P: ParsingCollaborator,
    M: MatchingCollaborator,
    S: SessionStore,
{
    pub fn new(parser: P, matcher: M, session: Session<S>) -> Self {
        Self {
            parser,
            matcher,
            session,
            parsing: false,
            matching: false,
        }
    }

    pub fn state(&self) -> WorkflowState {
        match (self.session.resume(), self.session.match_result()) {
            (None, _) => WorkflowState::NoResume,
            (Some(_), None) => WorkflowState::ResumeReady,
            (Some(_), Some(_)) => WorkflowState::MatchReady,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn is_parsing(&self) -> bool {
        self.parsing
    }

    pub fn is_matching(&self) -> bool {
        self.matching
    }

    /// Resolve a stage entry. Stages entered without their prerequisite
    /// persisted data redirect to Upload instead of rendering partial data.
    pub fn enter(&self, stage: Stage) -> Stage {
        let allowed = match stage {
            Stage::Upload => true,
            Stage::JobInput => self.session.resume().is_some(),
            Stage::Result => self.session.match_result().is_some(),
        };
        if allowed {
            stage
        } else {
            info!("Redirecting {} entry to upload: prerequisite state missing", stage);
            Stage::Upload
        }
    }

    /// Parse an uploaded file and store the result, clearing any match
    /// computed against a previous resume. On failure the held state is
    /// untouched.
    pub async fn submit_resume(
        &mut self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<ResumeModel, FlowError> {
        if self.parsing {
            return Err(FlowError::validation("a resume parse is already in flight"));
        }
        validate_resume_file(file_name, bytes)?;

        let busy = BusyGuard::engage(&mut self.parsing);
        let outcome = self.parser.parse_resume(file_name, bytes).await;
        drop(busy);

        let resume = outcome?;
        self.session.store_resume(&resume);
        info!(
            "Stored parsed resume with {} skill(s) from {}",
            resume.skills.len(),
            file_name
        );
        Ok(resume)
    }

    /// Run one job comparison against the held resume. Valid only with a
    /// resume present; may be repeated with different queries without
    /// re-parsing.
    pub async fn submit_job_query(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<MatchResultModel, FlowError> {
        if self.matching {
            return Err(FlowError::validation("a match request is already in flight"));
        }
        let query = JobQuery::new(title, description)?;
        let resume = self
            .session
            .resume()
            .ok_or(FlowError::StatePresence(Stage::JobInput))?;

        let busy = BusyGuard::engage(&mut self.matching);
        let outcome = self.matcher.match_resume(&resume, &query).await;
        drop(busy);

        let result = sanitize_match_result(&resume, outcome?);
        self.session.store_match_result(&result);
        info!(
            "Stored match result: score {} with {} matched skill(s)",
            result.match_score,
            result.matched_skills.len()
        );
        Ok(result)
    }

    /// Return to job input for another comparison. The resume is retained;
    /// the previous result stays until a new one overwrites it.
    pub fn request_new_job_query(&mut self) -> Result<Stage, FlowError> {
        if self.session.resume().is_none() {
            return Err(FlowError::StatePresence(Stage::JobInput));
        }
        Ok(Stage::JobInput)
    }

    /// Start over with a fresh upload: both models are cleared.
    pub fn request_new_resume(&mut self) -> Stage {
        self.session.clear();
        Stage::Upload
    }
}

/// Local validation applied before any network call is issued.
fn validate_resume_file(file_name: &str, bytes: &[u8]) -> Result<(), FlowError> {
    if file_name.trim().is_empty() {
        return Err(FlowError::validation("no file selected"));
    }
    if bytes.is_empty() {
        return Err(FlowError::validation("uploaded file is empty"));
    }
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| FlowError::validation(format!("file has no extension: {file_name}")))?;
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FlowError::validation(format!(
            "unsupported file extension: {extension}. Allowed: {ALLOWED_EXTENSIONS:?}"
        )));
    }
    Ok(())
}

/// Sets a busy flag for as long as it lives, including when the in-flight
/// future is dropped before completion.
struct BusyGuard<'a>(&'a mut bool);

impl<'a> BusyGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Collaborator replies are untrusted. The score is forced back into
/// [0, 100], and the orchestrator never reports skills the resume does not
/// hold: invented entries are dropped, compared case-insensitively.
fn sanitize_match_result(resume: &ResumeModel, mut result: MatchResultModel) -> MatchResultModel {
    if result.match_score.is_nan() {
        warn!("Replacing non-numeric match score with 0");
        result.match_score = 0.0;
    } else if !(0.0..=100.0).contains(&result.match_score) {
        warn!("Clamping out-of-range match score {}", result.match_score);
        result.match_score = result.match_score.clamp(0.0, 100.0);
    }
    result.matched_skills.retain(|skill| {
        let known = resume.has_skill_ci(skill);
        if !known {
            warn!("Dropping matched skill absent from resume: {}", skill);
        }
        known
    });
    result
}
