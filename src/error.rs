// src/error.rs
//! Failure taxonomy for the matching workflow

use crate::workflow::Stage;
use thiserror::Error;

/// Every failure the workflow can surface. Validation and state-presence
/// failures are produced locally and never reach the network; transport and
/// backend failures come out of a collaborator call.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Missing or empty required input, rejected before any network call.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Backend unreachable, or a non-2xx reply without a usable detail body.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx reply carrying a `detail` string, surfaced verbatim.
    #[error("{0}")]
    Backend(String),

    /// A stage was entered without its prerequisite persisted data.
    /// Handled by redirecting to the upload stage, not shown to the user.
    #[error("missing prerequisite state for the {0} stage")]
    StatePresence(Stage),
}

impl FlowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
