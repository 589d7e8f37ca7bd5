//! Resume-to-job matching: parsing and scoring endpoints, plus the staged
//! client workflow (upload, job input, result) that persists state between
//! pages and talks to the backend through pluggable collaborators.

pub mod client;
pub mod config;
pub mod error;
pub mod matching;
pub mod scrub;
pub mod session;
pub mod types;
pub mod view;
pub mod web;
pub mod workflow;

use anyhow::Result;

pub use web::start_web_server;

use client::ServiceClient;
use config::ConfigManager;
use session::{FileStore, Session};
use workflow::Workflow;

/// Convenience constructor: a workflow wired to the configured remote
/// backend, with its session persisted on disk.
pub fn open_workflow(
    config: &ConfigManager,
) -> Result<Workflow<ServiceClient, ServiceClient, FileStore>> {
    let parser = ServiceClient::new(
        config.service.backend_url.clone(),
        config.service.timeout_seconds,
    )?;
    let matcher = ServiceClient::new(
        config.service.backend_url.clone(),
        config.service.timeout_seconds,
    )?;
    let store = FileStore::open(config.environment.session_path.clone())?;

    Ok(Workflow::new(parser, matcher, Session::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{EnvironmentConfig, ServiceConfig};

    #[test]
    fn test_open_workflow_starts_at_resume_upload() {
        let session_path =
            std::env::temp_dir().join(format!("resumatch_wf_{}", uuid::Uuid::new_v4()));
        let config = ConfigManager {
            environment: EnvironmentConfig {
                session_path: session_path.clone(),
            },
            service: ServiceConfig {
                backend_url: "http://127.0.0.1:9".to_string(),
                timeout_seconds: 5,
            },
        };

        let flow = open_workflow(&config).expect("workflow");
        assert_eq!(flow.state(), workflow::WorkflowState::NoResume);

        let _ = std::fs::remove_dir_all(&session_path);
    }
}
