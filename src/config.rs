// src/config.rs
//! Environment-driven configuration

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// Directory holding the persisted workflow session.
    pub session_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the parse/match backend.
    pub backend_url: String,
    pub timeout_seconds: u64,
}

impl ConfigManager {
    pub fn load() -> Result<Self> {
        Ok(Self {
            environment: Self::load_environment()?,
            service: Self::load_service(),
        })
    }

    fn load_environment() -> Result<EnvironmentConfig> {
        let session_path = match std::env::var("SESSION_STORE_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => std::env::current_dir()
                .context("Failed to get current directory")?
                .join(".resumatch"),
        };
        info!("Session store: {}", session_path.display());

        Ok(EnvironmentConfig { session_path })
    }

    fn load_service() -> ServiceConfig {
        let backend_url =
            std::env::var("RESUME_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        ServiceConfig {
            backend_url,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.environment.session_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to create session directory: {}",
                    self.environment.session_path.display()
                )
            })
    }
}
