// src/session.rs
//! Persisted cross-stage workflow state
//!
//! The session is the only holder of parsed resumes and match results
//! between stages. Reads validate shape before trusting anything: a
//! malformed persisted value is treated as absent, never a crash, because
//! the value may have been written by a different execution context.

use crate::types::{MatchResultModel, ResumeModel};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub const RESUME_KEY: &str = "parsedResume";
pub const MATCH_KEY: &str = "matchResult";

/// String key/value persistence, the shape of client-local storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-process store for tests and single-run embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// One file per key under a directory, so state survives across runs the
/// way browser storage survives across page loads. Write failures are
/// logged, not fatal; a later read simply sees the value as absent.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create session directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn put(&mut self, key: &str, value: String) {
        if let Err(e) = fs::write(self.key_path(key), value) {
            warn!("Failed to persist session key {}: {}", key, e);
        }
    }

    fn remove(&mut self, key: &str) {
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                warn!("Failed to remove session key {}: {}", key, e);
            }
        }
    }
}

/// Typed access to the two session slots. Holds at most one resume and at
/// most one match result, and never exposes a match result whose
/// originating resume is gone.
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn resume(&self) -> Option<ResumeModel> {
        self.read_value(RESUME_KEY)
    }

    pub fn match_result(&self) -> Option<MatchResultModel> {
        // A match result is meaningless without the resume it was computed
        // against.
        self.resume()?;
        self.read_value(MATCH_KEY)
    }

    /// Store a freshly parsed resume. Any match result computed against a
    /// previous resume is cleared in the same step.
    pub fn store_resume(&mut self, resume: &ResumeModel) {
        self.write_value(RESUME_KEY, resume);
        self.store.remove(MATCH_KEY);
    }

    /// Store a match outcome, replacing any previous one.
    pub fn store_match_result(&mut self, result: &MatchResultModel) {
        self.write_value(MATCH_KEY, result);
    }

    /// Drop both models.
    pub fn clear(&mut self) {
        self.store.remove(RESUME_KEY);
        self.store.remove(MATCH_KEY);
    }

    fn read_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding malformed session value for {}: {}", key, e);
                None
            }
        }
    }

    fn write_value<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(serialized) => self.store.put(key, serialized),
            Err(e) => warn!("Failed to serialize session value for {}: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactInfo;

    fn sample_resume() -> ResumeModel {
        ResumeModel::new(
            ContactInfo {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@x.com".to_string()),
                phone: None,
            },
            vec!["Python".to_string()],
        )
    }

    fn sample_match() -> MatchResultModel {
        MatchResultModel {
            match_score: 75.0,
            matched_skills: vec!["Python".to_string()],
        }
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut session = Session::new(MemoryStore::default());
        session.store_resume(&sample_resume());
        session.store_match_result(&sample_match());

        assert_eq!(session.resume(), Some(sample_resume()));
        assert_eq!(session.match_result(), Some(sample_match()));
    }

    #[test]
    fn test_new_resume_clears_stale_match() {
        let mut session = Session::new(MemoryStore::default());
        session.store_resume(&sample_resume());
        session.store_match_result(&sample_match());

        session.store_resume(&sample_resume());
        assert!(session.match_result().is_none());
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let mut store = MemoryStore::default();
        store.put(RESUME_KEY, "{not json".to_string());
        store.put(MATCH_KEY, "[1, 2".to_string());

        let session = Session::new(store);
        assert!(session.resume().is_none());
        assert!(session.match_result().is_none());
    }

    #[test]
    fn test_match_without_resume_is_never_exposed() {
        let mut store = MemoryStore::default();
        store.put(
            MATCH_KEY,
            serde_json::to_string(&sample_match()).expect("serialize"),
        );

        let session = Session::new(store);
        assert!(session.match_result().is_none());
    }

    #[test]
    fn test_clear_removes_both_slots() {
        let mut session = Session::new(MemoryStore::default());
        session.store_resume(&sample_resume());
        session.store_match_result(&sample_match());
        session.clear();

        assert!(session.resume().is_none());
        assert!(session.match_result().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("resumatch_session_{}", uuid::Uuid::new_v4()));
        let mut session = Session::new(FileStore::open(dir.clone()).expect("open store"));

        session.store_resume(&sample_resume());
        assert_eq!(session.resume(), Some(sample_resume()));

        session.clear();
        assert!(session.resume().is_none());

        let _ = std::fs::remove_dir_all(dir);
    }
}
