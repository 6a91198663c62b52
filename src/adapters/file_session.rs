//! File-based session store adapter.
//!
//! Stores the session as pretty-printed JSON, by default in
//! `~/.abd-admin/session.json`.

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use crate::session::SessionState;
use crate::traits::{SessionStore, SessionStoreError};

/// The session file name inside the data directory.
pub const SESSION_FILE: &str = "session.json";

/// File-based session store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session in `data_dir/session.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// Store the session at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<SessionState>, SessionStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| SessionStoreError::LoadFailed(format!("{:?}: {}", self.path, e)))?;
        let state = serde_json::from_str(&raw)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;
        Ok(Some(state))
    }

    async fn save(&self, state: &SessionState) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| SessionStoreError::SaveFailed(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SessionStoreError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::ClearFailed(e.to_string())),
        }
    }
}
