//! Session store trait abstraction.
//!
//! The dashboard keeps a tiny amount of durable client state (the logged-in
//! marker, the last page per view, the language preference). This trait is
//! the only way that state reaches storage, so the file-backed store can be
//! swapped for an in-memory one in tests.

use async_trait::async_trait;

use crate::session::SessionState;

/// Session storage errors.
#[derive(Debug, Clone)]
pub enum SessionStoreError {
    /// Failed to load the session
    LoadFailed(String),
    /// Failed to save the session
    SaveFailed(String),
    /// Failed to clear the session
    ClearFailed(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl std::fmt::Display for SessionStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStoreError::LoadFailed(msg) => write!(f, "Failed to load session: {}", msg),
            SessionStoreError::SaveFailed(msg) => write!(f, "Failed to save session: {}", msg),
            SessionStoreError::ClearFailed(msg) => write!(f, "Failed to clear session: {}", msg),
            SessionStoreError::Serialization(msg) => {
                write!(f, "Session serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SessionStoreError {}

/// Trait for durable session storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<SessionState>, SessionStoreError>;

    /// Persist the whole session state.
    async fn save(&self, state: &SessionState) -> Result<(), SessionStoreError>;

    /// Remove the stored session entirely.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
