//! In-memory session store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::session::SessionState;
use crate::traits::{SessionStore, SessionStoreError};

/// In-memory session store.
///
/// Clones share the same backing slot, so a test can hand one clone to a
/// [`crate::session::Session`] and inspect what was written through another.
#[derive(Debug, Clone, Default)]
pub struct MockSessionStore {
    state: Arc<Mutex<Option<SessionState>>>,
    saves: Arc<Mutex<usize>>,
    load_should_fail: Arc<Mutex<bool>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl MockSessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `state`.
    pub fn with_state(state: SessionState) -> Self {
        let store = Self::new();
        *store.state.lock().unwrap() = Some(state);
        store
    }

    /// The currently stored state, if any.
    pub fn stored(&self) -> Option<SessionState> {
        self.state.lock().unwrap().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self) -> Result<Option<SessionState>, SessionStoreError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(SessionStoreError::LoadFailed("mock load failure".to_string()));
        }
        Ok(self.stored())
    }

    async fn save(&self, state: &SessionState) -> Result<(), SessionStoreError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(SessionStoreError::SaveFailed("mock save failure".to_string()));
        }
        *self.state.lock().unwrap() = Some(state.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.state.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MockSessionStore::new();
        assert!(store.load().await.unwrap().is_none());

        let state = SessionState {
            logged_in: true,
            ..Default::default()
        };
        store.save(&state).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(state));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failures_are_configurable() {
        let store = MockSessionStore::new();
        store.set_save_should_fail(true);
        assert!(store.save(&SessionState::default()).await.is_err());
        assert_eq!(store.save_count(), 0);
    }
}
