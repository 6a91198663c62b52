//! Process-wide session state.
//!
//! The dashboard remembers three things between runs: whether the login
//! check has passed, the last page viewed per resource, and the language
//! preference. [`Session`] is the narrow interface to that state: it is read
//! once at startup and written back through a [`SessionStore`] whenever one
//! of those values changes.
//!
//! The logged-in marker is a plain flag with no token or expiry behind it.
//! Anyone able to edit the session file can set it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AdminResult, SystemError};
use crate::traits::SessionStore;

/// Language used when nothing has been stored.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages the dashboard knows how to label.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "ru", "uz"];

/// Durable session fields, serialized as-is to the session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Set once the login check has passed.
    #[serde(default)]
    pub logged_in: bool,
    /// Last page shown per view, keyed by resource path.
    #[serde(default)]
    pub pages: BTreeMap<String, u32>,
    /// Interface language code.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            logged_in: false,
            pages: BTreeMap::new(),
            language: default_language(),
        }
    }
}

/// Session state bound to the store it persists into.
#[derive(Debug)]
pub struct Session<S: SessionStore> {
    store: S,
    state: SessionState,
}

impl<S: SessionStore> Session<S> {
    /// Read the stored session, falling back to defaults.
    ///
    /// A corrupt or unreadable session file is logged and treated as a fresh
    /// session rather than blocking startup.
    pub async fn load(store: S) -> Self {
        let state = match store.load().await {
            Ok(Some(state)) => state,
            Ok(None) => SessionState::default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session: {}", e);
                SessionState::default()
            }
        };
        Self { store, state }
    }

    /// Current snapshot of the session fields.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.logged_in
    }

    /// Mark the session as logged in and persist it.
    pub async fn log_in(&mut self) -> AdminResult<()> {
        self.state.logged_in = true;
        self.persist().await
    }

    /// Clear the logged-in marker and remembered pages.
    ///
    /// The language preference survives a logout.
    pub async fn log_out(&mut self) -> AdminResult<()> {
        self.state.logged_in = false;
        self.state.pages.clear();
        self.persist().await
    }

    /// Last page remembered for `view`, defaulting to the first page.
    pub fn current_page(&self, view: &str) -> u32 {
        self.state.pages.get(view).copied().filter(|p| *p > 0).unwrap_or(1)
    }

    /// Remember `page` for `view`. Writes only when the value changes.
    pub async fn remember_page(&mut self, view: &str, page: u32) -> AdminResult<()> {
        if page == 0 || self.state.pages.get(view) == Some(&page) {
            return Ok(());
        }
        self.state.pages.insert(view.to_string(), page);
        self.persist().await
    }

    pub fn language(&self) -> &str {
        &self.state.language
    }

    /// Switch the interface language. Unknown codes are rejected.
    pub async fn set_language(&mut self, code: &str) -> AdminResult<()> {
        if !SUPPORTED_LANGUAGES.contains(&code) {
            return Err(SystemError::Config {
                message: format!("Unsupported language '{}'", code),
            }
            .into());
        }
        self.state.language = code.to_string();
        self.persist().await
    }

    async fn persist(&self) -> AdminResult<()> {
        self.store.save(&self.state).await.map_err(|e| {
            tracing::warn!("Failed to persist session: {}", e);
            SystemError::Session {
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockSessionStore;

    #[tokio::test]
    async fn test_fresh_session_defaults() {
        let session = Session::load(MockSessionStore::new()).await;
        assert!(!session.is_logged_in());
        assert_eq!(session.current_page("tariffs"), 1);
        assert_eq!(session.language(), "en");
    }

    #[tokio::test]
    async fn test_log_in_persists_flag() {
        let store = MockSessionStore::new();
        let mut session = Session::load(store.clone()).await;

        session.log_in().await.unwrap();

        let stored = store.stored().unwrap();
        assert!(stored.logged_in);
    }

    #[tokio::test]
    async fn test_log_out_clears_pages_keeps_language() {
        let store = MockSessionStore::new();
        let mut session = Session::load(store.clone()).await;
        session.log_in().await.unwrap();
        session.set_language("ru").await.unwrap();
        session.remember_page("car", 4).await.unwrap();

        session.log_out().await.unwrap();

        let stored = store.stored().unwrap();
        assert!(!stored.logged_in);
        assert!(stored.pages.is_empty());
        assert_eq!(stored.language, "ru");
    }

    #[tokio::test]
    async fn test_remember_page_skips_unchanged_writes() {
        let store = MockSessionStore::new();
        let mut session = Session::load(store.clone()).await;

        session.remember_page("users", 3).await.unwrap();
        session.remember_page("users", 3).await.unwrap();
        session.remember_page("users", 0).await.unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(session.current_page("users"), 3);
    }

    #[tokio::test]
    async fn test_unsupported_language_rejected() {
        let mut session = Session::load(MockSessionStore::new()).await;
        assert!(session.set_language("de").await.is_err());
        assert_eq!(session.language(), "en");
    }

    #[tokio::test]
    async fn test_unreadable_store_falls_back_to_defaults() {
        let store = MockSessionStore::new();
        store.set_load_should_fail(true);
        let session = Session::load(store).await;
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_save_failure_surfaces_error() {
        let store = MockSessionStore::new();
        store.set_save_should_fail(true);
        let mut session = Session::load(store).await;

        let err = session.log_in().await.unwrap_err();
        assert_eq!(err.error_code(), "E_SYS_SESSION");
    }

    #[test]
    fn test_session_state_tolerates_missing_fields() {
        let state: SessionState = serde_json::from_str(r#"{"logged_in":true}"#).unwrap();
        assert!(state.logged_in);
        assert_eq!(state.language, "en");
        assert!(state.pages.is_empty());
    }
}
