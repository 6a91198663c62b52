//! Admin credentials held in memory for the lifetime of the process.

use crate::traits::Headers;

/// Header carrying the admin login.
pub const LOGIN_HEADER: &str = "login";

/// Header carrying the admin key.
pub const AUTH_HEADER: &str = "auth";

/// The credential pair the API expects on admin endpoints.
///
/// Never serialized: only the logged-in flag reaches disk.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub login: String,
    pub key: String,
}

impl AdminCredentials {
    pub fn new(login: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            key: key.into(),
        }
    }

    /// Add the `login` and `auth` headers to `headers`.
    pub fn apply(&self, headers: &mut Headers) {
        headers.insert(LOGIN_HEADER.to_string(), self.login.clone());
        headers.insert(AUTH_HEADER.to_string(), self.key.clone());
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("login", &self.login)
            .field("key", &"<redacted>")
            .finish()
    }
}
