//! Messages delivered to the app from background tasks.

use crate::auth::AdminCredentials;

/// Results that arrive outside the key-event path.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The login check finished.
    LoginFinished(LoginOutcome),
}

#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Accepted(AdminCredentials),
    /// Rejected or unreachable, with the message for the login screen.
    Rejected(String),
}
