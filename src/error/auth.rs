//! Authentication-related error types.

use std::fmt;

/// Errors from the admin login check.
#[derive(Debug, Clone)]
pub enum AuthError {
    /// The API answered the login check with a non-success status.
    InvalidCredentials { status: u16 },

    /// The session says logged in but no credentials are available.
    NotLoggedIn,

    /// Login or password field left empty.
    MissingInput { field: &'static str },
}

impl AuthError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials { .. } => "Wrong login or password.".to_string(),
            AuthError::NotLoggedIn => "Please sign in to continue.".to_string(),
            AuthError::MissingInput { field } => format!("Enter the {}.", field),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials { .. } => "E_AUTH_INVALID",
            AuthError::NotLoggedIn => "E_AUTH_NOT_LOGGED_IN",
            AuthError::MissingInput { .. } => "E_AUTH_INPUT",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials { status } => {
                write!(f, "Admin credentials rejected (HTTP {})", status)
            }
            AuthError::NotLoggedIn => write!(f, "Not logged in"),
            AuthError::MissingInput { field } => write!(f, "Missing {}", field),
        }
    }
}

impl std::error::Error for AuthError {}
