//! Error category classification.
//!
//! Categories drive what the dashboard tells the operator: whether pressing
//! the action again may help, and what to check first.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures: connection refused, DNS, timeout.
    Network,

    /// Login rejected or admin headers refused by the API.
    Auth,

    /// The API answered with a 5xx status.
    Server,

    /// The API answered with something this client cannot use
    /// (unexpected body, unexpected 4xx).
    Client,

    /// The operator asked for something the dashboard refuses locally
    /// (page out of range, bad field value, read-only resource).
    User,

    /// Local filesystem or terminal problems.
    System,

    /// Invalid environment or startup settings.
    Configuration,
}

impl ErrorCategory {
    /// Classify an HTTP status returned by the API.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorCategory::Auth,
            500..=599 => ErrorCategory::Server,
            _ => ErrorCategory::Client,
        }
    }

    /// Whether repeating the same action later may succeed.
    ///
    /// Nothing in the dashboard retries on its own; this only decides
    /// whether the status line suggests trying again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested next step, shown under the error in the status line.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check the connection to the API and press the key again",
            ErrorCategory::Auth => "Log out with Ctrl-L and sign in again",
            ErrorCategory::Server => "The API is failing; try again in a moment",
            ErrorCategory::Client => "The API returned something unexpected",
            ErrorCategory::User => "Adjust the input and try again",
            ErrorCategory::System => "Check permissions of the data directory",
            ErrorCategory::Configuration => "Check the ABD_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorCategory::from_status(401), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_status(403), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_status(404), ErrorCategory::Client);
        assert_eq!(ErrorCategory::from_status(422), ErrorCategory::Client);
        assert_eq!(ErrorCategory::from_status(500), ErrorCategory::Server);
        assert_eq!(ErrorCategory::from_status(503), ErrorCategory::Server);
    }

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Auth.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(format!("{}", ErrorCategory::User), "user");
    }

    #[test]
    fn test_recovery_hint_mentions_logout_for_auth() {
        assert!(ErrorCategory::Auth.recovery_hint().contains("Ctrl-L"));
    }
}
