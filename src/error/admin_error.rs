//! Unified error type for the dashboard.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::resource::ResourceError;
use super::system::SystemError;

/// Every failure the dashboard can report, in one enum.
#[derive(Debug)]
pub enum AdminError {
    /// Transport, status or body errors from the API.
    Network(NetworkError),

    /// Login failures.
    Auth(AuthError),

    /// Rejected controller operations.
    Resource(ResourceError),

    /// Local filesystem, session and terminal errors.
    System(SystemError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<AdminError>,
        context: ErrorContext,
    },
}

impl AdminError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdminError::Network(err) => err.category(),
            AdminError::Auth(_) => ErrorCategory::Auth,
            AdminError::Resource(_) => ErrorCategory::User,
            AdminError::System(SystemError::Config { .. }) => ErrorCategory::Configuration,
            AdminError::System(_) => ErrorCategory::System,
            AdminError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            AdminError::Network(err) => err.is_retryable(),
            AdminError::WithContext { error, .. } => error.is_retryable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Network(err) => err.user_message(),
            AdminError::Auth(err) => err.user_message(),
            AdminError::Resource(err) => err.user_message(),
            AdminError::System(err) => err.user_message(),
            AdminError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Network(err) => err.error_code(),
            AdminError::Auth(err) => err.error_code(),
            AdminError::Resource(err) => err.error_code(),
            AdminError::System(err) => err.error_code(),
            AdminError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        AdminError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            AdminError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &AdminError {
        match self {
            AdminError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Status line text: the user message, plus a hint when retrying helps.
    pub fn status_line(&self) -> String {
        if self.is_retryable() {
            format!("{} {}.", self.user_message(), self.recovery_hint())
        } else {
            self.user_message()
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::Network(err) => write!(f, "{}", err),
            AdminError::Auth(err) => write!(f, "{}", err),
            AdminError::Resource(err) => write!(f, "{}", err),
            AdminError::System(err) => write!(f, "{}", err),
            AdminError::WithContext { error, context } => write!(f, "{} {}", error, context),
        }
    }
}

impl std::error::Error for AdminError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdminError::Network(err) => Some(err),
            AdminError::Auth(err) => Some(err),
            AdminError::Resource(err) => Some(err),
            AdminError::System(err) => Some(err),
            AdminError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for AdminError {
    fn from(err: NetworkError) -> Self {
        AdminError::Network(err)
    }
}

impl From<AuthError> for AdminError {
    fn from(err: AuthError) -> Self {
        AdminError::Auth(err)
    }
}

impl From<ResourceError> for AdminError {
    fn from(err: ResourceError) -> Self {
        AdminError::Resource(err)
    }
}

impl From<SystemError> for AdminError {
    fn from(err: SystemError) -> Self {
        AdminError::System(err)
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        AdminError::System(super::system::classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Network(NetworkError::invalid_body(err))
    }
}
