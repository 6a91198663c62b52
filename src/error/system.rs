//! System-related error types.
//!
//! Local failures: the data directory, the session file, the terminal and
//! startup configuration.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// Could not determine home directory.
    NoHomeDirectory,

    /// Generic I/O error.
    Io {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// The session file could not be written.
    Session { message: String },

    /// Invalid startup setting or preference.
    Config { message: String },

    /// Terminal could not be set up or restored.
    Terminal { message: String },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NoHomeDirectory => {
                "Could not determine your home directory.".to_string()
            }
            SystemError::Io {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::Session { .. } => {
                "Could not save the session; the change is kept for this run only.".to_string()
            }
            SystemError::Config { message } => message.clone(),
            SystemError::Terminal { message } => format!("Terminal error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NoHomeDirectory => "E_SYS_NO_HOME",
            SystemError::Io { .. } => "E_SYS_IO",
            SystemError::Session { .. } => "E_SYS_SESSION",
            SystemError::Config { .. } => "E_SYS_CONFIG",
            SystemError::Terminal { .. } => "E_SYS_TERMINAL",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            SystemError::Io {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(
                    f,
                    "I/O error during {} at '{}': {}",
                    operation,
                    p.display(),
                    message
                ),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::Session { message } => write!(f, "Session error: {}", message),
            SystemError::Config { message } => write!(f, "Configuration error: {}", message),
            SystemError::Terminal { message } => write!(f, "Terminal error: {}", message),
        }
    }
}

impl std::error::Error for SystemError {}

/// Wrap an I/O error with the operation and path that produced it.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    SystemError::Io {
        operation: operation.to_string(),
        path,
        message: err.to_string(),
    }
}
