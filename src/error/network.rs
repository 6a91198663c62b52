//! Network-related error types.
//!
//! Covers the three ways a remote call can go wrong: the request never
//! completed, the API answered with a non-success status, or the body could
//! not be understood.

use std::fmt;

use super::category::ErrorCategory;
use crate::traits::{HttpError, Response};

/// Longest slice of a response body kept in an error message.
const MAX_BODY_IN_MESSAGE: usize = 200;

/// Network-specific error variants.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// The response body did not match the expected shape.
    InvalidResponse { message: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Classify a transport error from the HTTP client.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) | HttpError::Io(message) => {
                NetworkError::ConnectionFailed {
                    url: url.to_string(),
                    message,
                }
            }
            HttpError::Timeout(message) => NetworkError::Timeout {
                url: url.to_string(),
                message,
            },
            HttpError::Cancelled => NetworkError::Cancelled,
            HttpError::InvalidUrl(message) | HttpError::Other(message) => {
                NetworkError::Other { message }
            }
        }
    }

    /// Build a status error from a non-success response, keeping a short
    /// prefix of the body (FastAPI-style `detail` messages live there).
    pub fn from_response(response: &Response) -> Self {
        let body = response.text().unwrap_or_default();
        let message = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(json) => match json.get("detail") {
                Some(serde_json::Value::String(detail)) => detail.clone(),
                Some(other) => other.to_string(),
                None => truncate(&body),
            },
            Err(_) => truncate(&body),
        };
        NetworkError::HttpStatus {
            status: response.status,
            message,
        }
    }

    /// Wrap a body decoding failure.
    pub fn invalid_body(err: serde_json::Error) -> Self {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => {
                ErrorCategory::Network
            }
            NetworkError::HttpStatus { status, .. } => ErrorCategory::from_status(*status),
            NetworkError::InvalidResponse { .. } => ErrorCategory::Client,
            NetworkError::Cancelled | NetworkError::Other { .. } => ErrorCategory::Network,
        }
    }

    /// Check if repeating the action later may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the API. Check the connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The API did not answer in time.".to_string()
            }
            NetworkError::HttpStatus { status, message } => match *status {
                400 | 422 => format!("The API rejected the data: {}", message),
                401 | 403 => "The API refused the admin credentials.".to_string(),
                404 => "The record no longer exists.".to_string(),
                500..=599 => format!("The API failed (HTTP {}).", status),
                _ => format!("The API returned HTTP {}.", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "The API answered with data this dashboard does not understand.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_BODY_IN_MESSAGE {
        return body.to_string();
    }
    let mut end = MAX_BODY_IN_MESSAGE;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_from_http_classification() {
        let err = NetworkError::from_http(
            HttpError::ConnectionFailed("refused".to_string()),
            "http://localhost/admin/car/",
        );
        assert!(matches!(err, NetworkError::ConnectionFailed { .. }));
        assert!(err.is_retryable());

        let err = NetworkError::from_http(HttpError::Timeout("30s".to_string()), "http://x");
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");

        let err = NetworkError::from_http(HttpError::InvalidUrl("bad".to_string()), "bad");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_response_uses_detail() {
        let response = Response::new(422, Bytes::from(r#"{"detail":"price must be positive"}"#));
        let err = NetworkError::from_response(&response);
        match err {
            NetworkError::HttpStatus { status, ref message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "price must be positive");
            }
            _ => panic!("expected HttpStatus"),
        }
        assert!(err.user_message().contains("price must be positive"));
    }

    #[test]
    fn test_from_response_truncates_plain_body() {
        let body = "x".repeat(500);
        let response = Response::new(500, Bytes::from(body));
        match NetworkError::from_response(&response) {
            NetworkError::HttpStatus { message, .. } => {
                assert!(message.len() < 500);
                assert!(message.ends_with("..."));
            }
            _ => panic!("expected HttpStatus"),
        }
    }

    #[test]
    fn test_status_categories() {
        let server = NetworkError::HttpStatus {
            status: 500,
            message: String::new(),
        };
        assert_eq!(server.category(), ErrorCategory::Server);
        assert!(server.is_retryable());

        let auth = NetworkError::HttpStatus {
            status: 401,
            message: String::new(),
        };
        assert_eq!(auth.category(), ErrorCategory::Auth);
        assert!(!auth.is_retryable());
    }

    #[test]
    fn test_invalid_body() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = NetworkError::invalid_body(json_err);
        assert_eq!(err.category(), ErrorCategory::Client);
        assert_eq!(err.error_code(), "E_NET_INVALID");
    }
}
