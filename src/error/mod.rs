//! Unified error handling for the dashboard.
//!
//! - **Error Categories**: high-level classification driving what the status
//!   line suggests
//! - **Domain-specific Errors**: network, auth, resource and system errors
//! - **Unified Error Type**: [`AdminError`]
//! - **Error Context**: operation, resource, item and page attached before
//!   logging
//! - **Result Type Alias**: [`AdminResult<T>`]
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Auth | Login rejected | No |
//! | Server | API 5xx | Yes |
//! | Client | Unexpected 4xx or body | No |
//! | User | Rejected locally | No |
//! | System | Filesystem, terminal | No |
//! | Configuration | Bad settings | No |
//!
//! Nothing retries automatically; "retryable" only shapes the message.

mod admin_error;
mod auth;
mod category;
mod context;
mod network;
mod resource;
mod result;
mod system;

pub use admin_error::AdminError;
pub use auth::AuthError;
pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use network::NetworkError;
pub use resource::ResourceError;
pub use result::{AdminResult, ResultExt};
pub use system::{classify_io_error, SystemError};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::traits::{HttpError, Response};

    #[test]
    fn test_error_unification() {
        let errors: Vec<AdminError> = vec![
            NetworkError::from_http(HttpError::Timeout("t".to_string()), "http://x").into(),
            AuthError::InvalidCredentials { status: 403 }.into(),
            ResourceError::NotFound { id: 3 }.into(),
            SystemError::NoHomeDirectory.into(),
        ];

        for err in &errors {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
        assert_eq!(errors[0].category(), ErrorCategory::Network);
        assert_eq!(errors[1].category(), ErrorCategory::Auth);
        assert_eq!(errors[2].category(), ErrorCategory::User);
        assert_eq!(errors[3].category(), ErrorCategory::System);
    }

    #[test]
    fn test_status_response_flows_into_admin_error() {
        let response = Response::new(500, bytes::Bytes::from("Internal Server Error"));
        let err: AdminError = NetworkError::from_response(&response).into();

        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_result_ext_on_domain_errors() {
        fn reject() -> Result<(), ResourceError> {
            Err(ResourceError::ReadOnly { resource: "car" })
        }

        let err = reject()
            .context(ErrorContext::new("create").with_resource("car"))
            .unwrap_err();
        assert_eq!(err.error_code(), "E_RES_READ_ONLY");
        assert_eq!(err.context().unwrap().to_string(), "[create car]");
    }
}
