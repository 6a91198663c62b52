//! Result type alias for dashboard operations.

use super::admin_error::AdminError;
use super::context::ErrorContext;

/// Type alias for Results using AdminError.
pub type AdminResult<T> = Result<T, AdminError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// ```ignore
    /// api.delete(id).await.context(ErrorContext::new("remove").with_item_id(id))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> AdminResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AdminError>,
{
    fn context(self, ctx: ErrorContext) -> AdminResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NetworkError, ResourceError};

    #[test]
    fn test_context_extension() {
        let result: AdminResult<i32> = Err(NetworkError::Cancelled.into());
        let err = result
            .context(ErrorContext::new("create").with_resource("tariffs"))
            .unwrap_err();
        assert_eq!(err.context().unwrap().resource.as_deref(), Some("tariffs"));
    }

    #[test]
    fn test_with_context_lazy_on_ok() {
        let mut called = false;
        let result: Result<i32, ResourceError> = Ok(1);
        let value = result
            .with_context(|| {
                called = true;
                ErrorContext::new("never")
            })
            .unwrap();
        assert_eq!(value, 1);
        assert!(!called);
    }

    #[test]
    fn test_io_error_context() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let err = result.context(ErrorContext::new("save_session")).unwrap_err();
        assert_eq!(err.error_code(), "E_SYS_IO");
    }
}
