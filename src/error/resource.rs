//! Errors raised by a resource controller before or instead of a request.

use thiserror::Error;

/// Client-side rejections of a controller operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceError {
    /// Requested page is outside `1..=pages`.
    #[error("Page {requested} is out of range (1..={pages})")]
    InvalidPage { requested: u32, pages: u32 },

    /// The resource does not accept create, update or delete.
    #[error("Resource '{resource}' is read-only")]
    ReadOnly { resource: &'static str },

    /// Field is not part of the writable set.
    #[error("Field '{field}' cannot be edited")]
    UnknownField { field: String },

    /// Raw text could not be coerced to the field's type.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Rows per page must be at least one.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// A dialog action was issued with no dialog open.
    #[error("No dialog is open")]
    NoDraft,

    /// The item could not be fetched.
    #[error("Item #{id} not found")]
    NotFound { id: i64 },
}

impl ResourceError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ResourceError::InvalidPage { requested, pages } => {
                format!("There is no page {} (last page is {}).", requested, pages)
            }
            ResourceError::ReadOnly { .. } => "This table cannot be edited.".to_string(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ResourceError::InvalidPage { .. } => "E_RES_PAGE",
            ResourceError::ReadOnly { .. } => "E_RES_READ_ONLY",
            ResourceError::UnknownField { .. } => "E_RES_FIELD",
            ResourceError::InvalidValue { .. } => "E_RES_VALUE",
            ResourceError::InvalidPageSize => "E_RES_PAGE_SIZE",
            ResourceError::NoDraft => "E_RES_NO_DRAFT",
            ResourceError::NotFound { .. } => "E_RES_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_message() {
        let err = ResourceError::InvalidPage {
            requested: 9,
            pages: 4,
        };
        assert_eq!(err.to_string(), "Page 9 is out of range (1..=4)");
        assert!(err.user_message().contains("last page is 4"));
        assert_eq!(err.error_code(), "E_RES_PAGE");
    }

    #[test]
    fn test_read_only_message() {
        let err = ResourceError::ReadOnly { resource: "car" };
        assert_eq!(err.to_string(), "Resource 'car' is read-only");
    }
}
