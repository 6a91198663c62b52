//! Error context for enriched error information.
//!
//! A context names the operation that failed and, where known, the resource
//! and item it was working on. It is attached to errors before they are
//! logged so the log line says what the operator was doing.

use chrono::{DateTime, Utc};

/// Context information attached to errors for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `load_page` or `update`.
    pub operation: String,

    /// Resource path the operation targeted, e.g. `tariffs`.
    pub resource: Option<String>,

    /// Item identifier, for single-item operations.
    pub item_id: Option<i64>,

    /// Page number, for list operations.
    pub page: Option<u32>,

    /// When the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            item_id: None,
            page: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_item_id(mut self, id: i64) -> Self {
        self.item_id = Some(id);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Get a `key=value` string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref resource) = self.resource {
            parts.push(format!("resource={}", resource));
        }
        if let Some(id) = self.item_id {
            parts.push(format!("id={}", id));
        }
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));
        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}", self.operation)?;
        if let Some(ref resource) = self.resource {
            write!(f, " {}", resource)?;
        }
        if let Some(id) = self.item_id {
            write!(f, " #{}", id)?;
        }
        if let Some(page) = self.page {
            write!(f, " page {}", page)?;
        }
        write!(f, "]")
    }
}
