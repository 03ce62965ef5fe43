//! Error types for the folio search service
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Query validation ("too short to search") is deliberately NOT an error:
//! it is a defined empty-result outcome handled by the orchestrator.

use crate::content::ContentKind;
use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the folio search service
#[derive(Debug, Error)]
pub enum Error {
    /// A content repository was unreachable or failed while fetching candidates.
    /// Fails the whole search request; the client sees a generic 500.
    #[error("{kind} repository error: {message}")]
    Repository {
        /// Which repository failed
        kind: ContentKind,
        /// Underlying error message, for server-side logs only
        message: String,
    },

    /// Invalid operation or state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl Error {
    /// Create a repository error for the given content kind
    pub fn repository(kind: ContentKind, message: impl Into<String>) -> Self {
        Error::Repository {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_names_the_kind() {
        let err = Error::repository(ContentKind::CaseStudy, "connection refused");
        let msg = err.to_string();
        assert!(msg.contains("case-study"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_invalid_operation_display() {
        let err = Error::InvalidOperation("wrong record kind for store".to_string());
        assert!(err.to_string().contains("Invalid operation"));
        assert!(err.to_string().contains("wrong record kind"));
    }
}
