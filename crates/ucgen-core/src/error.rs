//! Unified error handling for ucgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ucgen core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UcgenError {
    /// Errors from the domain layer (invalid input).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, races).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl UcgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run `ucgen config path` to see which files are read".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in ucgen".into(),
                "Please report this issue at: https://github.com/cosecruz/ucgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Recoverable => ErrorCategory::Recoverable,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Recoverable,
    Io,
    Conflict,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type UcgenResult<T> = Result<T, UcgenError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: UcgenError = DomainError::InvalidHttpMethod {
            value: "PURGE".into(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid HTTP method 'PURGE'");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn races_are_conflicts() {
        let err: UcgenError = ApplicationError::ConcurrentModification {
            path: PathBuf::from("src/a.ts"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(!err.suggestions().is_empty());
    }
}
