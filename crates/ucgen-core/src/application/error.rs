//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while applying a plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A path that was absent when the plan was made exists at write time.
    #[error("{path} appeared after planning; refusing to overwrite it")]
    ConcurrentModification { path: PathBuf },

    /// A file lacks the structure needed to add something to it.
    #[error("{path} has no place to add {target}")]
    NoInsertionPoint { path: PathBuf, target: String },

    /// Shared adapter state was poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ConcurrentModification { path } => vec![
                format!("Another process created {}", path.display()),
                "Run the command again; existing files are skipped".into(),
            ],
            Self::NoInsertionPoint { target, .. } => vec![
                format!("Add {target} by hand, then run the command again"),
                "The file was left unchanged".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::ConcurrentModification { .. } | Self::NoInsertionPoint { .. } => {
                ErrorCategory::Conflict
            }
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }

    /// Build a [`ApplicationError::FilesystemError`] from an I/O error.
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
