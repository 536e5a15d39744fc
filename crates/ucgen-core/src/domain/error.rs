// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::HttpMethod;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported per action, kept in reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {field} '{value}': {reason}")]
    InvalidIdentifier {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("invalid HTTP method '{value}'")]
    InvalidHttpMethod { value: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("invalid {option} '{value}': {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("more than one planned action targets {path}")]
    ConflictingPaths { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { field, .. } => vec![
                format!("The {field} must be kebab-case: lowercase letters and digits separated by single '-'"),
                "It must start with a letter".into(),
                "Examples: products, get-product, list-order-items".into(),
            ],
            Self::InvalidHttpMethod { .. } => vec![
                format!(
                    "Supported methods: {}",
                    HttpMethod::ALL
                        .iter()
                        .map(HttpMethod::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                "Methods are case-insensitive; GET is used when omitted".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{field}'"),
                "Run with --help for usage".into(),
            ],
            Self::InvalidOption { option, .. } => vec![
                format!("Check '{option}' in your config file, environment and flags"),
                "Examples: api_prefix = \"/api/v1\", extension = \"ts\"".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Generated paths are always relative to the project root".into()]
            }
            Self::ConflictingPaths { .. } => vec!["This is a bug in ucgen, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. }
            | Self::InvalidHttpMethod { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidOption { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } | Self::ConflictingPaths { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    /// Noted and worked around; never aborts a run.
    Recoverable,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_method_suggestions_list_every_verb() {
        let err = DomainError::InvalidHttpMethod {
            value: "PURGE".into(),
        };
        let joined = err.suggestions().join("\n");
        for verb in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
            assert!(joined.contains(verb), "missing {verb}");
        }
    }

    #[test]
    fn validation_errors_are_categorised() {
        let err = DomainError::MissingRequiredField { field: "domain" };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
