use thiserror::Error;

use crate::domain::ErrorCategory;

/// Problems found while reading a registry file.
///
/// None of these are fatal: a missing group is created on insert, and
/// malformed regions are kept verbatim as opaque text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    #[error("registry group '{group}' not found")]
    MissingGroup { group: String },

    #[error("registry group '{group}' opened on line {line} is never closed")]
    UnterminatedGroup { group: String, line: usize },

    #[error("registry group '{group}' on line {line} duplicates an earlier region")]
    DuplicateGroup { group: String, line: usize },
}

impl RegistryIssue {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingGroup { group } => vec![format!(
                "The '{group}' region will be created on the next generate"
            )],
            Self::UnterminatedGroup { group, .. } => vec![
                format!("Add a matching '// @ucgen-end {group}' line"),
                "Until then the region is treated as plain text".into(),
            ],
            Self::DuplicateGroup { .. } => {
                vec!["Merge the two regions; only the first one is patched".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Recoverable
    }
}
