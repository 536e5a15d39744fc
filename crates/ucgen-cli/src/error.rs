//! Error handling for the ucgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! Every error exits with status 1; see [`CliError::exit_code`].

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use ucgen_core::error::UcgenError;

// Re-export so callers only need `use crate::error::*`.
pub use ucgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A positional argument was omitted and no prompt could ask for it.
    #[error("Missing argument: {name}")]
    MissingArgument { name: &'static str },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `ucgen-core`.
    #[error("{0}")]
    Core(#[from] UcgenError),

    /// Some planned actions failed; the others were applied.
    #[error("{failed} of {total} actions failed")]
    GenerationIncomplete { failed: usize, total: usize },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The interactive prompt could not be shown or read.
    #[error("Prompt failed: {message}")]
    Prompt {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialising machine-readable output failed.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ucgen_core::domain::DomainError> for CliError {
    fn from(err: ucgen_core::domain::DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { name } => vec![
                format!("Pass {name} as a positional argument"),
                "Example: ucgen generate products get-product products GET".into(),
                "Run in a terminal to be prompted for missing names".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Run `ucgen config path` to see which files are read".into(),
                "Use `ucgen init` to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::GenerationIncomplete { .. } => vec![
                "Files that were written are kept".into(),
                "Fix the reported problems and run the same command again".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],

            Self::Prompt { .. } => vec![
                "Pass every name on the command line instead".into(),
                "Use --yes to skip the confirmation".into(),
            ],

            Self::Render(_) => vec!["Try --output-format human".into()],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Recoverable | CoreCategory::Io | CoreCategory::Conflict => {
                    ErrorCategory::Filesystem
                }
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::GenerationIncomplete { .. } | Self::IoError { .. } => ErrorCategory::Filesystem,
            Self::Prompt { .. } => ErrorCategory::UserError,
            Self::Render(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure maps to 1; the category only drives styling and log level.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Filesystem => tracing::error!("Filesystem error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Reading or writing project files failed.
    Filesystem,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use ucgen_core::application::ApplicationError;
    use ucgen_core::domain::DomainError;

    use super::*;

    fn invalid_method() -> CliError {
        DomainError::InvalidHttpMethod {
            value: "PURGE".into(),
        }
        .into()
    }

    #[test]
    fn every_error_exits_with_one() {
        let errors = [
            invalid_method(),
            CliError::MissingArgument { name: "DOMAIN" },
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::GenerationIncomplete { failed: 1, total: 6 },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn core_validation_is_a_user_error() {
        assert_eq!(invalid_method().category(), ErrorCategory::UserError);
        assert!(invalid_method().to_string().contains("PURGE"));
    }

    #[test]
    fn races_are_filesystem_errors() {
        let err = CliError::Core(
            ApplicationError::ConcurrentModification {
                path: PathBuf::from("src/a.ts"),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }

    #[test]
    fn missing_argument_shows_an_example() {
        let err = CliError::MissingArgument { name: "USECASE" };
        assert!(err.suggestions().iter().any(|s| s.contains("ucgen generate")));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = CliError::GenerationIncomplete { failed: 1, total: 6 }.format_plain(false);
        assert!(s.contains("Error: 1 of 6 actions failed"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("unexpected token"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: unexpected token"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
