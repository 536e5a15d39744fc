//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins, then `output.format` from config, then the terminal.
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        if self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One `<label> <path>` row of a plan or report, label padded to align.
    pub fn row(&self, label: &str, path: &str, detail: Option<&str>) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let padded = format!("{label:<9}");
        let label = if self.no_color {
            padded
        } else {
            match label {
                "create" | "created" => padded.green().to_string(),
                "patch" | "patched" => padded.cyan().to_string(),
                "failed" => padded.red().bold().to_string(),
                _ => padded.dimmed().to_string(),
            }
        };
        let line = match detail {
            Some(detail) => format!("  {label} {path}  ({detail})"),
            None => format!("  {label} {path}"),
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout.  Written even in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// `true` if stdout carries a single JSON document.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn silent(&self) -> bool {
        self.quiet || self.is_json()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn args(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        OutputManager::new(&args(OutputFormat::Human, quiet, no_color), &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.is_quiet());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn plain_format_never_colours() {
        let out = OutputManager::new(&args(OutputFormat::Plain, false, false), &AppConfig::default());
        assert_eq!(out.format(), OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false, false), &config);
        assert!(out.is_json());

        let out = OutputManager::new(&args(OutputFormat::Plain, false, false), &config);
        assert!(!out.is_json());
    }
}
