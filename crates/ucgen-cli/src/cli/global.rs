//! Flags shared by every `ucgen` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more to stderr: `-v` written files, `-vv` planning and registry
    /// details, `-vvv` everything.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain text without ANSI colours. Set by `NO_COLOR`.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Extra TOML config, read after the user and project files. Must exist.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of plans, reports and listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else `human` on a terminal and `plain`
    /// otherwise.
    #[default]
    Auto,
    /// Coloured text.
    Human,
    /// Text without colours.
    Plain,
    /// One JSON document.
    Json,
}
