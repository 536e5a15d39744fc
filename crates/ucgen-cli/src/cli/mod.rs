//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ucgen",
    bin_name = "ucgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Use-case scaffolding for clean-architecture TypeScript projects",
    long_about = "ucgen generates the interface, implementation, API client and \
                  action of a use case, then registers it in the project's DI \
                  symbols and container files. Running it twice changes nothing.",
    after_help = "EXAMPLES:\n\
        \x20 ucgen generate products get-product products GET\n\
        \x20 ucgen g orders create-order orders post --entity --yes\n\
        \x20 ucgen list --root ./web\n\
        \x20 ucgen completions bash > /usr/share/bash-completion/completions/ucgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Project the command works on: `--root` when given, else the current
    /// directory.
    pub fn project_root(&self) -> PathBuf {
        let root = match &self.command {
            Commands::Generate(args) => args.root.as_ref(),
            Commands::List(args) => args.root.as_ref(),
            _ => None,
        };
        root.cloned().unwrap_or_else(|| PathBuf::from("."))
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a use case and register it.
    #[command(
        visible_alias = "g",
        about = "Generate a use case",
        after_help = "EXAMPLES:\n\
            \x20 ucgen generate products get-product products\n\
            \x20 ucgen generate products delete-product products DELETE --dry-run\n\
            \x20 ucgen generate            # prompts for the missing names"
    )]
    Generate(GenerateArgs),

    /// Show what the DI registries currently contain.
    #[command(
        visible_alias = "ls",
        about = "List registered symbols and bindings",
        after_help = "EXAMPLES:\n\
            \x20 ucgen list\n\
            \x20 ucgen list --format json"
    )]
    List(ListArgs),

    /// Initialise a ucgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ucgen init           # user config location\n\
            \x20 ucgen init --local   # .ucgen.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ucgen completions bash > ~/.local/share/bash-completion/completions/ucgen\n\
            \x20 ucgen completions zsh  > ~/.zfunc/_ucgen\n\
            \x20 ucgen completions fish > ~/.config/fish/completions/ucgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the ucgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ucgen config get generate.api_prefix\n\
            \x20 ucgen config list\n\
            \x20 ucgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `ucgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Domain the use case belongs to, e.g. `products`.
    #[arg(value_name = "DOMAIN", help = "Domain name (kebab-case)")]
    pub domain: Option<String>,

    /// Use case name, e.g. `get-product`.
    #[arg(value_name = "USECASE", help = "Use case name (kebab-case)")]
    pub use_case: Option<String>,

    /// API the generated client belongs to, e.g. `products`.
    #[arg(value_name = "API", help = "API name (kebab-case)")]
    pub api: Option<String>,

    /// HTTP method of the client call.  Case-insensitive.
    #[arg(
        value_name = "METHOD",
        help = "HTTP method: GET, POST, PUT, PATCH or DELETE [default: GET]"
    )]
    pub method: Option<String>,

    /// Also generate the domain entity.
    #[arg(long = "entity", help = "Also generate the domain entity")]
    pub entity: bool,

    /// Also generate the shared use-case interface and API client helper.
    #[arg(
        long = "support-files",
        help = "Also generate the shared base interface and API client helper"
    )]
    pub support_files: bool,

    /// Project root every path is resolved against.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Prefix of the generated endpoint.
    #[arg(
        long = "api-prefix",
        value_name = "PREFIX",
        help = "Endpoint prefix (default from config, /api/v1)"
    )]
    pub api_prefix: Option<String>,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `ucgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Project root holding `src/di`.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped, human-readable.
    Table,
    /// One `registry group key` triple per line.
    List,
    /// JSON object keyed by registry.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ucgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.ucgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ucgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ucgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.api_prefix`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the configuration files that are read, in order.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn generate_takes_four_positionals() {
        let cli = Cli::try_parse_from([
            "ucgen",
            "generate",
            "products",
            "get-product",
            "products",
            "delete",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.domain.as_deref(), Some("products"));
        assert_eq!(args.use_case.as_deref(), Some("get-product"));
        assert_eq!(args.api.as_deref(), Some("products"));
        assert_eq!(args.method.as_deref(), Some("delete"));
        assert!(!args.dry_run);
    }

    #[test]
    fn generate_positionals_are_optional() {
        let cli = Cli::try_parse_from(["ucgen", "g", "--yes"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.domain.is_none());
        assert!(args.yes);
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["ucgen", "list", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn project_root_follows_the_root_flag() {
        let cli = Cli::try_parse_from(["ucgen", "g", "--root", "../web"]).unwrap();
        assert_eq!(cli.project_root(), PathBuf::from("../web"));

        let cli = Cli::try_parse_from(["ucgen", "config", "path"]).unwrap();
        assert_eq!(cli.project_root(), PathBuf::from("."));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["ucgen", "list", "-q", "-v"]).is_err());
    }

    #[test]
    fn list_format_defaults_to_table() {
        let cli = Cli::try_parse_from(["ucgen", "ls"]).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.format, ListFormat::Table);
    }
}
