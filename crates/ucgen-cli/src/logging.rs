//! Diagnostics on stderr through `tracing`.
//!
//! Log lines never share stdout with the plan, the report or JSON output.
//! `-v` raises the level one step at a time from `warn`, `-q` drops it to
//! `error`, and a set `RUST_LOG` replaces both.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events reach the terminal; dependencies stay silent.
const WORKSPACE_TARGETS: [&str; 4] = ["ucgen", "ucgen_cli", "ucgen_core", "ucgen_adapters"];

/// Install the process-wide subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn filter_directives(level: &str) -> String {
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> &'static str {
    const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];
    if args.quiet {
        "error"
    } else {
        LEVELS[usize::from(args.verbose).min(LEVELS.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn each_v_raises_the_level() {
        let cases = [(0, "warn"), (1, "info"), (2, "debug"), (3, "trace"), (9, "trace")];
        for (verbose, expected) in cases {
            assert_eq!(level_for(&flags(verbose, false)), expected, "-v x{verbose}");
        }
    }

    #[test]
    fn quiet_means_errors_only() {
        assert_eq!(level_for(&flags(0, true)), "error");
        assert_eq!(level_for(&flags(2, true)), "error");
    }

    #[test]
    fn directives_name_every_workspace_crate() {
        let directives = filter_directives("debug");
        assert_eq!(
            directives,
            "ucgen=debug,ucgen_cli=debug,ucgen_core=debug,ucgen_adapters=debug"
        );
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
