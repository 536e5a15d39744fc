//! `ucgen init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration to the user or project location.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(args.local)?;

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = render_default()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(local: bool) -> CliResult<PathBuf> {
    if local {
        return Ok(PathBuf::from(LOCAL_CONFIG_FILE));
    }
    AppConfig::config_path().ok_or_else(|| CliError::ConfigError {
        message: "no user configuration directory on this platform; use --local".into(),
        source: None,
    })
}

/// Default configuration as TOML.
fn render_default() -> CliResult<String> {
    toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_target_is_in_working_directory() {
        assert_eq!(target_path(true).unwrap(), PathBuf::from(".ucgen.toml"));
    }

    #[test]
    fn default_config_lists_every_section() {
        let toml = render_default().unwrap();
        assert!(toml.contains("[generate]"));
        assert!(toml.contains("api_prefix = \"/api/v1\""));
        assert!(toml.contains("[output]"));
    }
}
