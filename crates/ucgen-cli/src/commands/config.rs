//! `ucgen config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.header("Current Configuration:")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            if let Some(user) = AppConfig::config_path() {
                output.print(&user.display().to_string())?;
            }
            output.print(LOCAL_CONFIG_FILE)?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known keys: {})",
            AppConfig::KEYS.join(", ")
        ),
        source: None,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "generate.extension").unwrap(), "ts");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert!(err.to_string().contains("generate.api_prefix"));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
