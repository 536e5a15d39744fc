//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`GenerationOptions`] derived from it.
//!
//! # Resolution order (lowest priority first)
//!
//! 1. Built-in defaults
//! 2. User config file (`config.toml` in the platform config directory)
//! 3. `.ucgen.toml` in the project root (`--root`, else the current directory)
//! 4. `--config FILE` (must exist)
//! 5. Environment variables `UCGEN_<SECTION>__<KEY>`, e.g.
//!    `UCGEN_GENERATE__API_PREFIX=/api/v2`
//!
//! CLI flags override all of the above at the call-site.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use ucgen_core::domain::{DEFAULT_API_PREFIX, DEFAULT_EXTENSION, GenerationOptions};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".ucgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `ucgen generate`.
    pub generate: GenerateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub api_prefix: String,
    pub extension: String,
    pub entity: bool,
    pub support_files: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.into(),
            extension: DEFAULT_EXTENSION.into(),
            entity: false,
            support_files: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// other files it is required to exist.
    pub fn load(config_file: Option<&PathBuf>, project_root: &Path) -> anyhow::Result<Self> {
        Self::load_from(
            Self::config_path().as_deref(),
            &Self::local_path(project_root),
            config_file.map(PathBuf::as_path),
        )
    }

    /// Per-project config file of the project at `root`.
    pub fn local_path(root: &Path) -> PathBuf {
        root.join(LOCAL_CONFIG_FILE)
    }

    fn load_from(user: Option<&Path>, local: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("generate.api_prefix", defaults.generate.api_prefix)?
            .set_default("generate.extension", defaults.generate.extension)?
            .set_default("generate.entity", defaults.generate.entity)?
            .set_default("generate.support_files", defaults.generate.support_files)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?;

        if let Some(user) = user {
            builder = builder.add_source(File::from(user).format(FileFormat::Toml).required(false));
        }
        builder = builder.add_source(File::from(local).format(FileFormat::Toml).required(false));
        if let Some(explicit) = explicit {
            builder = builder.add_source(File::from(explicit).format(FileFormat::Toml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("UCGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Generation options derived from the `[generate]` section.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            with_entity: self.generate.entity,
            with_support_files: self.generate.support_files,
            api_prefix: self.generate.api_prefix.clone(),
            extension: self.generate.extension.clone(),
        }
    }

    /// Dotted-key lookup used by `ucgen config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "generate.api_prefix" => self.generate.api_prefix.clone(),
            "generate.extension" => self.generate.extension.clone(),
            "generate.entity" => self.generate.entity.to_string(),
            "generate.support_files" => self.generate.support_files.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`AppConfig::get`].
    pub const KEYS: [&'static str; 6] = [
        "generate.api_prefix",
        "generate.extension",
        "generate.entity",
        "generate.support_files",
        "output.no_color",
        "output.format",
    ];

    /// Path to the user configuration file.
    ///
    /// `None` when the platform has no home directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ucgen", "ucgen")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_match_core_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generate.api_prefix, "/api/v1");
        assert_eq!(cfg.generate.extension, "ts");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.generation_options(), GenerationOptions::default());
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(None, &dir.path().join("none.toml"), None).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let local = dir.path().join("local.toml");
        fs::write(&user, "[generate]\napi_prefix = \"/user\"\nentity = true\n").unwrap();
        fs::write(&local, "[generate]\napi_prefix = \"/local\"\n").unwrap();

        let cfg = AppConfig::load_from(Some(&user), &local, None).unwrap();
        assert_eq!(cfg.generate.api_prefix, "/local");
        assert!(cfg.generate.entity);
        assert_eq!(cfg.generate.extension, "ts");
    }

    #[test]
    fn local_file_lives_in_the_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let local = AppConfig::local_path(dir.path());
        assert_eq!(local, dir.path().join(".ucgen.toml"));
        fs::write(&local, "[generate]\nextension = \"js\"\n").unwrap();

        let cfg = AppConfig::load_from(None, &AppConfig::local_path(dir.path()), None).unwrap();
        assert_eq!(cfg.generate.extension, "js");
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(
            None,
            &dir.path().join("none.toml"),
            Some(&dir.path().join("missing.toml")),
        );
        assert!(result.is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("generate.api_prefix").as_deref(), Some("/api/v1"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[generate]"));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }
}
