//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`FOXX_OUTPUT__NO_COLOR=true`)
//! 3. Config file (`--config FILE`, or `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ENV_PREFIX: &str = "FOXX";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default answers for `foxx init`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Asset corpus settings.
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub version: String,
    pub engine_version: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    /// SPDX identifier.
    pub license: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `templates/` and `licenses/` overrides.
    pub dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                version: "0.0.0".into(),
                engine_version: "^3.0.0".into(),
                author_name: None,
                author_email: None,
                license: None,
            },
            output: OutputConfig { no_color: false },
            assets: AssetsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration on top of the built-in defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Invalid built-in defaults")?,
            )
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.foxx.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "arangodb", "foxx")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".foxx.toml"))
    }

    /// The file `foxx config` reads and writes.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Look up a dotted key (`defaults.license`). Unset optional values are
    /// returned as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.version" => self.defaults.version.clone(),
            "defaults.engine_version" => self.defaults.engine_version.clone(),
            "defaults.author_name" => self.defaults.author_name.clone().unwrap_or_default(),
            "defaults.author_email" => self.defaults.author_email.clone().unwrap_or_default(),
            "defaults.license" => self.defaults.license.clone().unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "assets.dir" => self
                .assets
                .dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key understood by [`Self::get`].
    pub const KEYS: [&'static str; 7] = [
        "defaults.version",
        "defaults.engine_version",
        "defaults.author_name",
        "defaults.author_email",
        "defaults.license",
        "output.no_color",
        "assets.dir",
    ];
}
