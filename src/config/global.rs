//! Global configuration for envexpand.
//!
//! The configuration file holds defaults for the command line: output
//! format, key sorting, whether to seed from the process environment, and
//! strict reporting of unresolved references. Command line flags always win.
//!
//! # Location
//!
//! - Unix/macOS: `~/.envexpand/config.toml`
//! - Windows: `%LOCALAPPDATA%\envexpand\config.toml`
//! - Override: `ENVEXPAND_CONFIG` environment variable or `--config`
//!
//! # Example
//!
//! ```toml
//! format = "json"
//! sort_keys = true
//! include_process_env = false
//! strict = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::EnvExpandError;
use crate::env::{OutputFormat, path_exists};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "ENVEXPAND_CONFIG";

const fn default_sort_keys() -> bool {
    true
}

/// Defaults applied to every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Sort keys in line-based output.
    #[serde(default = "default_sort_keys")]
    pub sort_keys: bool,

    /// Seed the variable set with the process environment.
    #[serde(default)]
    pub include_process_env: bool,

    /// Warn about references left unresolved after expansion.
    #[serde(default)]
    pub strict: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            sort_keys: default_sort_keys(),
            include_process_env: false,
            strict: false,
        }
    }
}

impl GlobalConfig {
    /// Load configuration, honoring an explicit path first, then
    /// `ENVEXPAND_CONFIG`, then the default location.
    ///
    /// An explicitly named file must exist; a missing default file yields
    /// the defaults.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let explicit =
            path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from));

        if let Some(path) = explicit {
            if !path_exists(&path).await? {
                return Err(EnvExpandError::ConfigError {
                    message: format!("configuration file {} does not exist", path.display()),
                }
                .into());
            }
            return Self::load_from(&path).await;
        }

        let Ok(path) = Self::default_path() else {
            return Ok(Self::default());
        };

        if path_exists(&path).await? {
            Self::load_from(&path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .map_err(EnvExpandError::from)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Default configuration file path for the platform.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("envexpand")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".envexpand")
        };

        Ok(config_dir.join("config.toml"))
    }
}
