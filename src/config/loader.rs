//! Settings struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.cfgcheck.toml` in the working directory
//! 4. `~/.config/cfgcheck/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub check: CheckConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check: CheckConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Validation behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Expected-value token marking a key that must not be present.
    pub sentinel: String,
    /// Exit non-zero when any mismatch is found.
    pub fail: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            sentinel: constants::DEFAULT_SENTINEL.to_string(),
            fail: true,
        }
    }
}

/// Output behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given.
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: None }
    }
}

impl Config {
    /// Load settings with proper layering.
    ///
    /// Reads from global config, working-directory config, then applies
    /// environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: working-directory config
        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load settings from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        let default_check = CheckConfig::default();
        if other.check.sentinel != default_check.sentinel {
            self.check.sentinel = other.check.sentinel;
        }
        // fail=false overrides fail=true
        if !other.check.fail {
            self.check.fail = false;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_SENTINEL) {
            self.check.sentinel = val;
        }
        if let Ok(val) = env.var(constants::ENV_FORMAT) {
            self.output.format = Some(val);
        }
        if let Ok(val) = env.var(constants::ENV_FAIL) {
            match val.to_lowercase().as_str() {
                "false" | "0" | "no" | "off" => self.check.fail = false,
                "true" | "1" | "yes" | "on" => self.check.fail = true,
                _ => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    constants::ENV_FAIL
                ),
            }
        }
    }
}
