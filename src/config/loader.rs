//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `.userdir.toml` in the working directory, or an explicit `--config` file
//! 4. `~/.config/userdir/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
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

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub log: LogConfig,
}

/// Directory API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL; resources live at `{base_url}/users`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            user_agent: constants::USER_AGENT.to_string(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, e.g. `warn` or `userdir=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory file and must exist.
    pub fn load(
        workdir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit file, else working-directory file
        match explicit {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                if let Some(dir) = workdir {
                    let local_path = dir.join(constants::CONFIG_FILENAME);
                    if local_path.exists() {
                        config.merge(Self::load_file(&local_path)?);
                    }
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        // A zero timeout would fail every request; fall back to the lower layer.
        if config.api.timeout_secs == 0 {
            eprintln!(
                "Warning: ignoring invalid api.timeout_secs value in {}: 0",
                path.display()
            );
            config.api.timeout_secs = ApiConfig::default().timeout_secs;
        }
        Ok(config)
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; only non-default values in
    /// `other` win.
    fn merge(&mut self, other: Config) {
        let default_api = ApiConfig::default();
        if other.api.base_url != default_api.base_url {
            self.api.base_url = other.api.base_url;
        }
        if other.api.timeout_secs != default_api.timeout_secs {
            self.api.timeout_secs = other.api.timeout_secs;
        }
        if other.api.user_agent != default_api.user_agent {
            self.api.user_agent = other.api.user_agent;
        }

        if other.log.level != LogConfig::default().level {
            self.log.level = other.log.level;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Some(val) = env.non_empty(constants::ENV_TIMEOUT_SECS) {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    constants::ENV_TIMEOUT_SECS
                ),
            }
        }
        if let Some(val) = env.non_empty(constants::ENV_LOG) {
            self.log.level = val;
        }
    }
}
