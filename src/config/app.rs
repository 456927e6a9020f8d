// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    /// Emit a warning each time a key is derived from a password
    #[serde(default = "default_true")]
    pub warn_weak_password_keys: bool,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once; falls back to built-in defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let path = config_path();
        if !path.exists() {
            return Config::default();
        }

        match Config::from_path(&path) {
            Ok(conf) => conf,
            Err(err) => {
                // No subscriber exists yet when this runs from logging::init
                eprintln!(
                    "Warning: ignoring {}: {err}; using built-in defaults",
                    path.display()
                );
                Config::default()
            }
        }
    })
}
