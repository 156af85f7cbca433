//! Configuration module for Ferrypay
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FERRYPAY_*)
//! 3. Project config (./ferrypay.toml)
//! 4. User config (~/.config/ferrypay/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FerrypayError, FerrypayResult};

/// Name of the persisted ledger file when no path is configured
const DEFAULT_LEDGER_FILE: &str = "ferrypay_data_v1.json";

/// Ledger storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LedgerConfig {
    /// Path to the JSON snapshot; relative paths resolve against the
    /// working directory, `~/` against the home directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Emit JSON events instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FerrypayResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| FerrypayError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default() -> Self {
        let project_config = PathBuf::from("ferrypay.toml");
        if project_config.exists() {
            if let Ok(config) = Self::load(&project_config) {
                return config.with_env_overrides();
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ferrypay/config.toml");
            if user_config.exists() {
                if let Ok(config) = Self::load(&user_config) {
                    return config.with_env_overrides();
                }
            }
        }

        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (FERRYPAY_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("FERRYPAY_LEDGER") {
            if !path.trim().is_empty() {
                self.ledger.path = Some(PathBuf::from(path));
            }
        }

        if let Ok(val) = std::env::var("FERRYPAY_JSON") {
            self.output.json = val.to_lowercase() != "false" && val != "0";
        }

        self
    }

    /// Resolve the ledger snapshot path. A configured path wins (with
    /// `~/` expansion); otherwise the file lives under the platform data
    /// directory, falling back to the working directory.
    pub fn ledger_path(&self) -> PathBuf {
        match &self.ledger.path {
            Some(path) => expand_home(path),
            None => dirs::data_dir()
                .map(|d| d.join("ferrypay").join(DEFAULT_LEDGER_FILE))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE)),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
