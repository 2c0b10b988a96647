//! Configuration management for dealerdesk
//!
//! Config stored at: ~/.config/dealerdesk/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use dealerdesk_types::{ConfigError, OutputFormat, Result};

/// Application preferences (the legacy Settings tab)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display currency code (formatting is always dollar-style)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Directory exports and backups are written to; defaults to the
    /// working directory like the legacy app
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Default output format for the CLI (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_theme() -> String {
    "Dark".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            currency: default_currency(),
            export_dir: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("dealerdesk");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory exports are written to
    pub fn export_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.export_dir {
            return Ok(dir.clone());
        }
        Ok(std::env::current_dir()?)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
