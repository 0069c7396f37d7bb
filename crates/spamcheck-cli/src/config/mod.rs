//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Blackhole zone to query instead of the built-in default.
    pub zone: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Disable colored output.
    #[serde(default)]
    pub no_color: bool,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("rs", "spamcheck", "spamcheck")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.zone.is_none());
        assert!(config.output_format.is_none());
        assert!(!config.no_color);
    }

    #[test]
    fn config_toml_round_trip() {
        let config = Config {
            zone: Some("bl.example.net".to_string()),
            output_format: Some(OutputFormat::Json),
            no_color: true,
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.zone.as_deref(), Some("bl.example.net"));
        assert_eq!(parsed.output_format, Some(OutputFormat::Json));
        assert!(parsed.no_color);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("zone = \"bl.example.net\"").unwrap();
        assert_eq!(parsed.zone.as_deref(), Some("bl.example.net"));
        assert!(parsed.output_format.is_none());
        assert!(!parsed.no_color);
    }
}
