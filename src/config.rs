use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::theme::PalettePreset;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub themes: ThemesConfig,
}

/// Launcher appearance settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// UI color palette
    #[serde(default)]
    pub palette: PalettePreset,
}

/// Theme discovery and addressing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemesConfig {
    /// Override for the themes root directory
    #[serde(default)]
    pub directory: Option<String>,
    /// Separator used to join the themes root and a theme name.
    /// Unset means the platform separator.
    #[serde(default)]
    pub separator: Option<String>,
}

impl ThemesConfig {
    /// Effective separator for building theme addresses
    pub fn effective_separator(&self) -> String {
        self.separator
            .clone()
            .unwrap_or_else(|| std::path::MAIN_SEPARATOR.to_string())
    }

    /// Themes root override as a path, if configured
    pub fn root_override(&self) -> Option<PathBuf> {
        self.directory.as_ref().map(PathBuf::from)
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "cursorweave", "CursorWeave")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.themes.directory.is_none());
        assert_eq!(
            config.themes.effective_separator(),
            std::path::MAIN_SEPARATOR.to_string()
        );
    }

    #[test]
    fn test_separator_override_round_trips() {
        let config: Config = toml::from_str("[themes]\nseparator = \"\\\\\"\n").unwrap();
        assert_eq!(config.themes.effective_separator(), "\\");

        let serialized = toml::to_string_pretty(&config).unwrap();
        let reparsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.themes.effective_separator(), "\\");
    }
}
