//! Configuration file handling for the CLI.
//!
//! Persists display preferences in `$XDG_CONFIG_HOME/qrfoundry/config.toml`
//! following the XDG Base Directory Specification. The only durable
//! preference is the color theme, the CLI counterpart of the original
//! surface's saved `"dark"`/`"light"` choice.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Color theme for rendered terminal output.
///
/// Dark terminals need inverted module colors for a symbol to keep its
/// dark-on-light contrast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// CLI configuration stored on disk.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Display preferences.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Display preferences.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Saved theme preference; `None` falls back to the light default.
    pub theme: Option<Theme>,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/qrfoundry/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "qrfoundry", "qrfoundry")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir is creatable");
        let config = Config::load_from(&dir.path().join("config.toml")).expect("defaults load");
        assert_eq!(config.ui.theme, None);
    }

    #[test]
    fn test_theme_round_trips_through_toml() {
        let dir = tempfile::tempdir().expect("temp dir is creatable");
        let path = dir.path().join("config.toml");

        let config = Config {
            ui: UiConfig {
                theme: Some(Theme::Dark),
            },
        };
        config.save_to(&path).expect("config saves");

        let loaded = Config::load_from(&path).expect("config loads");
        assert_eq!(loaded.ui.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_theme_serializes_as_lowercase_string() {
        let config = Config {
            ui: UiConfig {
                theme: Some(Theme::Light),
            },
        };
        let rendered = toml::to_string_pretty(&config).expect("config serializes");
        assert!(rendered.contains("theme = \"light\""));
    }
}
