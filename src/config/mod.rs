//! Configuration management for glyphpick.
//!
//! Handles:
//! - Catalog path override
//! - TUI theme selection
//! - Search debounce tuning

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GlyphError, Result};
use crate::util::atomic_write;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// TUI theme.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Interactive behavior tuning.
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults if no file exists.
    pub fn load() -> Result<Self> {
        let config_path = default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GlyphError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| GlyphError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Save configuration to the default location, atomically.
    pub fn save(&self) -> Result<()> {
        self.save_to(&default_config_path()?)
    }

    /// Save configuration to a specific path, atomically.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| GlyphError::InvalidConfig {
            message: format!("Failed to serialize config: {e}"),
        })?;

        atomic_write(path, content.as_bytes())
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a user catalog JSON file. `None` uses the embedded catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name (dark, light, high-contrast).
    #[serde(default = "default_theme")]
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme(),
        }
    }
}

/// Interactive behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Search debounce delay in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Close the TUI automatically shortly after a successful copy.
    #[serde(default = "default_true")]
    pub auto_close: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            auto_close: true,
        }
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_debounce_ms() -> u64 {
    100
}

/// Get the default configuration path.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| GlyphError::InvalidConfig {
        message: "Could not determine platform config directory".to_string(),
    })?;

    Ok(config_dir.join("glyphpick").join("config.toml"))
}
