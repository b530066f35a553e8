//! Configuration management for TodoMatic
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_NAME, CONFIG_GENERATED, DEFAULT_TITLE, LOCAL_CONFIG_FILE, TITLE_MAX_LEN, XDG_CONFIG_FILE};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub tasks: TasksConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title shown above the creation form
    pub title: String,
    /// Icon set used for task status markers
    pub icon_theme: IconTheme,
}

/// Initial task list configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TasksConfig {
    /// JSON file with the tasks to start with (built-in sample tasks when unset).
    /// A relative path is resolved against the directory of the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log entries to a file
    pub enabled: bool,
    /// Minimum level written to the log file ("error" .. "trace")
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level)
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;

        // Relative paths inside the file are relative to the file itself
        if let (Some(initial_file), Some(config_dir)) = (config.tasks.initial_file.as_mut(), path.as_ref().parent()) {
            if initial_file.is_relative() {
                *initial_file = config_dir.join(&*initial_file);
            }
        }

        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.title.trim().is_empty() {
            anyhow::bail!("ui.title cannot be empty");
        }

        if self.ui.title.chars().count() > TITLE_MAX_LEN {
            anyhow::bail!(
                "ui.title must be at most {} characters, got {}",
                TITLE_MAX_LEN,
                self.ui.title.chars().count()
            );
        }

        if let Some(path) = &self.tasks.initial_file {
            if path.as_os_str().is_empty() {
                anyhow::bail!("tasks.initial_file cannot be an empty path");
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# TodoMatic Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(XDG_CONFIG_FILE))
    }
}
