//! Configuration management for the application.
//!
//! Handles loading, validating, and saving application configuration in
//! TOML format with platform-specific directory resolution.

use crate::completion::CompletionSettings;
use crate::constants::APP_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Completion backend configuration.
///
/// The API key itself is never stored in the file; only the name of the
/// environment variable to read it from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Base URL of the completion API.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        let settings = CompletionSettings::default();
        Self {
            model: settings.model,
            base_url: settings.base_url,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: settings.timeout_secs,
        }
    }
}

impl CompletionConfig {
    /// Builds the completion settings for this configuration.
    #[must_use]
    pub fn settings(&self) -> CompletionSettings {
        CompletionSettings {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..CompletionSettings::default()
        }
    }
}

/// Output configuration for generated app files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where generated apps are written.
    pub output_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let output_dir = Config::config_dir()
            .map(|dir| dir.join("apps"))
            .unwrap_or_else(|_| PathBuf::from(".apps"));
        Self { output_dir }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/AppForge/config.toml`
/// - macOS: `~/Library/Application Support/AppForge/config.toml`
/// - Windows: `%APPDATA%\AppForge\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Completion backend settings.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the model name, base URL, key variable name or
    /// timeout is empty or zero.
    pub fn validate(&self) -> Result<()> {
        if self.completion.model.trim().is_empty() {
            anyhow::bail!("completion.model must not be empty");
        }
        if self.completion.base_url.trim().is_empty() {
            anyhow::bail!("completion.base_url must not be empty");
        }
        if self.completion.api_key_env.trim().is_empty() {
            anyhow::bail!("completion.api_key_env must not be empty");
        }
        if self.completion.timeout_secs == 0 {
            anyhow::bail!("completion.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
