//! Configuration management for the application.
//!
//! Loads and saves the picker presets and UI preferences in TOML format
//! with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::CONFIG_DIR_NAME;
use crate::engine::ChoiceList;
use crate::models::{Configuration, DigitGrouping, TimePrecision};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show the key help line under the pickers
    #[serde(default = "default_show_help")]
    pub show_help: bool,
}

const fn default_show_help() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_help: default_show_help(),
        }
    }
}

/// A named picker setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Name used by `--preset`
    pub name: String,
    /// Wheel layout
    #[serde(flatten)]
    pub configuration: Configuration,
    /// Text the picker starts with
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub initial_text: String,
    /// Choices for Custom mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl PresetConfig {
    /// Creates a preset without initial text or choices.
    pub fn new(name: impl Into<String>, configuration: Configuration) -> Self {
        Self {
            name: name.into(),
            configuration,
            initial_text: String::new(),
            choices: Vec::new(),
        }
    }

    /// A fresh choice list seeded with this preset's choices.
    #[must_use]
    pub fn choice_list(&self) -> ChoiceList {
        ChoiceList::new(self.choices.iter().cloned())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/InlinePicker/config.toml`
/// - macOS: `~/Library/Application Support/InlinePicker/config.toml`
/// - Windows: `%APPDATA%\InlinePicker\config.toml`
///
/// # Validation
///
/// - every preset's precisions must lie in `1..=18`
/// - preset names must be unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Picker presets, shown top to bottom in the demo
    #[serde(default = "default_presets", rename = "preset")]
    pub presets: Vec<PresetConfig>,
}

impl Config {
    /// Creates a new Config with the demo presets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ui: UiConfig::default(),
            presets: default_presets(),
        }
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, or defaults when it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates every preset.
    pub fn validate(&self) -> Result<()> {
        for (index, preset) in self.presets.iter().enumerate() {
            preset
                .configuration
                .validate()
                .with_context(|| format!("Preset '{}'", preset.name))?;

            if self.presets[..index].iter().any(|p| p.name == preset.name) {
                anyhow::bail!("Duplicate preset name: {}", preset.name);
            }
        }
        Ok(())
    }

    /// Looks up a preset by name.
    #[must_use]
    pub fn preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Names of all presets, in order.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|preset| preset.name.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_presets() -> Vec<PresetConfig> {
    let mut lens = PresetConfig::new("lens", Configuration::custom());
    lens.choices = ["24mm", "35mm", "40mm", "50mm", "70mm"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut duration = PresetConfig::new(
        "duration",
        Configuration::time(TimePrecision::MinuteSecondMillisecondPer500),
    );
    duration.initial_text = "1230000".to_string();

    let money = PresetConfig::new(
        "money",
        Configuration::number(DigitGrouping::MyriadDecimal)
            .with_number_precision(6)
            .with_decimal_precision(2)
            .with_prefix("$"),
    );

    vec![lens, duration, money]
}
