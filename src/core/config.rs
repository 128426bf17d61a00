//! Configuration module for `CurricuForge`

use crate::core::models::Level;
use crate::core::render::OutputFormat;
use crate::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in string values
const DIR_VARIABLE: &str = "$CURRICUFORGE";

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const CONFIG_KEYS: [&str; 8] = [
    "level",
    "file",
    "verbose",
    "subject",
    "course_level",
    "weeks",
    "format",
    "out_dir",
];

/// Errors raised while reading, editing or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key is not one of [`CONFIG_KEYS`]
    #[error("Unknown config key: '{0}'")]
    UnknownKey(String),

    /// Value cannot be stored under the key
    #[error("Invalid value for '{key}': '{value}' ({reason})")]
    InvalidValue {
        /// Config key being set
        key: String,
        /// Rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Config file is not valid TOML for this structure
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config file could not be read or written
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Default inputs for `generate` when flags are omitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Subject used when `--subject` is omitted
    #[serde(default)]
    pub subject: String,
    /// Level name used when `--level` is omitted
    #[serde(default)]
    pub course_level: String,
    /// Duration in weeks used when `--weeks` is omitted
    #[serde(default)]
    pub weeks: u32,
    /// Output format used when `--format` is omitted
    #[serde(default)]
    pub format: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for saved outlines
    #[serde(default)]
    pub out_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Generator defaults
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override outline output directory
    pub out_dir: Option<String>,
}

impl Config {
    /// Get the `$CURRICUFORGE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/curricuforge`
    /// - macOS: `~/Library/Application Support/curricuforge`
    /// - Windows: `%APPDATA%\curricuforge`
    #[must_use]
    pub fn get_curricuforge_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("curricuforge")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_curricuforge_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero, for `weeks`) here and set in
    /// `defaults` are filled in, so user settings survive upgrades that add
    /// new keys.
    ///
    /// # Returns
    /// `true` if any fields were added
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (mine, theirs) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.generator.subject, &defaults.generator.subject),
            (&mut self.generator.course_level, &defaults.generator.course_level),
            (&mut self.generator.format, &defaults.generator.format),
            (&mut self.paths.out_dir, &defaults.paths.out_dir),
        ] {
            if mine.is_empty() && !theirs.is_empty() {
                mine.clone_from(theirs);
                changed = true;
            }
        }

        if self.generator.weeks == 0 && defaults.generator.weeks != 0 {
            self.generator.weeks = defaults.generator.weeks;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
    }

    /// Expand `$CURRICUFORGE` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_curricuforge_dir();
            value.replace(DIR_VARIABLE, &dir.to_string_lossy())
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Initialize config from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from the user config file, creating it from defaults on first run
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load config from `config_file`, creating it from defaults if missing
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        match fs::read_to_string(config_file)
            .map_err(ConfigError::from)
            .and_then(|content| Self::from_toml(&content))
        {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save config to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save config to `config_file`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save_to(&self, config_file: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "subject" => Some(self.generator.subject.clone()),
            "course_level" => Some(self.generator.course_level.clone()),
            "weeks" => Some(self.generator.weeks.to_string()),
            "format" => Some(self.generator.format.clone()),
            "out_dir" => Some(self.paths.out_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid for it
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        match key {
            "level" => {
                let level = value.parse::<LogLevel>().map_err(invalid)?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| invalid("expected true or false".to_string()))?;
            }
            "subject" => self.generator.subject = value.to_string(),
            "course_level" => {
                let level = value
                    .parse::<Level>()
                    .map_err(|e| invalid(e.to_string()))?;
                self.generator.course_level = level.name().to_string();
            }
            "weeks" => {
                self.generator.weeks = value
                    .parse::<u32>()
                    .ok()
                    .filter(|weeks| *weeks >= 1)
                    .ok_or_else(|| invalid("expected a whole number of at least 1".to_string()))?;
            }
            "format" => {
                let format = value
                    .parse::<OutputFormat>()
                    .map_err(|e| invalid(e.to_string()))?;
                self.generator.format = format.to_string();
            }
            "out_dir" => self.paths.out_dir = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), ConfigError> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "subject" => self.generator.subject.clone_from(&defaults.generator.subject),
            "course_level" => self
                .generator
                .course_level
                .clone_from(&defaults.generator.course_level),
            "weeks" => self.generator.weeks = defaults.generator.weeks,
            "format" => self.generator.format.clone_from(&defaults.generator.format),
            "out_dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Delete the user config file so the next load starts from defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[generator]")?;
        writeln!(f, "  subject = \"{}\"", self.generator.subject)?;
        writeln!(f, "  course_level = \"{}\"", self.generator.course_level)?;
        writeln!(f, "  weeks = {}", self.generator.weeks)?;
        writeln!(f, "  format = \"{}\"", self.generator.format)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = Config::from_defaults();

        assert!(!config.logging.level.is_empty());
        assert_eq!(config.generator.subject, "Python Programming");
        assert_eq!(config.generator.course_level, "Beginner");
        assert_eq!(config.generator.weeks, 4);
        assert_eq!(config.generator.format, "markdown");
        assert!(!config.paths.out_dir.is_empty());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = Config::from_defaults();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_expand_variables_leaves_plain_values() {
        assert_eq!(Config::expand_variables("./out"), "./out");
        assert!(!Config::expand_variables("$CURRICUFORGE/out").contains(DIR_VARIABLE));
    }
}
