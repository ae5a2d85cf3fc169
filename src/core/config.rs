//! Configuration module for the study dashboard

use crate::core::models::StudyProgram;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory
const DIR_VARIABLE: &str = "$STUDYDASH";

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

/// Database configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file
    #[serde(default)]
    pub path: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Active study program
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Program identifier
    #[serde(default)]
    pub program_id: String,
    /// Program name
    #[serde(default)]
    pub name: String,
    /// Credits required to graduate
    #[serde(default)]
    pub total_ects: u32,
    /// Planned duration in months
    #[serde(default)]
    pub duration_months: u32,
}

impl ProgramConfig {
    /// Build the [`StudyProgram`] goals are evaluated against
    #[must_use]
    pub fn to_study_program(&self) -> StudyProgram {
        StudyProgram::new(
            self.program_id.clone(),
            self.name.clone(),
            self.total_ects,
            self.duration_months,
        )
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Study program settings
    #[serde(default)]
    pub program: ProgramConfig,
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
    /// Override database file path
    pub db_path: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

/// Zero is reserved for "not set" and gets replaced by the default on load
fn parse_positive_count(key: &str, value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err(format!("'{key}' must be greater than zero")),
        Ok(count) => Ok(count),
        Err(_) => Err(format!("Invalid positive integer for '{key}': '{value}'")),
    }
}

impl Config {
    /// Get the `$STUDYDASH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studydash`
    /// - macOS: `~/Library/Application Support/studydash`
    /// - Windows: `%APPDATA%\studydash`
    #[must_use]
    pub fn get_studydash_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studydash")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero) here and set in `defaults` are
    /// updated, so upgrades pick up new settings without losing user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.database.path.is_empty() && !defaults.database.path.is_empty() {
            self.database.path.clone_from(&defaults.database.path);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.program.program_id.is_empty() && !defaults.program.program_id.is_empty() {
            self.program
                .program_id
                .clone_from(&defaults.program.program_id);
            changed = true;
        }
        if self.program.name.is_empty() && !defaults.program.name.is_empty() {
            self.program.name.clone_from(&defaults.program.name);
            changed = true;
        }
        if self.program.total_ects == 0 && defaults.program.total_ects != 0 {
            self.program.total_ects = defaults.program.total_ects;
            changed = true;
        }
        if self.program.duration_months == 0 && defaults.program.duration_months != 0 {
            self.program.duration_months = defaults.program.duration_months;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not touched.
    /// Only non-`None` values replace config values.
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
        if let Some(db_path) = &overrides.db_path {
            self.database.path.clone_from(db_path);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studydash_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$STUDYDASH` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studydash_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults (empty strings, `false`, `0`).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.database.path = Self::expand_variables(&config.database.path);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// Missing fields are merged from defaults and written back. Falls back to
    /// defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `db_path`, `reports_dir`,
    /// `program_id`, `program_name`, `total_ects`, `duration_months`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "db_path" | "db-path" => Some(self.database.path.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "program_id" | "program-id" => Some(self.program.program_id.clone()),
            "program_name" | "program-name" => Some(self.program.name.clone()),
            "total_ects" | "total-ects" => Some(self.program.total_ects.to_string()),
            "duration_months" | "duration-months" => {
                Some(self.program.duration_months.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "db_path" | "db-path" => self.database.path = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "program_id" | "program-id" => self.program.program_id = value.to_string(),
            "program_name" | "program-name" => self.program.name = value.to_string(),
            "total_ects" | "total-ects" => {
                self.program.total_ects = parse_positive_count(key, value)?;
            }
            "duration_months" | "duration-months" => {
                self.program.duration_months = parse_positive_count(key, value)?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "db_path" | "db-path" => self.database.path.clone_from(&defaults.database.path),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "program_id" | "program-id" => self
                .program
                .program_id
                .clone_from(&defaults.program.program_id),
            "program_name" | "program-name" => {
                self.program.name.clone_from(&defaults.program.name);
            }
            "total_ects" | "total-ects" => self.program.total_ects = defaults.program.total_ects,
            "duration_months" | "duration-months" => {
                self.program.duration_months = defaults.program.duration_months;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
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

        writeln!(f, "\n[database]")?;
        writeln!(f, "  path = \"{}\"", self.database.path)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[program]")?;
        writeln!(f, "  program_id = \"{}\"", self.program.program_id)?;
        writeln!(f, "  name = \"{}\"", self.program.name)?;
        writeln!(f, "  total_ects = {}", self.program.total_ects)?;
        writeln!(f, "  duration_months = {}", self.program.duration_months)?;

        Ok(())
    }
}
