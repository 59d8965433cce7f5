//! Configuration module for `student-data`

use crate::core::catalog::{LoadPolicy, BUNDLED_MODULES, BUNDLED_SUPERVISORS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

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

/// Placeholder expanded to the configuration directory
const DIR_VARIABLE: &str = "$STUDENT_DATA";

/// Every key accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const CONFIG_KEYS: [&str; 6] = [
    "level",
    "file",
    "verbose",
    "modules_file",
    "supervisors_file",
    "load_policy",
];

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

/// Catalogue source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Module catalogue (`code, name, credits` per line)
    #[serde(default)]
    pub modules_file: String,
    /// Supervisor catalogue (`firstName, lastName` per line)
    #[serde(default)]
    pub supervisors_file: String,
}

/// Registry behaviour configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Reaction to malformed catalogue lines (stop, skip, fail)
    #[serde(default)]
    pub load_policy: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Catalogue sources
    #[serde(default)]
    pub data: DataConfig,
    /// Registry settings
    #[serde(default)]
    pub registry: RegistryConfig,
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
    /// Override module catalogue path
    pub modules_file: Option<String>,
    /// Override supervisor catalogue path
    pub supervisors_file: Option<String>,
    /// Override catalogue load policy
    pub load_policy: Option<String>,
}

impl Config {
    /// Get the `$STUDENT_DATA` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studentdata`
    /// - macOS: `~/Library/Application Support/studentdata`
    /// - Windows: `%APPDATA%\studentdata`
    #[must_use]
    pub fn get_student_data_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studentdata")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        let mut fill = |target: &mut String, default: &String| {
            if target.is_empty() && !default.is_empty() {
                target.clone_from(default);
                changed = true;
            }
        };

        fill(&mut self.logging.level, &defaults.logging.level);
        fill(&mut self.logging.file, &defaults.logging.file);
        fill(&mut self.data.modules_file, &defaults.data.modules_file);
        fill(&mut self.data.supervisors_file, &defaults.data.supervisors_file);
        fill(&mut self.registry.load_policy, &defaults.registry.load_policy);

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the configuration file is not
    /// modified. Only non-`None` values replace config values.
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
        if let Some(modules_file) = &overrides.modules_file {
            self.data.modules_file.clone_from(modules_file);
        }
        if let Some(supervisors_file) = &overrides.supervisors_file {
            self.data.supervisors_file.clone_from(supervisors_file);
        }
        if let Some(load_policy) = &overrides.load_policy {
            self.registry.load_policy.clone_from(load_policy);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_student_data_dir`](Self::get_student_data_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_student_data_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$STUDENT_DATA` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_student_data_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.data.modules_file = Self::expand_variables(&config.data.modules_file);
        config.data.supervisors_file = Self::expand_variables(&config.data.supervisors_file);

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

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        let config = if config_file.exists() {
            Self::read_or_default(&config_file, defaults)
        } else {
            if let Err(e) = defaults.save() {
                crate::warn!("Could not write default config: {e}");
            }
            defaults
        };

        if let Err(e) = config.seed_catalogues(&Self::get_student_data_dir()) {
            crate::warn!("Could not install bundled catalogues: {e}");
        }
        config
    }

    fn read_or_default(config_file: &Path, defaults: Self) -> Self {
        match fs::read_to_string(config_file) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(mut config) => {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    config
                }
                Err(e) => {
                    crate::warn!("Ignoring unparsable config {}: {e}", config_file.display());
                    defaults
                }
            },
            Err(e) => {
                crate::warn!("Could not read config {}: {e}", config_file.display());
                defaults
            }
        }
    }

    /// Write the bundled catalogues to any configured catalogue path that
    /// lies inside `data_dir` and does not exist yet
    ///
    /// Existing files are never overwritten, and paths outside `data_dir`
    /// are left to the user.
    ///
    /// # Returns
    /// The number of files written
    ///
    /// # Errors
    /// Returns an error if a catalogue file cannot be written
    pub fn seed_catalogues(&self, data_dir: &Path) -> std::io::Result<usize> {
        let mut written = 0;
        for (path, contents) in [
            (&self.data.modules_file, BUNDLED_MODULES),
            (&self.data.supervisors_file, BUNDLED_SUPERVISORS),
        ] {
            let path = Path::new(path);
            if path.as_os_str().is_empty() || !path.starts_with(data_dir) || path.exists() {
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)?;
            crate::info!("Installed bundled catalogue at {}", path.display());
            written += 1;
        }
        Ok(written)
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Effective catalogue load policy, falling back to the default on an
    /// unrecognised value
    #[must_use]
    pub fn load_policy(&self) -> LoadPolicy {
        if self.registry.load_policy.trim().is_empty() {
            return LoadPolicy::default();
        }
        self.registry.load_policy.parse().unwrap_or_else(|e| {
            crate::warn!("{e}; using '{}'", LoadPolicy::default());
            LoadPolicy::default()
        })
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "modules_file" => Some(self.data.modules_file.clone()),
            "supervisors_file" => Some(self.data.supervisors_file.clone()),
            "load_policy" => Some(self.registry.load_policy.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "modules_file" => self.data.modules_file = value.to_string(),
            "supervisors_file" => self.data.supervisors_file = value.to_string(),
            "load_policy" => {
                let policy: LoadPolicy = value.parse()?;
                self.registry.load_policy = policy.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "modules_file" => self.data.modules_file.clone_from(&defaults.data.modules_file),
            "supervisors_file" => self
                .data
                .supervisors_file
                .clone_from(&defaults.data.supervisors_file),
            "load_policy" => self
                .registry
                .load_policy
                .clone_from(&defaults.registry.load_policy),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by removing the config file
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

        writeln!(f, "\n[data]")?;
        writeln!(f, "  modules_file = \"{}\"", self.data.modules_file)?;
        writeln!(f, "  supervisors_file = \"{}\"", self.data.supervisors_file)?;

        writeln!(f, "\n[registry]")?;
        writeln!(f, "  load_policy = \"{}\"", self.registry.load_policy)?;

        Ok(())
    }
}
