use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Message store settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Message store configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Database file path; `None` means the platform data directory,
    /// `":memory:"` an in-memory database
    #[serde(default)]
    pub path: Option<String>,

    /// How long a connection waits on a locked database, in milliseconds
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

/// Where the message store lives
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseLocation {
    /// Default file under the user's data directory
    Default,
    /// In-memory store (lost on exit)
    InMemory,
    /// Explicit file path
    File(PathBuf),
}

impl DatabaseConfig {
    /// Resolve the configured path into a location
    pub fn location(&self) -> DatabaseLocation {
        match self.path.as_deref() {
            None => DatabaseLocation::Default,
            Some(":memory:") => DatabaseLocation::InMemory,
            Some(path) => DatabaseLocation::File(PathBuf::from(path)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Config {
    /// Load the configuration at `path`, writing a default one if it doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

            return Ok(config);
        }

        warn!(
            "Config file not found at '{}', creating default config.",
            path.display()
        );

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.database.busy_timeout_ms == 0 {
            return Err(anyhow!("database.busy_timeout_ms must be greater than zero"));
        }

        if let Some(path) = &self.database.path {
            if path.trim().is_empty() {
                return Err(anyhow!(
                    "database.path must not be empty; omit it to use the default location"
                ));
            }
        }

        Ok(())
    }
}
