//! Runtime settings, read from an optional TOML file and overridden by CLI flags.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::cli::Cli;

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Glyph atlas to load; the built-in art is used when absent.
    #[serde(default)]
    atlas: Option<PathBuf>,

    /// Ring the terminal bell after each accepted mark.
    #[serde(default = "default_sound")]
    sound: bool,

    /// File that receives log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Milliseconds to wait for input before redrawing.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
}

fn default_sound() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gridmark.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            atlas: None,
            sound: default_sound(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    /// Parses settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Builds settings for `cli`: the config file if given, then flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(atlas) = &cli.atlas {
            settings.atlas = Some(atlas.clone());
        }
        if cli.mute {
            settings.sound = false;
        }
        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }
        debug!(?settings, "Settings resolved");
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::new("poll_interval_ms must be positive"));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
