//! Configuration management for precheck.
//!
//! Settings only affect presentation and exit codes. The list of checks is
//! fixed and cannot be changed here.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Global precheck configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub exit: ExitConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// When to emit ANSI color in banners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to on/off. `Auto` is off when `NO_COLOR` is set to a
    /// non-empty value or stdout is not a terminal.
    pub fn enabled(self, no_color: Option<&OsStr>, stdout_is_tty: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !matches!(no_color, Some(v) if !v.is_empty()) && stdout_is_tty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExitConfig {
    #[serde(default)]
    pub policy: ExitPolicy,
}

/// Exit code used when a check fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicy {
    /// Always exit 1.
    #[default]
    Fixed,
    /// Exit with the failing command's own code when it has a usable one.
    Propagate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from the global config file, or defaults if there is none.
    pub fn load() -> Result<Self, Error> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path to global precheck directory (~/.config/precheck/)
    pub fn global_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("precheck"))
    }

    /// Path to config file
    pub fn path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }
}
