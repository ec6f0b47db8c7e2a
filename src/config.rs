//! Validator configuration
//!
//! Optional settings are read from `~/.config/easycut/config.toml` (XDG
//! standard) or from an explicit path:
//!
//! ```toml
//! [phone]
//! ddds = ["11", "21", "31"]   # replaces the built-in area code table
//!
//! [form]
//! min_password_len = 10
//!
//! [output]
//! color = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::{DEFAULT_MIN_PASSWORD_LEN, FormValidator};
use crate::phone::PhoneValidator;

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "easycut";

/// Config filename
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// An area code entry is not two digits 1-9
    #[error("invalid DDD in config: {0:?} (expected two digits, 11-99)")]
    InvalidDdd(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Phone validation settings
    #[serde(default)]
    pub phone: PhoneConfig,
    /// Form validation settings
    #[serde(default)]
    pub form: FormConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Phone validation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneConfig {
    /// Accepted area codes; the built-in table when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddds: Option<Vec<String>>,
}

/// Form validation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Minimum password length
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

const fn default_min_password_len() -> usize {
    DEFAULT_MIN_PASSWORD_LEN
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_password_len: default_min_password_len(),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize human-readable output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Default config file path, if the platform has a config dir
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load from an explicit path; a missing file is an error
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and check TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for ddd in self.phone.ddds.iter().flatten() {
            let bytes = ddd.as_bytes();
            let ok = bytes.len() == 2 && bytes.iter().all(|b| (b'1'..=b'9').contains(b));
            if !ok {
                return Err(ConfigError::InvalidDdd(ddd.clone()));
            }
        }
        Ok(())
    }

    /// Phone validator honoring the configured DDD table
    #[must_use]
    pub fn phone_validator(&self) -> PhoneValidator {
        self.phone
            .ddds
            .as_ref()
            .map_or_else(PhoneValidator::default, |ddds| PhoneValidator::with_ddds(ddds.iter().cloned()))
    }

    /// Form validator honoring phone and password settings
    #[must_use]
    pub fn form_validator(&self) -> FormValidator {
        FormValidator::new(self.phone_validator(), self.form.min_password_len)
    }
}
