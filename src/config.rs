use crate::header::DEFAULT_HEADER;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = ".rs";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// On-disk form of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    header: Option<String>,
    extension: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampConfig {
    pub header: String,
    pub extension: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        StampConfig {
            header: DEFAULT_HEADER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl StampConfig {
    /// Parse a TOML string, filling in defaults for missing keys.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = StampConfig::default();

        let config = StampConfig {
            header: file.header.unwrap_or(defaults.header),
            extension: file.extension.unwrap_or(defaults.extension),
        };

        if config.header.is_empty() {
            return Err(ConfigError::Invalid("header must not be empty"));
        }
        if config.extension.is_empty() {
            return Err(ConfigError::Invalid("extension must not be empty"));
        }

        Ok(config)
    }

    /// Load the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(StampConfig::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ConfigError::PermissionDenied(path.to_path_buf())
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::from_toml(&content)
    }
}
