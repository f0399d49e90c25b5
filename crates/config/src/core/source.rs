//! Configuration file formats

use std::fmt;
use std::path::Path;

use super::{ConfigError, ConfigResult};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (the default for `config.yaml`)
    Yaml,
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Detect format from a file extension
    ///
    /// Paths without an extension are treated as YAML.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(Self::Yaml);
        };
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::format_not_supported(other)),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Json => "JSON",
        })
    }
}
