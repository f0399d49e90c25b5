//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// Path to the configuration file
        path: PathBuf,
    },

    /// Configuration file read error
    #[error("Failed to read configuration file {path}: {message}")]
    FileReadError {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration file parse error
    #[error("Failed to parse configuration file {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message describing the parse failure
        message: String,
    },

    /// Configuration could not be serialized for saving
    #[error("Failed to serialize configuration as {format}: {message}")]
    SerializeError {
        /// Target format
        format: String,
        /// Serializer message
        message: String,
    },

    /// Configuration file write error
    #[error("Failed to write configuration file {path}: {message}")]
    WriteError {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Configuration format not supported
    #[error("Configuration format not supported: {format}")]
    FormatNotSupported {
        /// Format that is not supported
        format: String,
    },
}

impl ConfigError {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a file read error
    pub fn file_read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a serialize error
    pub fn serialize_error(format: impl ToString, message: impl Into<String>) -> Self {
        Self::SerializeError {
            format: format.to_string(),
            message: message.into(),
        }
    }

    /// Create a write error
    pub fn write_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::WriteError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a format not supported error
    pub fn format_not_supported(format: impl Into<String>) -> Self {
        Self::FormatNotSupported {
            format: format.into(),
        }
    }
}
