//! Result alias for configuration operations

use super::ConfigError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
