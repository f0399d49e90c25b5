//! Configuration read from the environment

use super::{Config, Format};
use crate::builder::ENV_FILTER;

impl Config {
    /// Create configuration from environment variables
    ///
    /// `AUTHGATE_LOG` takes precedence over `RUST_LOG`; `AUTHGATE_LOG_FORMAT`
    /// selects the output format. [`LoggerBuilder::filter`] applies the same
    /// precedence over the configured level.
    ///
    /// [`LoggerBuilder::filter`]: crate::LoggerBuilder::filter
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var(ENV_FILTER) {
            config.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            config.level = level;
        }

        if let Ok(format) = std::env::var("AUTHGATE_LOG_FORMAT") {
            config.format = Format::parse_lossy(&format);
        }

        config
    }
}
