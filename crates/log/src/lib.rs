//! Authgate Log - logging setup shared by the authgate crates
//!
//! Wraps `tracing-subscriber` behind a small serde-friendly [`Config`] so the
//! gateway configuration document can carry its own `logging` section.
//!
//! ```no_run
//! let _guard = authgate_log::init().expect("logger");
//! tracing::info!(port = 8317, "listening");
//! ```

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, Format};
pub use error::{LogError, LogResult};

/// Initialize logging from environment variables with compact defaults
pub fn init() -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(Config::from_env()).build()
}

/// Initialize logging from an explicit configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
