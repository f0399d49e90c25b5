//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Environment variable holding the authgate-specific filter
pub(crate) const ENV_FILTER: &str = "AUTHGATE_LOG";

/// Pick the filter directive from the environment values and the configured level
fn filter_directive(level: &str, authgate_log: Option<String>, rust_log: Option<String>) -> String {
    let set = |directive: &String| !directive.trim().is_empty();
    authgate_log
        .filter(set)
        .or_else(|| rust_log.filter(set))
        .unwrap_or_else(|| level.to_string())
}

/// Logger builder
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger alive
///
/// Dropping the guard does not uninstall the global subscriber; it exists so
/// callers hold logging state for the lifetime of `main`.
#[must_use = "dropping the guard immediately is almost always a mistake"]
pub struct LoggerGuard {
    format: Format,
}

impl LoggerGuard {
    /// Output format that was installed
    pub fn format(&self) -> Format {
        self.format
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Resolve the filter
    ///
    /// Precedence: `AUTHGATE_LOG`, then `RUST_LOG`, then the configured level.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        let directive = filter_directive(
            &self.config.level,
            std::env::var(ENV_FILTER).ok(),
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        );
        EnvFilter::try_new(&directive).map_err(|e| LogError::InvalidFilter {
            filter: directive.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - Another global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let registry = Registry::default().with(filter);

        let installed = match self.config.format {
            Format::Pretty => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_ansi(self.config.ansi),
                )
                .try_init(),
            Format::Compact => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_ansi(self.config.ansi),
                )
                .try_init(),
            Format::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_current_span(false),
                )
                .try_init(),
        };
        installed.map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        Ok(LoggerGuard {
            format: self.config.format,
        })
    }
}
