//! Error types for logger initialization

use thiserror::Error;

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LogError {
    /// The filter directive could not be parsed
    #[error("Invalid filter '{filter}': {reason}")]
    InvalidFilter {
        /// Filter string as configured
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type alias for logging operations
pub type LogResult<T> = Result<T, LogError>;
