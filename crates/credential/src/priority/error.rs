//! Priority registry errors

use std::fmt;

use authgate_config::ConfigError;
use thiserror::Error;

use crate::core::StoreError;

/// Collaborator the registry depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// The credential store
    CredentialStore,
    /// The configuration document and its persister
    ConfigTarget,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CredentialStore => "credential store",
            Self::ConfigTarget => "configuration target",
        })
    }
}

/// Errors from priority reads and writes
#[derive(Debug, Error)]
pub enum PriorityError {
    /// The credential name was empty after trimming
    #[error("name cannot be empty")]
    EmptyName,

    /// A required collaborator is not configured
    #[error("{component} is not configured")]
    Unavailable {
        /// Missing collaborator
        component: Collaborator,
    },

    /// No entry matches the name by display name or ID
    #[error("auth entry '{name}' not found")]
    NotFound {
        /// Name as supplied by the caller
        name: String,
    },

    /// The credential store failed
    #[error("credential store error: {source}")]
    Store {
        /// Underlying store error
        #[source]
        source: StoreError,
    },

    /// Saving the configuration document failed
    ///
    /// The credential store and in-memory mirror already hold the new value
    /// when this is returned.
    #[error("failed to persist configuration: {source}")]
    Persistence {
        /// Underlying persistence error
        #[source]
        source: ConfigError,
    },
}

impl From<StoreError> for PriorityError {
    fn from(source: StoreError) -> Self {
        Self::Store { source }
    }
}

impl From<ConfigError> for PriorityError {
    fn from(source: ConfigError) -> Self {
        Self::Persistence { source }
    }
}

/// Result type alias for registry operations
pub type PriorityResult<T> = Result<T, PriorityError>;
