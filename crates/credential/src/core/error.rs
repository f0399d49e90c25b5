//! Credential store errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::store::AuthStore`] implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry with this ID
    #[error("Auth entry '{id}' not found")]
    NotFound {
        /// Entry ID
        id: String,
    },

    /// Entries must carry a non-empty ID
    #[error("Auth entry ID cannot be empty")]
    EmptyId,

    /// An entry with this ID is already registered
    #[error("Auth entry '{id}' is already registered")]
    DuplicateId {
        /// Entry ID
        id: String,
    },

    /// Another entry already owns this display name
    #[error("Display name '{name}' is already owned by auth entry '{existing_id}'")]
    DuplicateName {
        /// Conflicting display name
        name: String,
        /// ID of the entry owning the name
        existing_id: String,
    },

    /// Failed to read the auth directory
    #[error("Failed to read auth directory {path}: {source}")]
    Io {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Backend-specific failure
    #[error("Credential store backend error: {0}")]
    Backend(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
