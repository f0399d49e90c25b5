//! Core types for credential entries

mod entry;
mod error;

pub use entry::{AuthEntry, CREDENTIAL_FILE_SUFFIX, PRIORITY_ATTRIBUTE, has_credential_suffix};
pub use error::{StoreError, StoreResult};
