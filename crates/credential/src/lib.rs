//! Authgate Credential - credential entries and their priority metadata
//!
//! Every credential the gateway knows about is an [`AuthEntry`]: an opaque
//! ID, an optional file name, and a bag of string attributes. The
//! [`PriorityRegistry`] reads and rewrites the `"priority"` attribute of those
//! entries and keeps the `auth-priority` mirror in the gateway configuration
//! document in step with it.
//!
//! # Example
//!
//! ```no_run
//! use authgate_config::{ConfigHandle, GatewayConfig, MemoryPersister};
//! use authgate_credential::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryAuthStore::new());
//! store.register(AuthEntry::new("a1").with_file_name("acct1.json"))?;
//!
//! let config = ConfigHandle::new(GatewayConfig::default(), Arc::new(MemoryPersister::new()));
//! let registry = PriorityRegistry::builder()
//!     .store(store)
//!     .config(config)
//!     .build();
//!
//! registry.set_priority("acct1.json", PriorityUpdate::Set(5)).await?;
//! assert_eq!(registry.list_priorities().await?["acct1.json"], 5);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Credential entry model and store errors
pub mod core;
/// Auth directory scanning
pub mod loader;
/// Priority resolution, reads and writes
pub mod priority;
/// Credential store contract and the in-memory store
pub mod store;

pub use crate::core::{AuthEntry, CREDENTIAL_FILE_SUFFIX, PRIORITY_ATTRIBUTE, StoreError, StoreResult};
pub use crate::loader::load_auth_dir;
pub use crate::priority::{
    Collaborator, PriorityError, PriorityRegistry, PriorityRegistryBuilder, PriorityResult,
    PriorityUpdate, ResolvedEntry,
};
pub use crate::store::{AuthStore, MemoryAuthStore};

/// Commonly used types and traits
pub mod prelude {
    pub use crate::core::{AuthEntry, StoreError, StoreResult};
    pub use crate::priority::{
        PriorityError, PriorityRegistry, PriorityResult, PriorityUpdate, ResolvedEntry,
    };
    pub use crate::store::{AuthStore, MemoryAuthStore};
}
