//! Authgate Config - the gateway configuration document
//!
//! Holds the [`GatewayConfig`] document, the loaders that read it from disk,
//! the [`ConfigPersister`] implementations that write it back, and the shared
//! [`ConfigHandle`] the management layer mutates.
//!
//! The document also carries the `auth-priority` mirror: a best-effort copy of
//! credential priorities keyed by display name, kept for consumers that read
//! the configuration file directly.
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate_config::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> ConfigResult<()> {
//! let config = load_config("config.yaml").await?;
//! let persister = Arc::new(FilePersister::new("config.yaml")?);
//! let handle = ConfigHandle::new(config, persister);
//!
//! handle.update(|doc| doc.set_auth_priority("acct1.json", 5));
//! handle.persist().await?;
//! # Ok(())
//! # }
//! ```

#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod core;
pub mod handle;
pub mod loaders;
pub mod persist;

pub use crate::core::{ConfigError, ConfigFormat, ConfigResult, GatewayConfig};
pub use handle::ConfigHandle;
pub use loaders::{FileLoader, load_config};
pub use persist::{ConfigPersister, FilePersister, MemoryPersister};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{ConfigError, ConfigFormat, ConfigResult, GatewayConfig};
    pub use crate::handle::ConfigHandle;
    pub use crate::loaders::{FileLoader, load_config};
    pub use crate::persist::{ConfigPersister, FilePersister, MemoryPersister};
}
