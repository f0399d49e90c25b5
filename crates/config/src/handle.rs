//! Shared handle to the live configuration document

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::{ConfigResult, GatewayConfig};
use crate::persist::ConfigPersister;

/// Shared, persistable configuration document
///
/// Cloning the handle shares the same document and persister. Mutations go
/// through [`ConfigHandle::update`]; [`ConfigHandle::persist`] saves a
/// snapshot taken after the lock is released.
#[derive(Clone)]
pub struct ConfigHandle {
    document: Arc<RwLock<GatewayConfig>>,
    persister: Arc<dyn ConfigPersister>,
}

impl ConfigHandle {
    /// Wrap a loaded document together with its persister
    pub fn new(config: GatewayConfig, persister: Arc<dyn ConfigPersister>) -> Self {
        Self {
            document: Arc::new(RwLock::new(config)),
            persister,
        }
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> GatewayConfig {
        self.document.read().clone()
    }

    /// Read from the current document without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&GatewayConfig) -> R) -> R {
        f(&self.document.read())
    }

    /// Mutate the document in place
    pub fn update<R>(&self, f: impl FnOnce(&mut GatewayConfig) -> R) -> R {
        f(&mut self.document.write())
    }

    /// Save the current document through the persister
    pub async fn persist(&self) -> ConfigResult<()> {
        let snapshot = self.snapshot();
        self.persister.save(&snapshot).await
    }
}

impl std::fmt::Debug for ConfigHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigHandle")
            .field("document", &*self.document.read())
            .finish_non_exhaustive()
    }
}
