//! Persistence of the gateway configuration document
//!
//! The management layer only relies on the [`ConfigPersister`] contract:
//! `save` either durably stores the given snapshot or returns an error. No
//! retries happen here.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use parking_lot::Mutex;

use crate::core::{ConfigError, ConfigFormat, ConfigResult, GatewayConfig};
use crate::loaders::file::render_content;

/// Writes a configuration snapshot somewhere durable
#[async_trait]
pub trait ConfigPersister: Send + Sync {
    /// Persist the given document
    async fn save(&self, config: &GatewayConfig) -> ConfigResult<()>;
}

/// Persists the document to a file, replacing it atomically
#[derive(Debug, Clone)]
pub struct FilePersister {
    path: PathBuf,
    format: ConfigFormat,
}

impl FilePersister {
    /// Create a persister for `path`, detecting the format from its extension
    pub fn new(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let format = ConfigFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output format
    pub fn format(&self) -> ConfigFormat {
        self.format
    }
}

#[async_trait]
impl ConfigPersister for FilePersister {
    async fn save(&self, config: &GatewayConfig) -> ConfigResult<()> {
        let content = render_content(config, self.format)?;
        let path = self.path.clone();

        let written = tokio::task::spawn_blocking(move || {
            AtomicFile::new(&path, OverwriteBehavior::AllowOverwrite)
                .write(|file| std::io::Write::write_all(file, content.as_bytes()))
                .map_err(|e| ConfigError::write_error(&path, e.to_string()))
        })
        .await
        .map_err(|e| ConfigError::write_error(&self.path, e.to_string()))?;

        match &written {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Configuration saved"),
            Err(e) => tracing::error!(path = %self.path.display(), error = %e, "Configuration save failed"),
        }
        written
    }
}

/// In-memory persister that records every saved snapshot
///
/// Useful for embedding the registry without a file and for tests. Can be
/// switched into a failing mode to exercise persistence errors.
#[derive(Debug, Default)]
pub struct MemoryPersister {
    saved: Mutex<Vec<GatewayConfig>>,
    failure: Mutex<Option<String>>,
}

impl MemoryPersister {
    /// Create an empty persister
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a persister whose saves fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        let persister = Self::default();
        persister.set_failure(Some(message.into()));
        persister
    }

    /// Enable or disable simulated failures
    pub fn set_failure(&self, message: Option<String>) {
        *self.failure.lock() = message;
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saved.lock().len()
    }

    /// Most recently saved snapshot
    pub fn last_saved(&self) -> Option<GatewayConfig> {
        self.saved.lock().last().cloned()
    }
}

#[async_trait]
impl ConfigPersister for MemoryPersister {
    async fn save(&self, config: &GatewayConfig) -> ConfigResult<()> {
        if let Some(message) = self.failure.lock().clone() {
            return Err(ConfigError::write_error("<memory>", message));
        }
        self.saved.lock().push(config.clone());
        Ok(())
    }
}
