//! Priority registry - reads and tri-state writes over store and config mirror

use std::collections::BTreeMap;
use std::sync::Arc;

use authgate_config::ConfigHandle;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::core::StoreError;
use crate::priority::accessor::{collect_priorities, explicit_priority};
use crate::priority::resolver::{ResolvedEntry, resolve};
use crate::priority::{Collaborator, PriorityError, PriorityResult, PriorityUpdate};
use crate::store::AuthStore;

/// Reads and writes credential priorities
///
/// Holds the credential store and the configuration target as injected
/// collaborators. Either may be absent: reads then report an empty mapping
/// and writes fail with [`PriorityError::Unavailable`].
///
/// Writes through one registry are serialised, so the store attribute and the
/// config mirror always end up with the same last writer. Writers that bypass
/// the registry can still make the two diverge until the next write.
pub struct PriorityRegistry {
    store: Option<Arc<dyn AuthStore>>,
    config: Option<ConfigHandle>,
    write_lock: Mutex<()>,
}

impl PriorityRegistry {
    /// Create builder for constructing a registry
    pub fn builder() -> PriorityRegistryBuilder {
        PriorityRegistryBuilder::default()
    }

    fn require_store(&self) -> PriorityResult<&Arc<dyn AuthStore>> {
        self.store.as_ref().ok_or(PriorityError::Unavailable {
            component: Collaborator::CredentialStore,
        })
    }

    fn require_config(&self) -> PriorityResult<&ConfigHandle> {
        self.config.as_ref().ok_or(PriorityError::Unavailable {
            component: Collaborator::ConfigTarget,
        })
    }

    /// Effective priority of every file-backed entry, keyed by display name
    ///
    /// Returns an empty mapping when no credential store is configured.
    pub async fn list_priorities(&self) -> PriorityResult<BTreeMap<String, i64>> {
        let Some(store) = &self.store else {
            debug!("No credential store configured, reporting no priorities");
            return Ok(BTreeMap::new());
        };

        let entries = store.list().await.map_err(|e| {
            error!(error = %e, "Failed to enumerate auth entries");
            PriorityError::from(e)
        })?;
        let priorities = collect_priorities(&entries);
        debug!(count = priorities.len(), "Listed auth priorities");
        Ok(priorities)
    }

    /// Resolve `name` to an entry by display name or ID
    pub async fn resolve(&self, name: &str) -> PriorityResult<ResolvedEntry> {
        let store = self.require_store()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(PriorityError::EmptyName);
        }

        let entries = store.list().await?;
        resolve(&entries, name).ok_or_else(|| PriorityError::NotFound {
            name: name.to_string(),
        })
    }

    /// Set or clear the priority of the entry `name` refers to
    ///
    /// Resolves the name, rewrites the `"priority"` attribute on a fresh copy
    /// of the entry, stores it, updates the config mirror under the entry's
    /// display name and persists the configuration.
    ///
    /// # Errors
    ///
    /// - [`PriorityError::Unavailable`] if the store or config target is missing
    /// - [`PriorityError::EmptyName`] if `name` is blank
    /// - [`PriorityError::NotFound`] if nothing matches; neither store is touched
    /// - [`PriorityError::Store`] if the store update fails; the mirror is left
    ///   unchanged and nothing is persisted
    /// - [`PriorityError::Persistence`] if saving fails; both in-memory stores
    ///   already hold the new value
    pub async fn set_priority(
        &self,
        name: &str,
        update: impl Into<PriorityUpdate>,
    ) -> PriorityResult<ResolvedEntry> {
        let update = update.into();
        let store = self.require_store()?;
        let config = self.require_config()?;

        let name = name.trim();
        if name.is_empty() {
            return Err(PriorityError::EmptyName);
        }

        let _guard = self.write_lock.lock().await;

        let resolved = match self.resolve(name).await {
            Ok(resolved) => resolved,
            Err(e) => {
                if matches!(e, PriorityError::NotFound { .. }) {
                    warn!(name = %name, "Priority update for unknown auth entry");
                }
                return Err(e);
            }
        };

        // Mutate a fresh copy rather than the enumeration snapshot.
        let Some(mut entry) = store.get(&resolved.id).await? else {
            warn!(name = %name, auth_id = %resolved.id, "Auth entry vanished after resolution");
            return Err(PriorityError::NotFound {
                name: name.to_string(),
            });
        };

        update.apply(&mut entry.attributes);
        entry.updated_at = Utc::now();

        match store.update(entry).await {
            Ok(_) => {}
            Err(StoreError::NotFound { .. }) => {
                warn!(name = %name, auth_id = %resolved.id, "Auth entry vanished before update");
                return Err(PriorityError::NotFound {
                    name: name.to_string(),
                });
            }
            Err(e) => {
                error!(name = %name, auth_id = %resolved.id, error = %e, "Failed to update auth entry");
                return Err(e.into());
            }
        }

        config.update(|doc| match update {
            PriorityUpdate::Clear => {
                doc.clear_auth_priority(&resolved.display_name);
            }
            PriorityUpdate::Set(priority) => {
                doc.set_auth_priority(resolved.display_name.clone(), priority);
            }
        });

        if let Err(e) = config.persist().await {
            error!(
                name = %resolved.display_name,
                error = %e,
                "Priority applied in memory but configuration save failed"
            );
            return Err(e.into());
        }

        info!(
            name = %resolved.display_name,
            auth_id = %resolved.id,
            priority = ?update.value(),
            "Auth priority updated"
        );
        Ok(resolved)
    }

    /// Copy mirrored priorities from the configuration into the store
    ///
    /// Used at startup so priorities survive a restart. Entries are matched by
    /// display name; entries already holding the mirrored value are left
    /// alone. Nothing is persisted. Returns the number of entries updated.
    pub async fn seed_from_config(&self) -> PriorityResult<usize> {
        let store = self.require_store()?;
        let config = self.require_config()?;

        let Some(mirror) = config.read(|doc| doc.auth_priority.clone()) else {
            return Ok(0);
        };

        let _guard = self.write_lock.lock().await;
        let mut seeded = 0;
        for mut entry in store.list().await? {
            let Some(&priority) = mirror.get(entry.display_name()) else {
                continue;
            };
            if explicit_priority(&entry) == Some(priority) {
                continue;
            }

            PriorityUpdate::Set(priority).apply(&mut entry.attributes);
            entry.updated_at = Utc::now();
            let id = entry.id.clone();
            store.update(entry).await?;
            debug!(auth_id = %id, priority, "Seeded auth priority from configuration");
            seeded += 1;
        }

        info!(seeded, mirrored = mirror.len(), "Seeded auth priorities from configuration");
        Ok(seeded)
    }
}

impl std::fmt::Debug for PriorityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityRegistry")
            .field("store", &self.store.is_some())
            .field("config", &self.config.is_some())
            .finish()
    }
}

/// Builder for [`PriorityRegistry`]
#[derive(Default)]
pub struct PriorityRegistryBuilder {
    store: Option<Arc<dyn AuthStore>>,
    config: Option<ConfigHandle>,
}

impl PriorityRegistryBuilder {
    /// Set the credential store
    pub fn store(mut self, store: Arc<dyn AuthStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the configuration target
    pub fn config(mut self, config: ConfigHandle) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the registry
    pub fn build(self) -> PriorityRegistry {
        PriorityRegistry {
            store: self.store,
            config: self.config,
            write_lock: Mutex::new(()),
        }
    }
}
