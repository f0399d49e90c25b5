//! In-memory credential store

use crate::core::{AuthEntry, StoreError, StoreResult};
use crate::store::AuthStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

/// In-memory implementation of [`AuthStore`]
///
/// Keeps registration order, which is the enumeration order seen by name
/// resolution. Every name an entry answers to (display name or ID) resolves
/// to that entry alone.
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    entries: RwLock<IndexMap<String, AuthEntry>>,
}

impl MemoryAuthStore {
    /// Create empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`
    pub fn with_entries(entries: impl IntoIterator<Item = AuthEntry>) -> StoreResult<Self> {
        let store = Self::new();
        for entry in entries {
            store.register(entry)?;
        }
        Ok(store)
    }

    /// Register a new entry
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyId`] if the trimmed ID is empty
    /// - [`StoreError::DuplicateId`] if the ID is taken
    /// - [`StoreError::DuplicateName`] if the display name or ID is already a
    ///   name of another entry
    pub fn register(&self, entry: AuthEntry) -> StoreResult<()> {
        if entry.id.trim().is_empty() {
            return Err(StoreError::EmptyId);
        }

        let mut entries = self.entries.write();
        if entries.contains_key(&entry.id) {
            return Err(StoreError::DuplicateId { id: entry.id });
        }
        check_name_free(&entries, &entry)?;

        tracing::debug!(auth_id = %entry.id, name = entry.display_name(), "Registered auth entry");
        entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    /// Remove an entry, keeping the order of the others
    pub fn remove(&self, id: &str) -> Option<AuthEntry> {
        self.entries.write().shift_remove(id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Reject `entry` if a name it answers to also matches another entry
///
/// An entry answers to its display name and its trimmed ID, so both are
/// checked against every other entry.
fn check_name_free(entries: &IndexMap<String, AuthEntry>, entry: &AuthEntry) -> StoreResult<()> {
    let names = [entry.display_name(), entry.id.trim()];
    for other in entries.values().filter(|other| other.id != entry.id) {
        if let Some(name) = names.iter().find(|name| other.matches_name(name)) {
            return Err(StoreError::DuplicateName {
                name: (*name).to_string(),
                existing_id: other.id.clone(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl AuthStore for MemoryAuthStore {
    async fn list(&self) -> StoreResult<Vec<AuthEntry>> {
        Ok(self.entries.read().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<AuthEntry>> {
        Ok(self.entries.read().get(id).cloned())
    }

    async fn update(&self, entry: AuthEntry) -> StoreResult<AuthEntry> {
        let mut entries = self.entries.write();
        if !entries.contains_key(&entry.id) {
            return Err(StoreError::NotFound { id: entry.id });
        }
        check_name_free(&entries, &entry)?;

        let stored = entry.clone();
        entries.insert(entry.id.clone(), entry);
        Ok(stored)
    }
}
