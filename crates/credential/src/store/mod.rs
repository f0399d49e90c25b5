//! Credential store contract
//!
//! The store is the authoritative list of [`AuthEntry`] values. The priority
//! registry only needs enumeration, lookup by ID and update-in-place; entry
//! creation and removal belong to whoever owns the store.

mod memory;

pub use memory::MemoryAuthStore;

use crate::core::{AuthEntry, StoreResult};
use async_trait::async_trait;

/// Authoritative collection of credential entries
///
/// Implementations must make `update` safe to call concurrently for the same
/// entry; the last writer wins.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// All entries, in the store's enumeration order
    async fn list(&self) -> StoreResult<Vec<AuthEntry>>;

    /// Fresh copy of the entry with this ID
    async fn get(&self, id: &str) -> StoreResult<Option<AuthEntry>>;

    /// Replace the stored entry with the same ID
    ///
    /// Returns the stored value. Fails with [`crate::StoreError::NotFound`]
    /// if no entry has this ID.
    async fn update(&self, entry: AuthEntry) -> StoreResult<AuthEntry>;
}
