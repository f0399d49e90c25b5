//! Integration tests for PriorityRegistry reads and tri-state writes
//!
//! These tests drive the registry through a real MemoryAuthStore and a
//! ConfigHandle backed by a MemoryPersister, checking both stores after every
//! write.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use authgate_config::{ConfigHandle, GatewayConfig, MemoryPersister};
use authgate_credential::prelude::*;
use authgate_credential::priority::explicit_priority;
use pretty_assertions::assert_eq;

struct Harness {
    registry: PriorityRegistry,
    store: Arc<MemoryAuthStore>,
    config: ConfigHandle,
    persister: Arc<MemoryPersister>,
}

fn harness(entries: Vec<AuthEntry>) -> Harness {
    let store = Arc::new(MemoryAuthStore::with_entries(entries).unwrap());
    let persister = Arc::new(MemoryPersister::new());
    let config = ConfigHandle::new(GatewayConfig::default(), persister.clone());
    let registry = PriorityRegistry::builder()
        .store(store.clone())
        .config(config.clone())
        .build();
    Harness {
        registry,
        store,
        config,
        persister,
    }
}

fn priorities(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

#[tokio::test]
async fn test_unset_priority_reads_as_zero() {
    let h = harness(vec![
        AuthEntry::new("a1").with_file_name("acct1.json"),
        AuthEntry::new("a2").with_file_name("acct2.json"),
    ]);

    let read = h.registry.list_priorities().await.unwrap();

    assert_eq!(read, priorities(&[("acct1.json", 0), ("acct2.json", 0)]));
}

#[tokio::test]
async fn test_set_then_read_returns_value() {
    let h = harness(vec![AuthEntry::new("a1").with_file_name("acct1.json")]);

    h.registry
        .set_priority("acct1.json", PriorityUpdate::Set(-4))
        .await
        .unwrap();

    let read = h.registry.list_priorities().await.unwrap();
    assert_eq!(read, priorities(&[("acct1.json", -4)]));
    assert_eq!(h.config.snapshot().auth_priority("acct1.json"), Some(-4));
}

#[tokio::test]
async fn test_explicit_zero_is_stored_and_distinguishable_by_presence() {
    // GIVEN: an entry with no priority attribute
    let h = harness(vec![AuthEntry::new("a1").with_file_name("acct1.json")]);
    let unset = h.store.get("a1").await.unwrap().unwrap();
    assert_eq!(explicit_priority(&unset), None);

    // WHEN: zero is written explicitly
    h.registry
        .set_priority("acct1.json", PriorityUpdate::Set(0))
        .await
        .unwrap();

    // THEN: reads are identical to the default, but the attribute is present
    let read = h.registry.list_priorities().await.unwrap();
    assert_eq!(read, priorities(&[("acct1.json", 0)]));

    let entry = h.store.get("a1").await.unwrap().unwrap();
    assert_eq!(entry.priority_attribute(), Some("0"));
    assert_eq!(explicit_priority(&entry), Some(0));
    assert_eq!(h.config.snapshot().auth_priority("acct1.json"), Some(0));

    // WHEN: the priority is cleared
    h.registry
        .set_priority("acct1.json", PriorityUpdate::Clear)
        .await
        .unwrap();

    // THEN: the attribute is gone and reads still report the default
    let entry = h.store.get("a1").await.unwrap().unwrap();
    assert_eq!(entry.priority_attribute(), None);
    assert_eq!(explicit_priority(&entry), None);
    assert_eq!(
        h.registry.list_priorities().await.unwrap(),
        priorities(&[("acct1.json", 0)])
    );
}

#[tokio::test]
async fn test_clear_removes_mirror_key_and_drops_empty_mirror() {
    let h = harness(vec![
        AuthEntry::new("a1").with_file_name("acct1.json"),
        AuthEntry::new("a2").with_file_name("acct2.json"),
    ]);
    h.registry.set_priority("acct1.json", PriorityUpdate::Set(1)).await.unwrap();
    h.registry.set_priority("acct2.json", PriorityUpdate::Set(2)).await.unwrap();

    h.registry.set_priority("acct1.json", PriorityUpdate::Clear).await.unwrap();
    let mirror = h.config.snapshot().auth_priority;
    assert_eq!(mirror, Some(priorities(&[("acct2.json", 2)])));

    h.registry.set_priority("acct2.json", PriorityUpdate::Clear).await.unwrap();
    assert_eq!(h.config.snapshot().auth_priority, None);
    assert_eq!(h.persister.last_saved().unwrap().auth_priority, None);
}

#[tokio::test]
async fn test_read_excludes_inline_credentials() {
    let h = harness(vec![
        AuthEntry::new("x").with_file_name("X.JSON").with_attribute("priority", "2"),
        AuthEntry::new("claude:apikey:xxx").with_attribute("priority", "7"),
        AuthEntry::new("codex:apikey:yyy"),
    ]);

    let read = h.registry.list_priorities().await.unwrap();

    assert_eq!(read, priorities(&[("X.JSON", 2)]));
}

#[tokio::test]
async fn test_inline_credential_resolved_by_id_uses_id_as_mirror_key() {
    let h = harness(vec![AuthEntry::new("claude:apikey:xxx")]);

    let resolved = h
        .registry
        .set_priority("claude:apikey:xxx", PriorityUpdate::Set(3))
        .await
        .unwrap();

    assert_eq!(resolved.display_name, "claude:apikey:xxx");
    assert_eq!(h.config.snapshot().auth_priority("claude:apikey:xxx"), Some(3));
    let entry = h.store.get("claude:apikey:xxx").await.unwrap().unwrap();
    assert_eq!(entry.priority_attribute(), Some("3"));
}

#[tokio::test]
async fn test_lookup_by_id_keys_mirror_by_file_name() {
    let h = harness(vec![AuthEntry::new("a1").with_file_name("acct1.json")]);

    h.registry.set_priority("a1", PriorityUpdate::Set(8)).await.unwrap();

    let mirror = h.config.snapshot().auth_priority.unwrap();
    assert_eq!(mirror, priorities(&[("acct1.json", 8)]));
    assert!(!mirror.contains_key("a1"));
}

#[tokio::test]
async fn test_clear_by_id_removes_file_name_key() {
    let h = harness(vec![AuthEntry::new("a1").with_file_name("acct1.json")]);
    h.registry.set_priority("acct1.json", PriorityUpdate::Set(8)).await.unwrap();

    h.registry.set_priority(" a1 ", PriorityUpdate::Clear).await.unwrap();

    assert_eq!(h.config.snapshot().auth_priority, None);
}

#[tokio::test]
async fn test_unknown_name_leaves_both_stores_unchanged() {
    let h = harness(vec![
        AuthEntry::new("a1").with_file_name("acct1.json").with_attribute("priority", "1"),
    ]);
    h.config.update(|doc| doc.set_auth_priority("acct1.json", 1));
    let store_before = h.store.list().await.unwrap();
    let config_before = h.config.snapshot();

    let result = h.registry.set_priority("missing.json", PriorityUpdate::Set(5)).await;

    assert!(matches!(result, Err(PriorityError::NotFound { name }) if name == "missing.json"));
    assert_eq!(h.store.list().await.unwrap(), store_before);
    assert_eq!(h.config.snapshot(), config_before);
    assert_eq!(h.persister.save_count(), 0);
}

#[tokio::test]
async fn test_every_successful_write_persists() {
    let h = harness(vec![AuthEntry::new("a1").with_file_name("acct1.json")]);

    h.registry.set_priority("acct1.json", PriorityUpdate::Set(1)).await.unwrap();
    h.registry.set_priority("acct1.json", PriorityUpdate::Set(2)).await.unwrap();

    assert_eq!(h.persister.save_count(), 2);
    assert_eq!(
        h.persister.last_saved().unwrap().auth_priority("acct1.json"),
        Some(2)
    );
}

#[tokio::test]
async fn test_persistence_failure_is_surfaced_after_in_memory_update() {
    let store = Arc::new(
        MemoryAuthStore::with_entries([AuthEntry::new("a1").with_file_name("acct1.json")]).unwrap(),
    );
    let config = ConfigHandle::new(
        GatewayConfig::default(),
        Arc::new(MemoryPersister::failing("read-only filesystem")),
    );
    let registry = PriorityRegistry::builder()
        .store(store.clone())
        .config(config.clone())
        .build();

    let result = registry.set_priority("acct1.json", PriorityUpdate::Set(6)).await;

    assert!(matches!(result, Err(PriorityError::Persistence { .. })));
    let entry = store.get("a1").await.unwrap().unwrap();
    assert_eq!(entry.priority_attribute(), Some("6"));
    assert_eq!(config.snapshot().auth_priority("acct1.json"), Some(6));
}

/// Store whose updates always fail
struct ReadOnlyStore {
    inner: MemoryAuthStore,
}

#[async_trait]
impl AuthStore for ReadOnlyStore {
    async fn list(&self) -> StoreResult<Vec<AuthEntry>> {
        self.inner.list().await
    }

    async fn get(&self, id: &str) -> StoreResult<Option<AuthEntry>> {
        self.inner.get(id).await
    }

    async fn update(&self, _entry: AuthEntry) -> StoreResult<AuthEntry> {
        Err(StoreError::Backend("store is read-only".into()))
    }
}

#[tokio::test]
async fn test_store_update_failure_aborts_mirror_and_persist() {
    let store = Arc::new(ReadOnlyStore {
        inner: MemoryAuthStore::with_entries([AuthEntry::new("a1").with_file_name("acct1.json")])
            .unwrap(),
    });
    let persister = Arc::new(MemoryPersister::new());
    let config = ConfigHandle::new(GatewayConfig::default(), persister.clone());
    let registry = PriorityRegistry::builder()
        .store(store)
        .config(config.clone())
        .build();

    let result = registry.set_priority("acct1.json", PriorityUpdate::Set(6)).await;

    assert!(matches!(
        result,
        Err(PriorityError::Store {
            source: StoreError::Backend(_)
        })
    ));
    assert_eq!(config.snapshot().auth_priority, None);
    assert_eq!(persister.save_count(), 0);
}

/// Store that forgets an entry between enumeration and lookup
struct VanishingStore {
    inner: MemoryAuthStore,
}

#[async_trait]
impl AuthStore for VanishingStore {
    async fn list(&self) -> StoreResult<Vec<AuthEntry>> {
        self.inner.list().await
    }

    async fn get(&self, _id: &str) -> StoreResult<Option<AuthEntry>> {
        Ok(None)
    }

    async fn update(&self, entry: AuthEntry) -> StoreResult<AuthEntry> {
        self.inner.update(entry).await
    }
}

#[tokio::test]
async fn test_entry_missing_on_fresh_fetch_is_not_found() {
    let store = Arc::new(VanishingStore {
        inner: MemoryAuthStore::with_entries([AuthEntry::new("a1").with_file_name("acct1.json")])
            .unwrap(),
    });
    let persister = Arc::new(MemoryPersister::new());
    let config = ConfigHandle::new(GatewayConfig::default(), persister.clone());
    let registry = PriorityRegistry::builder()
        .store(store)
        .config(config.clone())
        .build();

    let result = registry.set_priority("acct1.json", PriorityUpdate::Set(1)).await;

    assert!(matches!(result, Err(PriorityError::NotFound { .. })));
    assert_eq!(config.snapshot().auth_priority, None);
    assert_eq!(persister.save_count(), 0);
}

#[tokio::test]
async fn test_concurrent_writers_leave_stores_consistent() {
    let h = Arc::new(harness(vec![AuthEntry::new("a1").with_file_name("acct1.json")]));

    let mut tasks = Vec::new();
    for priority in 0..16_i64 {
        let h = h.clone();
        tasks.push(tokio::spawn(async move {
            h.registry
                .set_priority("acct1.json", PriorityUpdate::Set(priority))
                .await
                .unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let entry = h.store.get("a1").await.unwrap().unwrap();
    let mirrored = h.config.snapshot().auth_priority("acct1.json");
    assert_eq!(explicit_priority(&entry), mirrored);
    assert_eq!(h.persister.save_count(), 16);
}

#[tokio::test]
async fn test_patch_scenario_end_to_end() {
    let h = harness(vec![AuthEntry::new("a1").with_file_name("acct1.json")]);

    assert_eq!(
        h.registry.list_priorities().await.unwrap(),
        priorities(&[("acct1.json", 0)])
    );

    h.registry
        .set_priority("acct1.json", Some(5_i64))
        .await
        .unwrap();
    assert_eq!(
        h.registry.list_priorities().await.unwrap(),
        priorities(&[("acct1.json", 5)])
    );

    h.registry
        .set_priority("acct1.json", None::<i64>)
        .await
        .unwrap();
    assert_eq!(
        h.registry.list_priorities().await.unwrap(),
        priorities(&[("acct1.json", 0)])
    );
    let mirror = h.config.snapshot().auth_priority;
    assert!(mirror.is_none_or(|m| !m.contains_key("acct1.json")));
}
