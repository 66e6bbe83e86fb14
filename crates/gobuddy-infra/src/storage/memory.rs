//! In-memory storage - used for tests and as the last-resort fallback
//! when no durable backend is usable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gobuddy_core::ports::{KeyValueStore, KvError};

/// HashMap behind an async RwLock. Data vanishes on process restart;
/// the stores reseed themselves on the next open.
pub struct InMemoryKvStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.slots.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        self.slots.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> bool {
        self.slots.read().await.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get() {
        let store = InMemoryKvStore::new();
        store.set("gobuddy_auth", "true").await.unwrap();
        assert_eq!(store.get("gobuddy_auth").await, Some("true".to_string()));
        assert!(store.exists("gobuddy_auth").await);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = InMemoryKvStore::new();
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await, None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = InMemoryKvStore::new();
        store.set("k", "one").await.unwrap();
        store.set("k", "two").await.unwrap();
        assert_eq!(store.get("k").await, Some("two".to_string()));
    }
}
