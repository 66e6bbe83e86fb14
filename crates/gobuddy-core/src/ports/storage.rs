use async_trait::async_trait;

/// Key-value storage trait - abstraction over the persisted slots
/// (in-memory, file-backed, Redis).
///
/// The whole app persists through two slots, so the surface is
/// deliberately small: plain string values, no expiry.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored at a key. Backends report read trouble as
    /// `None`; callers fall back to their seed data.
    async fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KvError>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> bool;
}

/// Failures a storage backend can report.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Storage backend unreachable: {0}")]
    Connection(String),

    #[error("Value encoding failed: {0}")]
    Serialization(String),

    #[error("Storage operation failed: {0}")]
    Operation(String),
}
