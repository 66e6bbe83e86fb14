//! Redis slot storage.
//!
//! Slot keys map straight to Redis keys holding plain string values
//! with no expiry. A [`ConnectionManager`] reconnects on its own, so a
//! Redis restart costs a few failed operations, not a dead store.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use gobuddy_core::ports::{KeyValueStore, KvError};

/// Connection settings for [`RedisKvStore`].
#[derive(Debug, Clone)]
pub struct RedisKvStoreConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Upper bound on the initial handshake.
    pub connect_timeout: Duration,
}

impl Default for RedisKvStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisKvStoreConfig {
    /// Reads `REDIS_URL` and `REDIS_CONNECT_TIMEOUT_SECS`, defaulting
    /// the rest.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            connect_timeout: std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
        }
    }
}

/// Redis-backed slot storage.
pub struct RedisKvStore {
    conn: ConnectionManager,
}

impl RedisKvStore {
    pub async fn new(config: RedisKvStoreConfig) -> Result<Self, KvError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| KvError::Connection(e.to_string()))?;

        // the handshake is bounded so an unreachable server cannot
        // hang startup
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| KvError::Connection("Connection timed out".to_string()))?
            .map_err(|e| KvError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Redis slot storage ready");

        Ok(Self { conn })
    }

    pub async fn from_env() -> Result<Self, KvError> {
        Self::new(RedisKvStoreConfig::from_env()).await
    }

    /// Clones share the manager's multiplexed connection; each call
    /// site takes its own handle because commands need `&mut`.
    fn handle(&self) -> ConnectionManager {
        self.conn.clone()
    }
}

#[async_trait]
impl KeyValueStore for RedisKvStore {
    async fn get(&self, key: &str) -> Option<String> {
        match self.handle().get::<_, Option<String>>(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Redis read failed, treating slot as absent");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.handle()
            .set::<_, _, ()>(key, value)
            .await
            .map_err(|e| KvError::Operation(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        self.handle()
            .del::<_, ()>(key)
            .await
            .map_err(|e| KvError::Operation(e.to_string()))
    }

    async fn exists(&self, key: &str) -> bool {
        self.handle().exists::<_, bool>(key).await.unwrap_or(false)
    }
}
