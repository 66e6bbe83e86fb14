//! Application configuration loaded from environment variables.

use std::env;

/// Which backend holds the two persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Nothing survives a restart; every boot reseeds.
    Memory,
    /// One JSON file per slot under a data directory.
    File,
    #[cfg(feature = "redis")]
    Redis,
}

impl StorageBackend {
    /// Accepts `memory`, `file`, or `redis` in any case. Absent or
    /// unknown values mean `file`.
    fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "" | "file" => StorageBackend::File,
            "memory" => StorageBackend::Memory,
            #[cfg(feature = "redis")]
            "redis" => StorageBackend::Redis,
            other => {
                tracing::warn!(backend = %other, "Unknown storage backend, using file");
                StorageBackend::File
            }
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Port the chat socket listener binds beside the HTTP server.
    pub chat_port: u16,
    pub storage: StorageBackend,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            chat_port: env::var("CHAT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            storage: StorageBackend::parse(&env::var("STORAGE_BACKEND").unwrap_or_default()),
        }
    }
}
