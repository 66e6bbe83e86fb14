//! # GoBuddy Infrastructure
//!
//! Concrete implementations of the ports defined in `gobuddy-core`:
//! storage backends for the two persisted slots, the remote content
//! assist client, and the locator.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory and file storage only
//! - `redis` - Redis-backed key-value storage
//! - `remote-assist` - HTTP client for the content-assist backend

pub mod geo;
pub mod storage;

#[cfg(feature = "remote-assist")]
pub mod assist;

// Re-exports - always available
pub use geo::FixedLocator;
pub use storage::{FileKvStore, InMemoryKvStore};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use storage::{RedisKvStore, RedisKvStoreConfig};

// Re-exports - remote assist
#[cfg(feature = "remote-assist")]
pub use assist::{RemoteAssistConfig, RemoteContentAssist};
