//! Key-value storage backends for the two persisted slots.

mod file;
mod memory;

pub use file::FileKvStore;
pub use memory::InMemoryKvStore;

#[cfg(feature = "redis")]
mod redis;

#[cfg(feature = "redis")]
pub use redis::{RedisKvStore, RedisKvStoreConfig};
