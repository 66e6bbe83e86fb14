//! Post store - the single source of truth for the activity collection.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::Post;
use crate::ports::KeyValueStore;
use crate::seed;

/// Storage slot holding the serialized post collection.
pub const POSTS_KEY: &str = "gobuddy_posts";

/// Owns the post collection, newest first.
///
/// The in-memory list is authoritative; the KV slot is a write-through
/// mirror of it. A slot that is missing or unreadable at open time is
/// replaced by the seed collection rather than reported as an error.
/// Write-throughs are serialized, so the mirrored blob never steps back
/// to an older snapshot.
pub struct PostStore {
    kv: Arc<dyn KeyValueStore>,
    posts: RwLock<Vec<Post>>,
    flush: Mutex<()>,
}

impl PostStore {
    /// Open the store over a storage backend, loading the persisted
    /// collection or falling back to the demo seed.
    pub async fn open(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::open_with(kv, seed::demo_posts()).await
    }

    /// Open with a caller-provided fallback collection.
    pub async fn open_with(kv: Arc<dyn KeyValueStore>, fallback: Vec<Post>) -> Self {
        let posts = match kv.get(POSTS_KEY).await {
            Some(blob) => match serde_json::from_str::<Vec<Post>>(&blob) {
                Ok(posts) => {
                    tracing::debug!(count = posts.len(), "Loaded persisted posts");
                    posts
                }
                Err(e) => {
                    tracing::warn!(key = POSTS_KEY, error = %e, "Stored posts unreadable, using seed data");
                    fallback
                }
            },
            None => {
                tracing::debug!(key = POSTS_KEY, "No persisted posts, using seed data");
                fallback
            }
        };

        Self {
            kv,
            posts: RwLock::new(posts),
            flush: Mutex::new(()),
        }
    }

    /// Snapshot of the whole collection, newest first.
    pub async fn all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    pub async fn find(&self, id: &str) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Prepend a post and mirror the new collection to storage.
    /// Returns the updated snapshot.
    pub async fn append(&self, post: Post) -> Vec<Post> {
        // the guard spans snapshot and write: a concurrent append cannot
        // flush an older snapshot over a newer one
        let _flush = self.flush.lock().await;
        let snapshot = {
            let mut posts = self.posts.write().await;
            posts.insert(0, post);
            posts.clone()
        };
        self.write_through(&snapshot).await;
        snapshot
    }

    /// Serialize the current collection into its slot.
    pub async fn persist(&self) {
        let _flush = self.flush.lock().await;
        let snapshot = self.all().await;
        self.write_through(&snapshot).await;
    }

    /// Write failures are logged and swallowed: memory stays authoritative
    /// and the next successful write reconciles the slot.
    async fn write_through(&self, posts: &[Post]) {
        let blob = match serde_json::to_string(posts) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!(key = POSTS_KEY, error = %e, "Failed to serialize posts");
                return;
            }
        };

        if let Err(e) = self.kv.set(POSTS_KEY, &blob).await {
            tracing::error!(key = POSTS_KEY, error = %e, "Failed to persist posts, keeping in-memory state");
        }
    }
}
