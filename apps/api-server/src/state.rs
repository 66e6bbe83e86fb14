//! Application state - shared across all handlers.

use std::sync::Arc;

use gobuddy_core::assist::AssistService;
use gobuddy_core::composer::PostComposer;
use gobuddy_core::ports::{ContentAssist, KeyValueStore, Locator};
use gobuddy_core::seed;
use gobuddy_core::store::{PostStore, SessionStore};
use gobuddy_infra::{FileKvStore, FixedLocator, InMemoryKvStore};

#[cfg(feature = "redis")]
use gobuddy_infra::RedisKvStore;
#[cfg(feature = "remote-assist")]
use gobuddy_infra::{RemoteAssistConfig, RemoteContentAssist};

use crate::config::{AppConfig, StorageBackend};

/// Shared application state.
///
/// Both stores sit on the same key-value backend; the composer and the
/// map share one locator.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
    pub session: Arc<SessionStore>,
    pub composer: Arc<PostComposer>,
    pub assist: Arc<AssistService>,
    pub locator: Arc<dyn Locator>,
}

impl AppState {
    /// Build the application state with the configured backends.
    pub async fn new(config: &AppConfig) -> Self {
        let kv = Self::open_storage(config).await;
        let locator: Arc<dyn Locator> = Arc::new(FixedLocator::from_env());

        let posts = Arc::new(PostStore::open(kv.clone()).await);
        // one flush at boot, so a fresh backend holds the seed
        posts.persist().await;

        let session = Arc::new(SessionStore::open(kv).await);
        let composer = Arc::new(PostComposer::new(
            posts.clone(),
            locator.clone(),
            seed::demo_user(),
        ));
        let assist = Arc::new(AssistService::new(Self::open_assist()));

        tracing::info!(
            posts = posts.len().await,
            remote_assist = assist.has_remote(),
            "Application state initialized"
        );

        Self {
            posts,
            session,
            composer,
            assist,
            locator,
        }
    }

    /// Open the configured key-value backend. A backend that cannot be
    /// reached degrades to in-memory storage rather than aborting startup.
    async fn open_storage(config: &AppConfig) -> Arc<dyn KeyValueStore> {
        match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage (state is lost on restart)");
                Arc::new(InMemoryKvStore::new())
            }
            StorageBackend::File => match FileKvStore::from_env().await {
                Ok(store) => {
                    tracing::info!(root = %store.root().display(), "Using file storage");
                    Arc::new(store)
                }
                Err(e) => {
                    tracing::error!(error = %e, "File storage unavailable, using in-memory fallback");
                    Arc::new(InMemoryKvStore::new())
                }
            },
            #[cfg(feature = "redis")]
            StorageBackend::Redis => match RedisKvStore::from_env().await {
                Ok(store) => {
                    tracing::info!("Using Redis storage");
                    Arc::new(store)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Redis unavailable, using in-memory fallback");
                    Arc::new(InMemoryKvStore::new())
                }
            },
        }
    }

    #[cfg(feature = "remote-assist")]
    fn open_assist() -> Option<Arc<dyn ContentAssist>> {
        let Some(config) = RemoteAssistConfig::from_env() else {
            tracing::info!("ASSIST_ENDPOINT not set, content assist uses the local rewrite");
            return None;
        };

        match RemoteContentAssist::new(config) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!(error = %e, "Assist client failed to start, using local rewrite");
                None
            }
        }
    }

    #[cfg(not(feature = "remote-assist"))]
    fn open_assist() -> Option<Arc<dyn ContentAssist>> {
        tracing::info!("Built without remote-assist, content assist uses the local rewrite");
        None
    }

    /// State over throwaway in-memory storage, for handler tests.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let kv: Arc<dyn KeyValueStore> = Arc::new(InMemoryKvStore::new());
        let locator: Arc<dyn Locator> = Arc::new(FixedLocator::default());

        let posts = Arc::new(PostStore::open(kv.clone()).await);
        let session = Arc::new(SessionStore::open(kv).await);
        let composer = Arc::new(PostComposer::new(
            posts.clone(),
            locator.clone(),
            seed::demo_user(),
        ));
        let assist = Arc::new(AssistService::new(None));

        Self {
            posts,
            session,
            composer,
            assist,
            locator,
        }
    }
}
