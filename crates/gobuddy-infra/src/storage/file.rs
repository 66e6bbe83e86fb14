//! File-backed storage - one file per slot under a data directory.
//!
//! This is the default durable backend: it needs nothing but a writable
//! directory, the server-side stand-in for the local storage the clients
//! persisted into.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use gobuddy_core::ports::{KeyValueStore, KvError};

const DEFAULT_DATA_DIR: &str = "./data";

/// Key-value store that writes each slot to `<data_dir>/<key>.json`.
///
/// Writes go through a sibling temp file and a rename, so a crash
/// mid-write leaves the previous value intact rather than a torn file.
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, KvError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| KvError::Connection(format!("{}: {e}", root.display())))?;

        tracing::info!(dir = %root.display(), "Opened file storage");
        Ok(Self { root })
    }

    /// Open at the directory named by `GOBUDDY_DATA_DIR` (default
    /// `./data`).
    pub async fn from_env() -> Result<Self, KvError> {
        let root =
            std::env::var("GOBUDDY_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::open(root).await
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        // Keys are fixed strings today, but never trust them as paths.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Slot read failed");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)
            .await
            .map_err(|e| KvError::Operation(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| KvError::Operation(format!("rename {}: {e}", path.display())))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        let path = self.slot_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::Operation(format!("remove {}: {e}", path.display()))),
        }
    }

    async fn exists(&self, key: &str) -> bool {
        fs::metadata(self.slot_path(key)).await.is_ok()
    }
}
