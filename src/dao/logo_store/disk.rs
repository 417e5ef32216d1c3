use std::{
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use futures::future::BoxFuture;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use super::LogoStore;
use crate::dao::storage::{StorageError, StorageResult};

/// Logos stored as individual files in one directory.
#[derive(Clone)]
pub struct DiskLogoStore {
    dir: Arc<PathBuf>,
    url_prefix: Arc<str>,
}

impl DiskLogoStore {
    /// Store files under `dir`, served back as `<url_prefix>/<file name>`.
    pub fn new(dir: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            dir: Arc::new(dir.into()),
            url_prefix: Arc::from(url_prefix.trim_end_matches('/')),
        }
    }
}

/// `<unix millis>-<random>.<ext>`, unique per upload.
fn unique_file_name(extension: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("{millis}-{}.{extension}", Uuid::new_v4().simple())
}

impl LogoStore for DiskLogoStore {
    fn ensure_initialized(&self) -> BoxFuture<'static, StorageResult<()>> {
        let dir = self.dir.clone();
        Box::pin(async move {
            fs::create_dir_all(dir.as_path())
                .await
                .map_err(|source| StorageError::io(&dir, source))
        })
    }

    fn save(&self, extension: String, bytes: Vec<u8>) -> BoxFuture<'static, StorageResult<String>> {
        let dir = self.dir.clone();
        let url_prefix = self.url_prefix.clone();
        Box::pin(async move {
            fs::create_dir_all(dir.as_path())
                .await
                .map_err(|source| StorageError::io(&dir, source))?;

            let name = unique_file_name(&extension);
            let path = dir.join(&name);
            fs::write(&path, &bytes)
                .await
                .map_err(|source| StorageError::io(&path, source))?;

            debug!(path = %path.display(), size = bytes.len(), "stored logo");
            Ok(format!("{url_prefix}/{name}"))
        })
    }

    fn clear(&self) -> BoxFuture<'static, usize> {
        let dir = self.dir.clone();
        Box::pin(async move {
            let mut entries = match fs::read_dir(dir.as_path()).await {
                Ok(entries) => entries,
                Err(err) => {
                    debug!(dir = %dir.display(), error = %err, "logo directory not readable; nothing to clear");
                    return 0;
                }
            };

            let mut removed = 0;
            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(err) => {
                        warn!(dir = %dir.display(), error = %err, "failed to list logo directory");
                        break;
                    }
                };

                let path = entry.path();
                match fs::remove_file(&path).await {
                    Ok(()) => removed += 1,
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "failed to delete logo; skipping")
                    }
                }
            }
            removed
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn save_returns_prefixed_url() {
        let dir = TempDir::new().unwrap();
        let store = DiskLogoStore::new(dir.path(), "/logos/");

        let url = store.save("png".into(), vec![1, 2, 3]).await.unwrap();

        let name = url.strip_prefix("/logos/").unwrap();
        assert!(name.ends_with(".png"));
        assert_eq!(std::fs::read(dir.path().join(name)).unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn names_are_unique() {
        let dir = TempDir::new().unwrap();
        let store = DiskLogoStore::new(dir.path(), "/logos");

        let first = store.save("jpg".into(), vec![0]).await.unwrap();
        let second = store.save("jpg".into(), vec![0]).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn clear_removes_files_and_skips_failures() {
        let dir = TempDir::new().unwrap();
        let store = DiskLogoStore::new(dir.path(), "/logos");
        store.save("png".into(), vec![0]).await.unwrap();
        store.save("webp".into(), vec![0]).await.unwrap();
        // Directories cannot be removed with remove_file; the failure is swallowed.
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let removed = store.clear().await;

        assert_eq!(removed, 2);
        let left: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(left.len(), 1);
    }

    #[tokio::test]
    async fn clear_on_missing_directory_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = DiskLogoStore::new(dir.path().join("absent"), "/logos");
        assert_eq!(store.clear().await, 0);
    }
}
