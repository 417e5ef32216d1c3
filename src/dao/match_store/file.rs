use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use futures::future::BoxFuture;
use tokio::fs;
use tracing::{debug, info};

use super::{MatchStore, prepare_for_write};
use crate::{
    dao::storage::{StorageError, StorageResult},
    state::scoreboard::MatchState,
};

/// Match document kept as pretty-printed JSON in a single file.
#[derive(Clone)]
pub struct FileMatchStore {
    path: Arc<PathBuf>,
}

impl FileMatchStore {
    /// Store backed by the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Location of the document on disk.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

async fn read_document(path: &PathBuf) -> StorageResult<MatchState> {
    let bytes = fs::read(path)
        .await
        .map_err(|source| StorageError::io(path, source))?;
    let doc = serde_json::from_slice::<MatchState>(&bytes)
        .map_err(|source| StorageError::malformed(path, source))?;
    Ok(doc.repaired())
}

/// Write through a sibling temp file so readers never observe a truncated document.
async fn write_document(path: &PathBuf, doc: &MatchState) -> StorageResult<()> {
    let mut bytes =
        serde_json::to_vec_pretty(doc).map_err(|source| StorageError::Encode { source })?;
    bytes.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &bytes)
        .await
        .map_err(|source| StorageError::io(&tmp, source))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|source| StorageError::io(path, source))
}

impl MatchStore for FileMatchStore {
    fn read(&self) -> BoxFuture<'static, StorageResult<MatchState>> {
        let path = self.path.clone();
        Box::pin(async move { read_document(&path).await })
    }

    fn write(&self, doc: MatchState) -> BoxFuture<'static, StorageResult<MatchState>> {
        let path = self.path.clone();
        Box::pin(async move {
            let doc = prepare_for_write(doc);
            write_document(&path, &doc).await?;
            debug!(path = %path.display(), updated_at = %doc.updated_at, "match document written");
            Ok(doc)
        })
    }

    fn ensure_initialized(&self, default: MatchState) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StorageError::io(parent, source))?;
            }

            match fs::metadata(path.as_path()).await {
                Ok(_) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    write_document(&path, &prepare_for_write(default)).await?;
                    info!(path = %path.display(), "created default match document");
                    Ok(())
                }
                Err(source) => Err(StorageError::io(&path, source)),
            }
        })
    }
}
