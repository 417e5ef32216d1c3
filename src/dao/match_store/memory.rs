use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::{MatchStore, prepare_for_write};
use crate::{dao::storage::StorageResult, state::scoreboard::MatchState};

/// Match document held in memory; used by tests and embedded setups.
#[derive(Clone, Default)]
pub struct InMemoryMatchStore {
    doc: Arc<RwLock<MatchState>>,
}

impl InMemoryMatchStore {
    /// Store seeded with `initial` (not stamped until the first write).
    pub fn new(initial: MatchState) -> Self {
        Self {
            doc: Arc::new(RwLock::new(initial.repaired())),
        }
    }
}

impl MatchStore for InMemoryMatchStore {
    fn read(&self) -> BoxFuture<'static, StorageResult<MatchState>> {
        let doc = self.doc.clone();
        Box::pin(async move { Ok(doc.read().await.clone()) })
    }

    fn write(&self, next: MatchState) -> BoxFuture<'static, StorageResult<MatchState>> {
        let doc = self.doc.clone();
        Box::pin(async move {
            let next = prepare_for_write(next);
            *doc.write().await = next.clone();
            Ok(next)
        })
    }

    fn ensure_initialized(&self, _default: MatchState) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
