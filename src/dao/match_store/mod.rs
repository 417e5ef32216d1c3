mod file;
mod memory;

pub use file::FileMatchStore;
pub use memory::InMemoryMatchStore;

use std::time::SystemTime;

use futures::future::BoxFuture;

use crate::{dao::storage::StorageResult, state::scoreboard::MatchState};

/// Persistence of the single match document.
///
/// `write` replaces the whole document; callers read, transform and hand back the
/// complete value. Neither operation retries on failure.
pub trait MatchStore: Send + Sync {
    /// Load the current document, repaired to a consistent shape.
    fn read(&self) -> BoxFuture<'static, StorageResult<MatchState>>;
    /// Stamp `updatedAt`, persist the document and return what was stored.
    fn write(&self, doc: MatchState) -> BoxFuture<'static, StorageResult<MatchState>>;
    /// Persist `default` when no document exists yet; an existing one is left untouched.
    fn ensure_initialized(&self, default: MatchState) -> BoxFuture<'static, StorageResult<()>>;
}

/// Prepare a document for persistence: repaired and stamped with the current time.
fn prepare_for_write(doc: MatchState) -> MatchState {
    let mut doc = doc.repaired();
    doc.stamp(SystemTime::now());
    doc
}
