mod disk;

pub use disk::DiskLogoStore;

use futures::future::BoxFuture;

use crate::dao::storage::StorageResult;

/// Persistence of uploaded team logos.
///
/// Files are only ever referenced through the URL returned by [`LogoStore::save`].
pub trait LogoStore: Send + Sync {
    /// Make sure the backing location exists.
    fn ensure_initialized(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Persist an already validated image and return the URL it is served from.
    fn save(&self, extension: String, bytes: Vec<u8>) -> BoxFuture<'static, StorageResult<String>>;
    /// Delete every stored logo, best-effort. Returns how many files were removed;
    /// individual failures are logged and skipped.
    fn clear(&self) -> BoxFuture<'static, usize>;
}
