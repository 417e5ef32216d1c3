use std::{io, path::Path};

use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by the match document and logo stores.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading, writing or listing a file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The persisted match document is not valid JSON for a match.
    #[error("match document `{path}` is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The match document could not be serialized.
    #[error("failed to encode match document: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Wrap an I/O failure on `path`.
    pub fn io(path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Wrap a decoding failure of the document stored at `path`.
    pub fn malformed(path: &Path, source: serde_json::Error) -> Self {
        StorageError::Malformed {
            path: path.display().to_string(),
            source,
        }
    }
}
