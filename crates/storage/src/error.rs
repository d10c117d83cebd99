//! Storage error model.

use std::path::PathBuf;

use hbnb_core::ModelError;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored record could not be rebuilt into a model.
    #[error("invalid record `{key}`: {source}")]
    Record {
        key: String,
        #[source]
        source: ModelError,
    },

    /// A record is filed under a key other than `"<TypeName>.<id>"` of its contents.
    #[error("record stored under `{key}` belongs under `{expected}`")]
    KeyMismatch { key: String, expected: String },

    #[error("storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn record(key: impl Into<String>, source: ModelError) -> Self {
        Self::Record {
            key: key.into(),
            source,
        }
    }
}
