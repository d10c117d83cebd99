//! Storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`StorageConfig::path`].
pub const STORAGE_PATH_ENV: &str = "HBNB_STORAGE_PATH";

/// Default JSON file, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "file.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding every record.
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read `HBNB_STORAGE_PATH`, falling back to `file.json`.
    pub fn from_env() -> Self {
        match std::env::var(STORAGE_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_file_json() {
        assert_eq!(StorageConfig::default().path, PathBuf::from("file.json"));
    }

    #[test]
    fn deserializes_from_json() {
        let config: StorageConfig = serde_json::from_str(r#"{"path": "/tmp/hbnb.json"}"#).unwrap();
        assert_eq!(config, StorageConfig::new("/tmp/hbnb.json"));
    }
}
