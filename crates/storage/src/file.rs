//! JSON file storage.
//!
//! The file holds one JSON object mapping `"<TypeName>.<id>"` to the record
//! of that model, exactly as [`Model::to_record`](hbnb_core::Model::to_record)
//! renders it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};
use crate::in_memory::InMemoryStorage;
use crate::store::{Objects, Storage, validate};
use hbnb_core::Record;

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    objects: InMemoryStorage,
}

impl FileStorage {
    /// Storage backed by `path`. Nothing is read until [`Storage::reload`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            objects: InMemoryStorage::new(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.path.clone())
    }

    /// Open `path` and load whatever it already holds.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let storage = Self::new(path);
        storage.reload()?;
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> StorageResult<Option<Objects>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(Some(Objects::new()));
        }
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::json(&self.path, e))
    }
}

impl Storage for FileStorage {
    fn all(&self) -> Objects {
        self.objects.all()
    }

    fn get(&self, key: &str) -> Option<Record> {
        self.objects.get(key)
    }

    fn insert(&self, key: String, record: Record) {
        self.objects.insert(key, record)
    }

    fn remove(&self, key: &str) -> Option<Record> {
        self.objects.remove(key)
    }

    fn save(&self) -> StorageResult<()> {
        let objects = self.objects.snapshot()?;
        let json = serde_json::to_string(&objects).map_err(|e| StorageError::json(&self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = objects.len(), "storage flushed");
        Ok(())
    }

    fn reload(&self) -> StorageResult<()> {
        let Some(loaded) = self.read_file()? else {
            warn!(path = %self.path.display(), "storage file not found; nothing to reload");
            return Ok(());
        };

        validate(&loaded)?;
        let count = loaded.len();
        self.objects.merge(loaded)?;

        info!(path = %self.path.display(), count, "storage reloaded");
        Ok(())
    }
}
