use std::sync::RwLock;

use crate::error::{StorageError, StorageResult};
use crate::store::{Objects, Storage};
use hbnb_core::Record;

/// In-memory storage for tests/dev.
///
/// `save` and `reload` have nothing durable to talk to and succeed trivially.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    objects: RwLock<Objects>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every record, or `LockPoisoned` where [`Storage::all`] would
    /// quietly return nothing.
    pub(crate) fn snapshot(&self) -> StorageResult<Objects> {
        let map = self.objects.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(map.clone())
    }

    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.objects.write();
                panic!("poisoning storage lock");
            })
            .join()
        });
    }

    /// Overwrite entries with `loaded`, keeping other keys.
    pub(crate) fn merge(&self, loaded: Objects) -> StorageResult<()> {
        let mut map = self.objects.write().map_err(|_| StorageError::LockPoisoned)?;
        map.extend(loaded);
        Ok(())
    }
}

impl Storage for InMemoryStorage {
    fn all(&self) -> Objects {
        match self.objects.read() {
            Ok(m) => m.clone(),
            Err(_) => Objects::new(),
        }
    }

    fn get(&self, key: &str) -> Option<Record> {
        let map = self.objects.read().ok()?;
        map.get(key).cloned()
    }

    fn insert(&self, key: String, record: Record) {
        if let Ok(mut map) = self.objects.write() {
            map.insert(key, record);
        }
    }

    fn remove(&self, key: &str) -> Option<Record> {
        let mut map = self.objects.write().ok()?;
        map.remove(key)
    }

    fn save(&self) -> StorageResult<()> {
        Ok(())
    }

    fn reload(&self) -> StorageResult<()> {
        Ok(())
    }
}
