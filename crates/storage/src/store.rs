use std::collections::BTreeMap;
use std::sync::Arc;

use hbnb_core::{EntityId, Model, Record, storage_key};
use hbnb_models::AnyModel;

use crate::error::{StorageError, StorageResult};

/// Records keyed by `"<TypeName>.<id>"`.
pub type Objects = BTreeMap<String, Record>;

/// Keeper of model records.
///
/// Implementations hold records in memory; [`Storage::save`] makes them
/// durable and [`Storage::reload`] reads durable records back in.
pub trait Storage: Send + Sync {
    fn all(&self) -> Objects;
    fn get(&self, key: &str) -> Option<Record>;
    fn insert(&self, key: String, record: Record);
    fn remove(&self, key: &str) -> Option<Record>;

    /// Write every record to the durable store.
    fn save(&self) -> StorageResult<()>;

    /// Load durable records, overwriting in-memory entries with the same key.
    ///
    /// All-or-nothing: one bad record leaves memory untouched.
    fn reload(&self) -> StorageResult<()>;

    /// File `model`'s current record under its key.
    fn register<M: Model>(&self, model: &M)
    where
        Self: Sized,
    {
        self.insert(model.storage_key(), model.to_record());
    }

    fn find<M: Model>(&self, id: &EntityId) -> StorageResult<Option<M>>
    where
        Self: Sized,
    {
        let key = storage_key(M::KIND, id);
        self.get(&key)
            .map(|record| M::from_record(record).map_err(|e| StorageError::record(&key, e)))
            .transpose()
    }

    /// Every stored record rebuilt into its concrete type.
    fn models(&self) -> StorageResult<Vec<AnyModel>> {
        self.all()
            .into_iter()
            .map(|(key, record)| {
                AnyModel::from_record(record).map_err(|e| StorageError::record(key, e))
            })
            .collect()
    }
}

impl<S> Storage for Arc<S>
where
    S: Storage + ?Sized,
{
    fn all(&self) -> Objects {
        (**self).all()
    }

    fn get(&self, key: &str) -> Option<Record> {
        (**self).get(key)
    }

    fn insert(&self, key: String, record: Record) {
        (**self).insert(key, record)
    }

    fn remove(&self, key: &str) -> Option<Record> {
        (**self).remove(key)
    }

    fn save(&self) -> StorageResult<()> {
        (**self).save()
    }

    fn reload(&self) -> StorageResult<()> {
        (**self).reload()
    }
}

/// Save a model: bump `updated_at`, file its record, flush the storage.
///
/// If the flush fails the storage gets its previous record for the key back,
/// so memory keeps matching the durable copy. The model itself keeps the
/// bumped `updated_at`.
pub fn save_model<M, S>(model: &mut M, storage: &S) -> StorageResult<()>
where
    M: Model,
    S: Storage + ?Sized,
{
    model.save();
    let key = model.storage_key();
    tracing::debug!(%key, "saving model");
    let previous = storage.get(&key);
    storage.insert(key.clone(), model.to_record());

    if let Err(e) = storage.save() {
        tracing::warn!(%key, error = %e, "save failed; restoring previous record");
        match previous {
            Some(record) => storage.insert(key, record),
            None => {
                storage.remove(&key);
            }
        }
        return Err(e);
    }
    Ok(())
}

/// Check that every record rebuilds and sits under its own key.
pub(crate) fn validate(objects: &Objects) -> StorageResult<()> {
    for (key, record) in objects {
        let model =
            AnyModel::from_record(record.clone()).map_err(|e| StorageError::record(key, e))?;
        let expected = model.storage_key();
        if *key != expected {
            return Err(StorageError::KeyMismatch {
                key: key.clone(),
                expected,
            });
        }
    }
    Ok(())
}
