//! Model trait: the contract every concrete type shares.

use serde_json::Value;

use crate::base_model::BaseModel;
use crate::error::{ModelError, ModelResult};
use crate::id::EntityId;
use crate::kind::ModelKind;
use crate::record::{CLASS_KEY, CREATED_AT_KEY, ID_KEY, RESERVED_KEYS, Record, UPDATED_AT_KEY};
use crate::timestamp::{self, Timestamp};

/// Storage key of a model: `"<TypeName>.<id>"`.
pub fn storage_key(kind: ModelKind, id: &EntityId) -> String {
    format!("{kind}.{id}")
}

/// A concrete model type: a [`BaseModel`] plus a fixed schema.
///
/// Implementors supply the schema (`FIELDS`, [`Model::schema_fields`]) and a
/// typed [`Model::from_record`] factory; identity, timestamps, open
/// attributes, record rendering and `Display` text are shared.
pub trait Model: Sized {
    /// Discriminator written under `__class__`.
    const KIND: ModelKind;

    /// Schema field names, in record order.
    const FIELDS: &'static [&'static str];

    fn base(&self) -> &BaseModel;

    fn base_mut(&mut self) -> &mut BaseModel;

    /// Schema fields as JSON values, keyed as in `FIELDS`.
    fn schema_fields(&self) -> Record;

    /// Rebuild a model from a record produced by [`Model::to_record`].
    ///
    /// Identity and timestamps are restored, not regenerated. Unknown keys
    /// become open attributes; a `__class__` naming another type is rejected.
    fn from_record(record: Record) -> ModelResult<Self>;

    fn id(&self) -> &EntityId {
        self.base().id()
    }

    fn created_at(&self) -> Timestamp {
        self.base().created_at()
    }

    fn updated_at(&self) -> Timestamp {
        self.base().updated_at()
    }

    fn storage_key(&self) -> String {
        storage_key(Self::KIND, self.id())
    }

    /// Bump `updated_at`. Durable writes are the storage layer's job.
    fn save(&mut self) {
        self.base_mut().save();
    }

    fn attr(&self, name: &str) -> Option<&Value> {
        self.base().attributes().get(name)
    }

    /// Set an open attribute.
    ///
    /// Base keys and schema field names are rejected; schema fields have
    /// typed setters on the concrete type.
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) -> ModelResult<()> {
        let name = name.into();
        if RESERVED_KEYS.contains(&name.as_str()) || Self::FIELDS.contains(&name.as_str()) {
            return Err(ModelError::validation(format!(
                "`{name}` is not an open attribute of {}",
                Self::KIND
            )));
        }
        self.base_mut().attributes_mut().insert(name, value.into());
        Ok(())
    }

    fn remove_attr(&mut self, name: &str) -> Option<Value> {
        self.base_mut().attributes_mut().shift_remove(name)
    }

    /// Every field by name, timestamps as ISO-8601 text, plus `__class__`.
    fn to_record(&self) -> Record {
        let base = self.base();
        let mut record = Record::new();
        record.insert(ID_KEY.to_string(), Value::String(base.id().to_string()));
        record.insert(
            CREATED_AT_KEY.to_string(),
            Value::String(timestamp::to_iso(&base.created_at())),
        );
        record.insert(
            UPDATED_AT_KEY.to_string(),
            Value::String(timestamp::to_iso(&base.updated_at())),
        );
        record.extend(self.schema_fields());
        record.extend(
            base.attributes()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        record.insert(CLASS_KEY.to_string(), Value::String(Self::KIND.as_str().to_string()));
        record
    }

    /// Diagnostic text: `[<TypeName>] (<id>) {<fields>}`.
    ///
    /// Timestamps appear in native form, not the ISO text used in records.
    fn render(&self) -> String {
        let base = self.base();
        let mut parts = vec![
            format!("\"{ID_KEY}\": \"{}\"", base.id()),
            format!(
                "\"{CREATED_AT_KEY}\": {}",
                timestamp::to_native(&base.created_at())
            ),
            format!(
                "\"{UPDATED_AT_KEY}\": {}",
                timestamp::to_native(&base.updated_at())
            ),
        ];
        parts.extend(
            self.schema_fields()
                .iter()
                .chain(base.attributes())
                .map(|(k, v)| format!("{}: {v}", Value::String(k.clone()))),
        );
        format!("[{}] ({}) {{{}}}", Self::KIND, base.id(), parts.join(", "))
    }
}
