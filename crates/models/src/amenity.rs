//! Amenity: something a place offers (wifi, pool, ...).

use hbnb_core::{BaseModel, Model, ModelKind, ModelResult, Record, RecordFields};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    base: BaseModel,
    name: String,
}

impl Amenity {
    pub fn new() -> Self {
        Self {
            base: BaseModel::new(),
            name: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Default for Amenity {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Amenity {
    const KIND: ModelKind = ModelKind::Amenity;
    const FIELDS: &'static [&'static str] = &["name"];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn schema_fields(&self) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), Value::String(self.name.clone()));
        record
    }

    fn from_record(record: Record) -> ModelResult<Self> {
        let mut fields = RecordFields::open(record, Self::KIND)?;
        let name = fields.take_string("name")?.unwrap_or_default();
        Ok(Self {
            base: BaseModel::from_fields(fields)?,
            name,
        })
    }
}
