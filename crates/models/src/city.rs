use hbnb_core::{BaseModel, Model, ModelKind, ModelResult, Record, RecordFields};
use serde_json::Value;

/// A city, belonging to a [`State`](crate::State) by id.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    base: BaseModel,
    state_id: String,
    name: String,
}

impl City {
    pub fn new() -> Self {
        Self {
            base: BaseModel::new(),
            state_id: String::new(),
            name: String::new(),
        }
    }

    pub fn state_id(&self) -> &str {
        &self.state_id
    }

    pub fn set_state_id(&mut self, state_id: impl Into<String>) {
        self.state_id = state_id.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Default for City {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for City {
    const KIND: ModelKind = ModelKind::City;
    const FIELDS: &'static [&'static str] = &["state_id", "name"];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn schema_fields(&self) -> Record {
        let mut record = Record::new();
        record.insert("state_id".into(), Value::String(self.state_id.clone()));
        record.insert("name".into(), Value::String(self.name.clone()));
        record
    }

    fn from_record(record: Record) -> ModelResult<Self> {
        let mut fields = RecordFields::open(record, Self::KIND)?;
        let state_id = fields.take_string("state_id")?.unwrap_or_default();
        let name = fields.take_string("name")?.unwrap_or_default();
        Ok(Self {
            base: BaseModel::from_fields(fields)?,
            state_id,
            name,
        })
    }
}
