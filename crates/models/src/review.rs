use hbnb_core::{BaseModel, Model, ModelKind, ModelResult, Record, RecordFields};
use serde_json::Value;

/// A user's review of a place.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    base: BaseModel,
    place_id: String,
    user_id: String,
    text: String,
}

impl Review {
    pub fn new() -> Self {
        Self {
            base: BaseModel::new(),
            place_id: String::new(),
            user_id: String::new(),
            text: String::new(),
        }
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn set_place_id(&mut self, place_id: impl Into<String>) {
        self.place_id = place_id.into();
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = user_id.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Default for Review {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Review {
    const KIND: ModelKind = ModelKind::Review;
    const FIELDS: &'static [&'static str] = &["place_id", "user_id", "text"];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn schema_fields(&self) -> Record {
        let mut record = Record::new();
        record.insert("place_id".into(), Value::String(self.place_id.clone()));
        record.insert("user_id".into(), Value::String(self.user_id.clone()));
        record.insert("text".into(), Value::String(self.text.clone()));
        record
    }

    fn from_record(record: Record) -> ModelResult<Self> {
        let mut fields = RecordFields::open(record, Self::KIND)?;
        let place_id = fields.take_string("place_id")?.unwrap_or_default();
        let user_id = fields.take_string("user_id")?.unwrap_or_default();
        let text = fields.take_string("text")?.unwrap_or_default();
        Ok(Self {
            base: BaseModel::from_fields(fields)?,
            place_id,
            user_id,
            text,
        })
    }
}
