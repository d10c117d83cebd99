use hbnb_core::{BaseModel, Model, ModelKind, ModelResult, Record, RecordFields};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    base: BaseModel,
    name: String,
}

impl State {
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

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for State {
    const KIND: ModelKind = ModelKind::State;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_defaults_to_empty_when_absent() {
        let mut record = State::new().to_record();
        record.shift_remove("name");
        let state = State::from_record(record).unwrap();
        assert_eq!(state.name(), "");
    }

    #[test]
    fn round_trip() {
        let mut state = State::new();
        state.set_name("California");
        state.save();
        assert_eq!(State::from_record(state.to_record()).unwrap(), state);
    }
}
