//! Dictionary serialization of models.
//!
//! A [`Record`] is the JSON object a model renders itself to: every field by
//! name, the timestamps as ISO-8601 text, and the `__class__` discriminator.
//! [`RecordFields`] is the reading side used by the typed `from_record`
//! factories.

use serde_json::Value;

use crate::error::{ModelError, ModelResult};
use crate::kind::ModelKind;

/// Field name to JSON value, in insertion order.
pub type Record = serde_json::Map<String, Value>;

/// Discriminator key naming the concrete type.
pub const CLASS_KEY: &str = "__class__";
pub const ID_KEY: &str = "id";
pub const CREATED_AT_KEY: &str = "created_at";
pub const UPDATED_AT_KEY: &str = "updated_at";

/// Keys owned by the base model on every type.
pub const RESERVED_KEYS: [&str; 4] = [ID_KEY, CREATED_AT_KEY, UPDATED_AT_KEY, CLASS_KEY];

/// Consuming reader over a record being reconstructed into `kind`.
///
/// Each `take_*` removes the key it reads, so whatever is left at the end
/// (see [`RecordFields::into_remaining`]) is the set of open attributes.
#[derive(Debug, Clone)]
pub struct RecordFields {
    kind: ModelKind,
    record: Record,
}

impl RecordFields {
    /// Start reading `record` as a `kind`.
    ///
    /// The discriminator is dropped. If present it must name `kind`.
    pub fn open(mut record: Record, kind: ModelKind) -> ModelResult<Self> {
        match record.shift_remove(CLASS_KEY) {
            None => {}
            Some(Value::String(found)) if found == kind.as_str() => {}
            Some(Value::String(found)) => {
                return Err(ModelError::class_mismatch(kind.as_str(), found));
            }
            Some(other) => {
                return Err(ModelError::validation(format!(
                    "`{CLASS_KEY}` must be a string, got {other}"
                )));
            }
        }
        Ok(Self { kind, record })
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn take_string(&mut self, field: &str) -> ModelResult<Option<String>> {
        match self.record.shift_remove(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.wrong_type(field, "a string", &other)),
        }
    }

    pub fn require_string(&mut self, field: &str) -> ModelResult<String> {
        self.take_string(field)?
            .ok_or_else(|| ModelError::missing(field))
    }

    pub fn take_u64(&mut self, field: &str) -> ModelResult<Option<u64>> {
        match self.record.shift_remove(field) {
            None => Ok(None),
            Some(v) => match v.as_u64() {
                Some(n) => Ok(Some(n)),
                None => Err(self.wrong_type(field, "a non-negative integer", &v)),
            },
        }
    }

    /// Integers are accepted and widened.
    pub fn take_f64(&mut self, field: &str) -> ModelResult<Option<f64>> {
        match self.record.shift_remove(field) {
            None => Ok(None),
            Some(v) => match v.as_f64() {
                Some(n) => Ok(Some(n)),
                None => Err(self.wrong_type(field, "a number", &v)),
            },
        }
    }

    pub fn take_string_list(&mut self, field: &str) -> ModelResult<Option<Vec<String>>> {
        let value = match self.record.shift_remove(field) {
            None => return Ok(None),
            Some(v) => v,
        };
        let Value::Array(items) = &value else {
            return Err(self.wrong_type(field, "a list of strings", &value));
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(self.wrong_type(field, "a list of strings", &value)),
            })
            .collect::<ModelResult<Vec<_>>>()
            .map(Some)
    }

    /// Keys nobody took.
    pub fn into_remaining(self) -> Record {
        self.record
    }

    fn wrong_type(&self, field: &str, expected: &str, got: &Value) -> ModelError {
        ModelError::validation(format!(
            "`{field}` on {} must be {expected}, got {got}",
            self.kind
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected a JSON object"),
        }
    }

    #[test]
    fn open_drops_matching_class() {
        let fields = RecordFields::open(
            record(json!({"__class__": "City", "name": "Lagos"})),
            ModelKind::City,
        )
        .unwrap();
        let rest = fields.into_remaining();
        assert!(!rest.contains_key(CLASS_KEY));
        assert_eq!(rest.get("name"), Some(&json!("Lagos")));
    }

    #[test]
    fn open_accepts_missing_class() {
        assert!(RecordFields::open(record(json!({"name": "x"})), ModelKind::State).is_ok());
    }

    #[test]
    fn open_rejects_other_class() {
        let err = RecordFields::open(record(json!({"__class__": "User"})), ModelKind::Place)
            .unwrap_err();
        assert_eq!(err, ModelError::class_mismatch("Place", "User"));
    }

    #[test]
    fn take_string_type_checks() {
        let mut fields =
            RecordFields::open(record(json!({"name": 3})), ModelKind::Amenity).unwrap();
        match fields.take_string("name").unwrap_err() {
            ModelError::Validation(msg) => assert!(msg.contains("`name`")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn require_string_reports_missing_key() {
        let mut fields = RecordFields::open(Record::new(), ModelKind::BaseModel).unwrap();
        assert_eq!(fields.require_string("id").unwrap_err(), ModelError::missing("id"));
    }

    #[test]
    fn numeric_readers() {
        let mut fields = RecordFields::open(
            record(json!({"rooms": 3, "lat": 2, "neg": -1})),
            ModelKind::Place,
        )
        .unwrap();
        assert_eq!(fields.take_u64("rooms").unwrap(), Some(3));
        assert_eq!(fields.take_f64("lat").unwrap(), Some(2.0));
        assert!(fields.take_u64("neg").is_err());
        assert_eq!(fields.take_u64("absent").unwrap(), None);
    }

    #[test]
    fn string_list_rejects_mixed_items() {
        let mut fields =
            RecordFields::open(record(json!({"ids": ["a", 1]})), ModelKind::Place).unwrap();
        assert!(fields.take_string_list("ids").is_err());
    }

    #[test]
    fn remaining_keeps_insertion_order() {
        let mut fields = RecordFields::open(
            record(json!({"b": 1, "name": "n", "a": 2})),
            ModelKind::State,
        )
        .unwrap();
        fields.take_string("name").unwrap();
        let keys: Vec<_> = fields.into_remaining().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
