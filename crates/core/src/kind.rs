//! Type discriminator carried in every record under `__class__`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::record::{CLASS_KEY, Record};

/// Concrete model type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    BaseModel,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl ModelKind {
    pub const ALL: [ModelKind; 7] = [
        ModelKind::BaseModel,
        ModelKind::User,
        ModelKind::State,
        ModelKind::City,
        ModelKind::Amenity,
        ModelKind::Place,
        ModelKind::Review,
    ];

    /// Class name as written to records and storage keys.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::BaseModel => "BaseModel",
            ModelKind::User => "User",
            ModelKind::State => "State",
            ModelKind::City => "City",
            ModelKind::Amenity => "Amenity",
            ModelKind::Place => "Place",
            ModelKind::Review => "Review",
        }
    }

    /// Read the discriminator out of a record.
    pub fn of_record(record: &Record) -> ModelResult<Self> {
        match record.get(CLASS_KEY) {
            None => Err(ModelError::missing(CLASS_KEY)),
            Some(serde_json::Value::String(name)) => name.parse(),
            Some(other) => Err(ModelError::validation(format!(
                "`{CLASS_KEY}` must be a string, got {other}"
            ))),
        }
    }
}

impl core::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ModelError::unknown_class(s))
    }
}
