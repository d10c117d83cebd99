//! Discriminator-driven dispatch over every model type.

use hbnb_core::{
    BaseModel, EntityId, Model, ModelError, ModelKind, ModelResult, Record, Timestamp,
};

use crate::{Amenity, City, Place, Review, State, User};

/// One model of any kind.
///
/// Built from a record by reading its `__class__` key and handing the
/// record to that type's `from_record`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyModel {
    BaseModel(BaseModel),
    User(User),
    State(State),
    City(City),
    Amenity(Amenity),
    Place(Place),
    Review(Review),
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyModel::BaseModel($m) => $body,
            AnyModel::User($m) => $body,
            AnyModel::State($m) => $body,
            AnyModel::City($m) => $body,
            AnyModel::Amenity($m) => $body,
            AnyModel::Place($m) => $body,
            AnyModel::Review($m) => $body,
        }
    };
}

impl AnyModel {
    /// Rebuild from a record; `__class__` is required here.
    pub fn from_record(record: Record) -> ModelResult<Self> {
        Ok(match ModelKind::of_record(&record)? {
            ModelKind::BaseModel => AnyModel::BaseModel(BaseModel::from_record(record)?),
            ModelKind::User => AnyModel::User(User::from_record(record)?),
            ModelKind::State => AnyModel::State(State::from_record(record)?),
            ModelKind::City => AnyModel::City(City::from_record(record)?),
            ModelKind::Amenity => AnyModel::Amenity(Amenity::from_record(record)?),
            ModelKind::Place => AnyModel::Place(Place::from_record(record)?),
            ModelKind::Review => AnyModel::Review(Review::from_record(record)?),
        })
    }

    /// A fresh model of `kind`, as if constructed directly.
    pub fn new(kind: ModelKind) -> Self {
        match kind {
            ModelKind::BaseModel => AnyModel::BaseModel(BaseModel::new()),
            ModelKind::User => AnyModel::User(User::new()),
            ModelKind::State => AnyModel::State(State::new()),
            ModelKind::City => AnyModel::City(City::new()),
            ModelKind::Amenity => AnyModel::Amenity(Amenity::new()),
            ModelKind::Place => AnyModel::Place(Place::new()),
            ModelKind::Review => AnyModel::Review(Review::new()),
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            AnyModel::BaseModel(_) => ModelKind::BaseModel,
            AnyModel::User(_) => ModelKind::User,
            AnyModel::State(_) => ModelKind::State,
            AnyModel::City(_) => ModelKind::City,
            AnyModel::Amenity(_) => ModelKind::Amenity,
            AnyModel::Place(_) => ModelKind::Place,
            AnyModel::Review(_) => ModelKind::Review,
        }
    }

    pub fn id(&self) -> &EntityId {
        dispatch!(self, m => m.id())
    }

    pub fn created_at(&self) -> Timestamp {
        dispatch!(self, m => m.created_at())
    }

    pub fn updated_at(&self) -> Timestamp {
        dispatch!(self, m => m.updated_at())
    }

    pub fn storage_key(&self) -> String {
        dispatch!(self, m => m.storage_key())
    }

    pub fn save(&mut self) {
        dispatch!(self, m => Model::save(m))
    }

    pub fn to_record(&self) -> Record {
        dispatch!(self, m => m.to_record())
    }

    /// Downcast to a concrete type.
    pub fn into_typed<M: Model>(self) -> ModelResult<M> {
        if self.kind() != M::KIND {
            return Err(ModelError::class_mismatch(M::KIND.as_str(), self.kind().as_str()));
        }
        M::from_record(self.to_record())
    }
}

impl core::fmt::Display for AnyModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        dispatch!(self, m => core::fmt::Display::fmt(m, f))
    }
}

macro_rules! impl_from_model {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyModel {
                fn from(value: $variant) -> Self {
                    AnyModel::$variant(value)
                }
            }
        )*
    };
}

impl_from_model!(BaseModel, User, State, City, Amenity, Place, Review);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_class_key() {
        for kind in ModelKind::ALL {
            let model = AnyModel::new(kind);
            let rebuilt = AnyModel::from_record(model.to_record()).unwrap();
            assert_eq!(rebuilt.kind(), kind);
            assert_eq!(rebuilt, model);
        }
    }

    #[test]
    fn storage_key_is_class_dot_id() {
        let amenity = Amenity::new();
        let key = format!("Amenity.{}", amenity.id());
        assert_eq!(AnyModel::from(amenity).storage_key(), key);
    }

    #[test]
    fn unknown_class_is_rejected() {
        let mut record = BaseModel::new().to_record();
        record.insert("__class__".into(), json!("Spaceship"));
        assert_eq!(
            AnyModel::from_record(record).unwrap_err(),
            ModelError::unknown_class("Spaceship")
        );
    }

    #[test]
    fn missing_class_is_rejected() {
        let mut record = User::new().to_record();
        record.shift_remove("__class__");
        assert_eq!(
            AnyModel::from_record(record).unwrap_err(),
            ModelError::missing("__class__")
        );
    }

    #[test]
    fn into_typed_checks_kind() {
        let state = State::new();
        let any = AnyModel::from(state.clone());
        assert_eq!(any.clone().into_typed::<State>().unwrap(), state);
        assert_eq!(
            any.into_typed::<City>().unwrap_err(),
            ModelError::class_mismatch("City", "State")
        );
    }

    #[test]
    fn save_goes_through_to_the_wrapped_model() {
        let mut any = AnyModel::new(ModelKind::Review);
        let before = any.updated_at();
        any.save();
        assert!(any.updated_at() > before);
        assert_eq!(any.created_at(), before);
    }

    #[test]
    fn display_matches_wrapped_model() {
        let city = City::new();
        assert_eq!(AnyModel::from(city.clone()).to_string(), city.to_string());
    }
}
