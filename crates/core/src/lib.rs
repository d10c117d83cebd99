//! `hbnb-core`: the base model every HBnB entity is built on.
//!
//! Identity, timestamps, open attributes and the record (dictionary)
//! serialization. This crate performs no I/O.

pub mod base_model;
pub mod error;
pub mod id;
pub mod kind;
pub mod model;
pub mod record;
pub mod timestamp;

pub use base_model::BaseModel;
pub use error::{ModelError, ModelResult};
pub use id::EntityId;
pub use kind::ModelKind;
pub use model::{Model, storage_key};
pub use record::{CLASS_KEY, Record, RecordFields};
pub use timestamp::Timestamp;
