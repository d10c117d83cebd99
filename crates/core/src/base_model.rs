//! The base model: identity, timestamps and open attributes shared by every type.

use crate::error::ModelResult;
use crate::id::EntityId;
use crate::kind::ModelKind;
use crate::model::Model;
use crate::record::{CREATED_AT_KEY, ID_KEY, Record, RecordFields, UPDATED_AT_KEY};
use crate::timestamp::{self, Timestamp};

/// Common state of every model.
///
/// `id` and `created_at` never change after construction. `updated_at` only
/// moves forward, through [`BaseModel::save`] / [`BaseModel::touch`].
///
/// Not synchronized: callers sharing a model across threads coordinate
/// access themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseModel {
    id: EntityId,
    created_at: Timestamp,
    updated_at: Timestamp,
    attributes: Record,
}

impl BaseModel {
    /// Fresh identity, both timestamps set to now.
    pub fn new() -> Self {
        Self::created(timestamp::now())
    }

    /// Fresh identity, both timestamps set to `at`.
    pub fn created(at: Timestamp) -> Self {
        Self {
            id: EntityId::new(),
            created_at: at,
            updated_at: at,
            attributes: Record::new(),
        }
    }

    /// Rebuild the base part from a record reader.
    ///
    /// `id`, `created_at` and `updated_at` are required. Every key still
    /// left in `fields` becomes an open attribute, so callers take their
    /// schema fields first.
    pub fn from_fields(mut fields: RecordFields) -> ModelResult<Self> {
        let id = fields.require_string(ID_KEY)?.parse::<EntityId>()?;
        let created_at =
            timestamp::parse_iso(CREATED_AT_KEY, &fields.require_string(CREATED_AT_KEY)?)?;
        let updated_at =
            timestamp::parse_iso(UPDATED_AT_KEY, &fields.require_string(UPDATED_AT_KEY)?)?;

        Ok(Self {
            id,
            created_at,
            updated_at,
            attributes: fields.into_remaining(),
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Open attributes, in assignment order.
    pub fn attributes(&self) -> &Record {
        &self.attributes
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Record {
        &mut self.attributes
    }

    /// Mark the model modified now. Performs no I/O.
    pub fn save(&mut self) {
        self.touch(timestamp::now());
    }

    /// Mark the model modified at `now`.
    ///
    /// `updated_at` strictly increases: if `now` is not past the current
    /// value (coarse or stepped-back clock) it advances by one microsecond.
    /// At the largest representable timestamp it stays put.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at
                .checked_add_signed(chrono::TimeDelta::microseconds(1))
                .unwrap_or(self.updated_at)
        };
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for BaseModel {
    const KIND: ModelKind = ModelKind::BaseModel;
    const FIELDS: &'static [&'static str] = &[];

    fn base(&self) -> &BaseModel {
        self
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        self
    }

    fn schema_fields(&self) -> Record {
        Record::new()
    }

    fn from_record(record: Record) -> ModelResult<Self> {
        Self::from_fields(RecordFields::open(record, Self::KIND)?)
    }
}

impl core::fmt::Display for BaseModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}
