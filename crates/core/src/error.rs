//! Model error model.

use thiserror::Error;

/// Result type used across the model layer.
pub type ModelResult<T> = Result<T, ModelError>;

/// Model-level error.
///
/// Every variant describes bad input handed to a constructor or mutator.
/// Nothing here is retryable: callers decide whether to reject the record,
/// skip it, or abort the batch it came from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A timestamp field did not hold ISO-8601 text.
    #[error("malformed timestamp in `{field}`: {value:?}")]
    MalformedTimestamp { field: String, value: String },

    /// A required key was absent from a record.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value failed validation (wrong JSON type, reserved name, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A record's discriminator named a different type than the one reconstructing it.
    #[error("class mismatch: expected {expected}, found {found}")]
    ClassMismatch { expected: String, found: String },

    /// A record's discriminator named no known type.
    #[error("unknown class: {0}")]
    UnknownClass(String),
}

impl ModelError {
    pub fn malformed_timestamp(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn class_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::ClassMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass(name.into())
    }
}
