//! User accounts.

use hbnb_core::{BaseModel, Model, ModelKind, ModelResult, Record, RecordFields};
use serde_json::Value;

/// A registered user.
///
/// `password` is stored as given; hashing belongs to whoever collects it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    base: BaseModel,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

impl User {
    pub fn new() -> Self {
        Self {
            base: BaseModel::new(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for User {
    const KIND: ModelKind = ModelKind::User;
    const FIELDS: &'static [&'static str] = &["email", "password", "first_name", "last_name"];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn schema_fields(&self) -> Record {
        let mut record = Record::new();
        record.insert("email".into(), Value::String(self.email.clone()));
        record.insert("password".into(), Value::String(self.password.clone()));
        record.insert("first_name".into(), Value::String(self.first_name.clone()));
        record.insert("last_name".into(), Value::String(self.last_name.clone()));
        record
    }

    fn from_record(record: Record) -> ModelResult<Self> {
        let mut fields = RecordFields::open(record, Self::KIND)?;
        let email = fields.take_string("email")?.unwrap_or_default();
        let password = fields.take_string("password")?.unwrap_or_default();
        let first_name = fields.take_string("first_name")?.unwrap_or_default();
        let last_name = fields.take_string("last_name")?.unwrap_or_default();
        Ok(Self {
            base: BaseModel::from_fields(fields)?,
            email,
            password,
            first_name,
            last_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_user() -> User {
        let mut user = User::new();
        user.set_email("airbnb@mail.com");
        user.set_password("root");
        user.set_first_name("Betty");
        user.set_last_name("Holberton");
        user
    }

    #[test]
    fn to_record_carries_schema_fields() {
        let record = test_user().to_record();
        assert_eq!(record.get("email"), Some(&json!("airbnb@mail.com")));
        assert_eq!(record.get("first_name"), Some(&json!("Betty")));
        assert_eq!(record.get("__class__"), Some(&json!("User")));
    }

    #[test]
    fn round_trip_after_save() {
        let mut user = test_user();
        user.save();
        let rebuilt = User::from_record(user.to_record()).unwrap();
        assert_eq!(rebuilt, user);
        assert_eq!(rebuilt.last_name(), "Holberton");
    }

    #[test]
    fn two_users_have_distinct_ids() {
        assert_ne!(User::new().id(), User::new().id());
    }
}
