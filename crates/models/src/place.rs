//! Places (listings).

use hbnb_core::{BaseModel, Model, ModelError, ModelKind, ModelResult, Record, RecordFields};
use serde_json::Value;

/// A rentable place, linked to a city and its owning user by id.
///
/// Counts and the nightly price are non-negative integers; coordinates are
/// floats. `amenity_ids` lists [`Amenity`](crate::Amenity) ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    base: BaseModel,
    city_id: String,
    user_id: String,
    name: String,
    description: String,
    number_rooms: u64,
    number_bathrooms: u64,
    max_guest: u64,
    price_by_night: u64,
    latitude: f64,
    longitude: f64,
    amenity_ids: Vec<String>,
}

impl Place {
    pub fn new() -> Self {
        Self {
            base: BaseModel::new(),
            city_id: String::new(),
            user_id: String::new(),
            name: String::new(),
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: 0.0,
            longitude: 0.0,
            amenity_ids: Vec::new(),
        }
    }

    pub fn city_id(&self) -> &str {
        &self.city_id
    }

    pub fn set_city_id(&mut self, city_id: impl Into<String>) {
        self.city_id = city_id.into();
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = user_id.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn number_rooms(&self) -> u64 {
        self.number_rooms
    }

    pub fn set_number_rooms(&mut self, n: u64) {
        self.number_rooms = n;
    }

    pub fn number_bathrooms(&self) -> u64 {
        self.number_bathrooms
    }

    pub fn set_number_bathrooms(&mut self, n: u64) {
        self.number_bathrooms = n;
    }

    pub fn max_guest(&self) -> u64 {
        self.max_guest
    }

    pub fn set_max_guest(&mut self, n: u64) {
        self.max_guest = n;
    }

    pub fn price_by_night(&self) -> u64 {
        self.price_by_night
    }

    pub fn set_price_by_night(&mut self, price: u64) {
        self.price_by_night = price;
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Both values must be finite; JSON has no NaN or infinity.
    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) -> ModelResult<()> {
        for (field, value) in [("latitude", latitude), ("longitude", longitude)] {
            if !value.is_finite() {
                return Err(ModelError::validation(format!(
                    "`{field}` on Place must be finite, got {value}"
                )));
            }
        }
        self.latitude = latitude;
        self.longitude = longitude;
        Ok(())
    }

    pub fn amenity_ids(&self) -> &[String] {
        &self.amenity_ids
    }

    /// Link an amenity; already-linked ids are ignored.
    pub fn add_amenity(&mut self, amenity_id: impl Into<String>) {
        let amenity_id = amenity_id.into();
        if !self.amenity_ids.contains(&amenity_id) {
            self.amenity_ids.push(amenity_id);
        }
    }
}

impl Default for Place {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Place {
    const KIND: ModelKind = ModelKind::Place;
    const FIELDS: &'static [&'static str] = &[
        "city_id",
        "user_id",
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
        "amenity_ids",
    ];

    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        &mut self.base
    }

    fn schema_fields(&self) -> Record {
        let mut record = Record::new();
        record.insert("city_id".into(), Value::String(self.city_id.clone()));
        record.insert("user_id".into(), Value::String(self.user_id.clone()));
        record.insert("name".into(), Value::String(self.name.clone()));
        record.insert("description".into(), Value::String(self.description.clone()));
        record.insert("number_rooms".into(), Value::from(self.number_rooms));
        record.insert("number_bathrooms".into(), Value::from(self.number_bathrooms));
        record.insert("max_guest".into(), Value::from(self.max_guest));
        record.insert("price_by_night".into(), Value::from(self.price_by_night));
        record.insert("latitude".into(), Value::from(self.latitude));
        record.insert("longitude".into(), Value::from(self.longitude));
        record.insert("amenity_ids".into(), Value::from(self.amenity_ids.clone()));
        record
    }

    fn from_record(record: Record) -> ModelResult<Self> {
        let mut fields = RecordFields::open(record, Self::KIND)?;
        let city_id = fields.take_string("city_id")?.unwrap_or_default();
        let user_id = fields.take_string("user_id")?.unwrap_or_default();
        let name = fields.take_string("name")?.unwrap_or_default();
        let description = fields.take_string("description")?.unwrap_or_default();
        let number_rooms = fields.take_u64("number_rooms")?.unwrap_or_default();
        let number_bathrooms = fields.take_u64("number_bathrooms")?.unwrap_or_default();
        let max_guest = fields.take_u64("max_guest")?.unwrap_or_default();
        let price_by_night = fields.take_u64("price_by_night")?.unwrap_or_default();
        let latitude = fields.take_f64("latitude")?.unwrap_or_default();
        let longitude = fields.take_f64("longitude")?.unwrap_or_default();
        let amenity_ids = fields.take_string_list("amenity_ids")?.unwrap_or_default();
        Ok(Self {
            base: BaseModel::from_fields(fields)?,
            city_id,
            user_id,
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
            amenity_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Amenity;
    use serde_json::json;

    fn test_place() -> Place {
        let mut place = Place::new();
        place.set_city_id("c-1");
        place.set_user_id("u-1");
        place.set_name("Loft");
        place.set_description("Top floor, river view");
        place.set_number_rooms(2);
        place.set_number_bathrooms(1);
        place.set_max_guest(4);
        place.set_price_by_night(120);
        place.set_coordinates(37.7749, -122.4194).unwrap();
        place
    }

    #[test]
    fn numeric_fields_are_json_numbers() {
        let record = test_place().to_record();
        assert_eq!(record.get("number_rooms"), Some(&json!(2)));
        assert_eq!(record.get("price_by_night"), Some(&json!(120)));
        assert_eq!(record.get("latitude"), Some(&json!(37.7749)));
        assert_eq!(record.get("amenity_ids"), Some(&json!([])));
    }

    #[test]
    fn round_trip_with_amenities() {
        let mut place = test_place();
        let wifi = Amenity::new();
        place.add_amenity(wifi.id().to_string());
        place.add_amenity(wifi.id().to_string());
        place.save();

        let rebuilt = Place::from_record(place.to_record()).unwrap();
        assert_eq!(rebuilt.amenity_ids(), &[wifi.id().to_string()]);
        assert_eq!(rebuilt, place);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut place = test_place();
        for (lat, lon) in [(f64::NAN, 1.0), (1.0, f64::INFINITY), (f64::NEG_INFINITY, 0.0)] {
            match place.set_coordinates(lat, lon).unwrap_err() {
                ModelError::Validation(_) => {}
                other => panic!("Expected Validation error, got {other:?}"),
            }
        }
        assert_eq!(place.latitude(), 37.7749);
        assert_eq!(place.longitude(), -122.4194);

        let rebuilt = Place::from_record(place.to_record()).unwrap();
        assert_eq!(rebuilt, place);
    }

    #[test]
    fn integer_coordinates_are_accepted() {
        let mut record = test_place().to_record();
        record.insert("latitude".into(), json!(0));
        let place = Place::from_record(record).unwrap();
        assert_eq!(place.latitude(), 0.0);
    }

    #[test]
    fn negative_room_count_is_rejected() {
        let mut record = test_place().to_record();
        record.insert("number_rooms".into(), json!(-2));
        match Place::from_record(record).unwrap_err() {
            ModelError::Validation(msg) => assert!(msg.contains("number_rooms")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_become_open_attributes() {
        let mut record = test_place().to_record();
        record.insert("pets_allowed".into(), json!(true));
        let place = Place::from_record(record).unwrap();
        assert_eq!(place.attr("pets_allowed"), Some(&json!(true)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every schema field survives reconstruction unchanged.
            #[test]
            fn schema_fields_survive_round_trip(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                rooms in any::<u64>(),
                price in any::<u64>(),
                latitude in -90.0f64..90.0,
                longitude in -180.0f64..180.0,
                amenities in proptest::collection::vec("[a-f0-9]{8}", 0..5),
            ) {
                let mut place = Place::new();
                place.set_name(name);
                place.set_number_rooms(rooms);
                place.set_price_by_night(price);
                place.set_coordinates(latitude, longitude).unwrap();
                for id in amenities {
                    place.add_amenity(id);
                }

                let rebuilt = Place::from_record(place.to_record()).unwrap();
                prop_assert_eq!(rebuilt, place);
            }
        }
    }
}
