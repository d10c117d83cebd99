//! HBnB domain models.
//!
//! Each type is a [`BaseModel`](hbnb_core::BaseModel) plus a fixed schema.
//! [`AnyModel`] dispatches on a record's `__class__` to rebuild the right one.

macro_rules! impl_model_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl core::fmt::Display for $t {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(&hbnb_core::Model::render(self))
                }
            }
        )*
    };
}

pub mod amenity;
pub mod any;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::Amenity;
pub use any::AnyModel;
pub use city::City;
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;

impl_model_display!(Amenity, City, Place, Review, State, User);
