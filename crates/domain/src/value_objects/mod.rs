//! Value Objects - Immutable, identity-less domain primitives

mod humidity;
mod location_key;

pub use humidity::{Humidity, InvalidHumidity};
pub use location_key::{LocationKey, normalize};
