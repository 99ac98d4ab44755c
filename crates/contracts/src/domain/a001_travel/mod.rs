pub mod catalog;
pub mod search;

pub use catalog::{Amenity, BusRoute, Flight, Hotel, MetroRoute, TimeOfDay};
pub use search::{TravelSearch, TravelType};
