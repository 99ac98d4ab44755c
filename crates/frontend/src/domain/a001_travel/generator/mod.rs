//! Deterministic synthetic search results.
//!
//! Results are a pure function of (origin, destination, date): the same
//! search always yields the same list, and a blank input yields no results.

mod buses;
mod flights;
mod metro;
pub mod seed;

pub use buses::generate_buses;
pub use flights::generate_flights;
pub use metro::generate_metro;

use contracts::domain::a001_travel::TravelSearch;

/// Seeded sampler for one search, `None` when the search is incomplete
pub(crate) fn sampler_for(origin: &str, destination: &str, date: &str) -> Option<seed::Sampler> {
    if origin.trim().is_empty() || destination.trim().is_empty() || date.trim().is_empty() {
        return None;
    }
    Some(seed::Sampler::new(seed::seed_of(origin, destination, date)))
}

pub fn flights_for(search: &TravelSearch, count: usize) -> Vec<contracts::domain::a001_travel::Flight> {
    generate_flights(&search.from_location, &search.to_location, &search.departure_date, count)
}

pub fn buses_for(search: &TravelSearch, count: usize) -> Vec<contracts::domain::a001_travel::BusRoute> {
    generate_buses(&search.from_location, &search.to_location, &search.departure_date, count)
}

pub fn metro_for(search: &TravelSearch, count: usize) -> Vec<contracts::domain::a001_travel::MetroRoute> {
    generate_metro(&search.from_location, &search.to_location, &search.departure_date, count)
}
