//! Pure filter/sort over generated travel results.
//!
//! Re-applied on every render: output depends only on the filter state and
//! the generated list.

use contracts::domain::a001_travel::{Amenity, BusRoute, Flight, MetroRoute, TimeOfDay};
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_f64, sort_list, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
    Rating,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Duration => "Duration",
            SortKey::Departure => "Departure",
            SortKey::Rating => "Rating",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::Departure => "departure",
            SortKey::Rating => "rating",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "duration" => SortKey::Duration,
            "departure" => SortKey::Departure,
            "rating" => SortKey::Rating,
            _ => SortKey::Price,
        }
    }

    pub fn all() -> [SortKey; 4] {
        [SortKey::Price, SortKey::Duration, SortKey::Departure, SortKey::Rating]
    }
}

/// Common view over flights, buses and metro routes
pub trait TravelOption {
    fn price(&self) -> f64;
    fn duration_minutes(&self) -> u32;
    fn departure_minutes(&self) -> u32;
    fn rating(&self) -> f32;
    fn operator(&self) -> &str;
    fn stops(&self) -> u8 {
        0
    }
    fn amenities(&self) -> &[Amenity] {
        &[]
    }
    fn refundable(&self) -> bool {
        false
    }
}

impl TravelOption for Flight {
    fn price(&self) -> f64 {
        self.price
    }
    fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
    fn departure_minutes(&self) -> u32 {
        self.departure_minutes
    }
    fn rating(&self) -> f32 {
        self.rating
    }
    fn operator(&self) -> &str {
        &self.airline
    }
    fn stops(&self) -> u8 {
        self.stops
    }
    fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }
    fn refundable(&self) -> bool {
        self.refundable
    }
}

impl TravelOption for BusRoute {
    fn price(&self) -> f64 {
        self.price
    }
    fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
    fn departure_minutes(&self) -> u32 {
        self.departure_minutes
    }
    fn rating(&self) -> f32 {
        self.rating
    }
    fn operator(&self) -> &str {
        &self.operator
    }
    fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }
}

impl TravelOption for MetroRoute {
    fn price(&self) -> f64 {
        self.fare
    }
    fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
    fn departure_minutes(&self) -> u32 {
        self.departure_minutes
    }
    fn rating(&self) -> f32 {
        5.0
    }
    fn operator(&self) -> &str {
        &self.line
    }
    fn stops(&self) -> u8 {
        self.interchanges.min(u32::from(u8::MAX)) as u8
    }
}

impl<T: TravelOption> Sortable<SortKey> for T {
    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Price => cmp_f64(self.price(), other.price()),
            SortKey::Duration => self.duration_minutes().cmp(&other.duration_minutes()),
            SortKey::Departure => self.departure_minutes().cmp(&other.departure_minutes()),
            SortKey::Rating => cmp_f64(f64::from(self.rating()), f64::from(other.rating())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TravelFilter {
    pub max_price: Option<f64>,
    pub max_stops: Option<u8>,
    /// Empty = all operators
    pub operators: Vec<String>,
    /// Empty = any time of day
    pub times: Vec<TimeOfDay>,
    pub min_rating: Option<f32>,
    /// Every listed amenity must be present
    pub amenities: Vec<Amenity>,
    pub refundable_only: bool,
    pub sort: SortKey,
    pub descending: bool,
}

impl TravelFilter {
    pub fn matches<T: TravelOption>(&self, item: &T) -> bool {
        self.max_price.map_or(true, |max| item.price() <= max)
            && self.max_stops.map_or(true, |max| item.stops() <= max)
            && (self.operators.is_empty() || self.operators.iter().any(|o| o == item.operator()))
            && (self.times.is_empty()
                || self.times.contains(&TimeOfDay::of_minutes(item.departure_minutes())))
            && self.min_rating.map_or(true, |min| item.rating() >= min)
            && self.amenities.iter().all(|a| item.amenities().contains(a))
            && (!self.refundable_only || item.refundable())
    }

    pub fn toggle_time(&mut self, time: TimeOfDay) {
        match self.times.iter().position(|t| *t == time) {
            Some(index) => {
                self.times.remove(index);
            }
            None => self.times.push(time),
        }
    }

    pub fn toggle_operator(&mut self, operator: &str) {
        match self.operators.iter().position(|o| o == operator) {
            Some(index) => {
                self.operators.remove(index);
            }
            None => self.operators.push(operator.to_string()),
        }
    }
}

/// Filtered and sorted copy of `items`
pub fn apply<T: TravelOption + Clone>(items: &[T], filter: &TravelFilter) -> Vec<T> {
    let mut result: Vec<T> = items.iter().filter(|i| filter.matches(*i)).cloned().collect();
    sort_list(&mut result, filter.sort, !filter.descending);
    result
}

/// `(min, max)` price of the list, `None` when empty; drives the price slider
pub fn price_bounds<T: TravelOption>(items: &[T]) -> Option<(f64, f64)> {
    items.iter().map(TravelOption::price).fold(None, |acc, price| match acc {
        None => Some((price, price)),
        Some((min, max)) => Some((min.min(price), max.max(price))),
    })
}

/// Distinct operators in first-seen order, for the filter chips
pub fn operators_of<T: TravelOption>(items: &[T]) -> Vec<String> {
    let mut operators: Vec<String> = Vec::new();
    for item in items {
        if !operators.iter().any(|o| o == item.operator()) {
            operators.push(item.operator().to_string());
        }
    }
    operators
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_travel::generator::{generate_buses, generate_flights};

    fn blr_goa() -> Vec<Flight> {
        generate_flights("Bengaluru (BLR)", "Goa (GOX)", "2025-10-21", 8)
    }

    #[test]
    fn test_blr_goa_sorted_by_price() {
        let flights = blr_goa();
        assert!(!flights.is_empty());

        let (min, max) = price_bounds(&flights).unwrap();
        assert!(flights.iter().all(|f| f.price >= min && f.price <= max));

        let sorted = apply(&flights, &TravelFilter::default());
        assert_eq!(sorted.len(), flights.len());
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(sorted[0].price, min);
        assert_eq!(sorted[sorted.len() - 1].price, max);
    }

    #[test]
    fn test_descending_rating_sort() {
        let filter = TravelFilter {
            sort: SortKey::Rating,
            descending: true,
            ..TravelFilter::default()
        };
        let sorted = apply(&blr_goa(), &filter);
        assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_filters_are_pure() {
        let flights = blr_goa();
        let mut filter = TravelFilter {
            max_stops: Some(0),
            min_rating: Some(4.0),
            ..TravelFilter::default()
        };
        filter.toggle_time(TimeOfDay::Morning);
        filter.toggle_time(TimeOfDay::Evening);
        filter.toggle_time(TimeOfDay::Evening);

        let once = apply(&flights, &filter);
        let twice = apply(&flights, &filter);
        assert_eq!(once, twice);
        for flight in &once {
            assert_eq!(flight.stops, 0);
            assert!(flight.rating >= 4.0);
            assert_eq!(TimeOfDay::of_minutes(flight.departure_minutes), TimeOfDay::Morning);
        }
    }

    #[test]
    fn test_max_price_and_amenities() {
        let buses = generate_buses("Chennai", "Bengaluru", "2025-10-30", 12);
        let (min, max) = price_bounds(&buses).unwrap();
        let cap = (min + max) / 2.0;
        let filter = TravelFilter {
            max_price: Some(cap),
            amenities: vec![Amenity::AirConditioning],
            ..TravelFilter::default()
        };
        for bus in apply(&buses, &filter) {
            assert!(bus.price <= cap);
            assert!(bus.amenities.contains(&Amenity::AirConditioning));
        }
    }

    #[test]
    fn test_operator_filter() {
        let flights = blr_goa();
        let operators = operators_of(&flights);
        let mut filter = TravelFilter::default();
        filter.toggle_operator(&operators[0]);
        let only = apply(&flights, &filter);
        assert!(!only.is_empty());
        assert!(only.iter().all(|f| f.airline == operators[0]));
    }

    #[test]
    fn test_empty_list_has_no_bounds() {
        assert!(price_bounds::<Flight>(&[]).is_none());
        assert!(apply::<Flight>(&[], &TravelFilter::default()).is_empty());
    }
}
