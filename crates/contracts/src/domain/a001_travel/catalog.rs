use serde::{Deserialize, Serialize};

use crate::shared::record::{ensure, ensure_price};
use crate::shared::{DecodeError, StoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Amenity {
    Wifi,
    Meals,
    PowerOutlet,
    Entertainment,
    Blanket,
    WaterBottle,
    AirConditioning,
    Pool,
    Breakfast,
}

impl Amenity {
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Wifi => "Wi-Fi",
            Amenity::Meals => "Meals",
            Amenity::PowerOutlet => "Power outlet",
            Amenity::Entertainment => "Entertainment",
            Amenity::Blanket => "Blanket",
            Amenity::WaterBottle => "Water bottle",
            Amenity::AirConditioning => "A/C",
            Amenity::Pool => "Pool",
            Amenity::Breakfast => "Breakfast",
        }
    }
}

/// Departure time bucket used by the results filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Minutes since midnight -> bucket (05-12, 12-17, 17-21, rest)
    pub fn of_minutes(minutes: u32) -> Self {
        match (minutes / 60) % 24 {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    pub fn all() -> [TimeOfDay; 4] {
        [
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Night,
        ]
    }
}

/// `selectedFlight`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub departure_minutes: u32,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: u32,
    pub duration: String,
    pub stops: u8,
    pub price: f64,
    pub rating: f32,
    pub seats_left: u32,
    pub refundable: bool,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

/// `selectedBus`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRoute {
    pub id: String,
    pub operator: String,
    pub bus_type: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub departure_minutes: u32,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: u32,
    pub duration: String,
    pub price: f64,
    pub rating: f32,
    pub seats_left: u32,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

/// `selectedMetro`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetroRoute {
    pub id: String,
    pub line: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub departure_minutes: u32,
    pub departure_time: String,
    pub duration_minutes: u32,
    pub duration: String,
    pub stations: u32,
    pub interchanges: u32,
    pub fare: f64,
    pub frequency_minutes: u32,
}

/// `selectedHotel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub price_per_night: f64,
    pub rating: f32,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl StoreRecord for Flight {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "flight without id")?;
        ensure_price(self.price, "price")
    }
}

impl StoreRecord for BusRoute {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "bus without id")?;
        ensure_price(self.price, "price")
    }
}

impl StoreRecord for MetroRoute {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "metro route without id")?;
        ensure_price(self.fare, "fare")
    }
}

impl StoreRecord for Hotel {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "hotel without id")?;
        ensure_price(self.price_per_night, "pricePerNight")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::of_minutes(5 * 60), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::of_minutes(11 * 60 + 59), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::of_minutes(12 * 60), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::of_minutes(17 * 60 + 30), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::of_minutes(21 * 60), TimeOfDay::Night);
        assert_eq!(TimeOfDay::of_minutes(4 * 60 + 59), TimeOfDay::Night);
    }
}
