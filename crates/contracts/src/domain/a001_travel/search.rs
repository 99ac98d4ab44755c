use serde::{Deserialize, Serialize};

use crate::shared::record::ensure;
use crate::shared::{DecodeError, StoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    #[default]
    Flights,
    Hotels,
    Buses,
    Trains,
    Metro,
}

impl TravelType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TravelType::Flights => "Flights",
            TravelType::Hotels => "Hotels",
            TravelType::Buses => "Buses",
            TravelType::Trains => "Trains",
            TravelType::Metro => "Metro",
        }
    }

    pub fn all() -> [TravelType; 5] {
        [
            TravelType::Flights,
            TravelType::Hotels,
            TravelType::Buses,
            TravelType::Trains,
            TravelType::Metro,
        ]
    }
}

/// `travelSearch`: written by the travel home form, read by every results view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelSearch {
    #[serde(rename = "type", default)]
    pub travel_type: TravelType,
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default)]
    pub departure_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
}

fn default_travelers() -> u32 {
    1
}

impl Default for TravelSearch {
    fn default() -> Self {
        Self {
            travel_type: TravelType::default(),
            from_location: String::new(),
            to_location: String::new(),
            departure_date: String::new(),
            return_date: None,
            travelers: default_travelers(),
        }
    }
}

impl TravelSearch {
    /// Results can only be generated once origin, destination and date are set
    pub fn is_complete(&self) -> bool {
        !self.from_location.trim().is_empty()
            && !self.to_location.trim().is_empty()
            && !self.departure_date.trim().is_empty()
    }

    /// "Bengaluru (BLR)" -> "Bengaluru"
    pub fn destination_city(&self) -> &str {
        city_name(&self.to_location)
    }
}

pub fn city_name(location: &str) -> &str {
    location.split('(').next().unwrap_or(location).trim()
}

impl StoreRecord for TravelSearch {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(self.travelers >= 1, "at least one traveler")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{decode_or_default, encode};

    #[test]
    fn test_wire_shape_uses_js_field_names() {
        let search = TravelSearch {
            travel_type: TravelType::Buses,
            from_location: "Pune".into(),
            to_location: "Mumbai".into(),
            departure_date: "2025-11-02".into(),
            return_date: None,
            travelers: 2,
        };
        let json = encode(&search).unwrap();
        assert!(json.contains("\"type\":\"buses\""));
        assert!(json.contains("\"fromLocation\":\"Pune\""));
        assert!(json.contains("\"departureDate\""));
        assert!(!json.contains("returnDate"));
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let search: TravelSearch =
            decode_or_default(Some(r#"{"fromLocation":"Delhi (DEL)","toLocation":"Goa (GOX)"}"#));
        assert_eq!(search.travel_type, TravelType::Flights);
        assert_eq!(search.travelers, 1);
        assert!(!search.is_complete());
        assert_eq!(search.destination_city(), "Goa");
    }

    #[test]
    fn test_zero_travelers_is_rejected() {
        let search: TravelSearch = decode_or_default(Some(
            r#"{"fromLocation":"A","toLocation":"B","departureDate":"2025-01-01","travelers":0}"#,
        ));
        assert_eq!(search, TravelSearch::default());
    }
}
