use serde::{Deserialize, Serialize};

use crate::shared::record::{ensure, ensure_price};
use crate::shared::{DecodeError, StoreRecord};

/// `selectedMovie`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub language: String,
    pub genre: String,
    pub certificate: String,
    pub rating: f32,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,
    pub movie_id: String,
    pub theatre: String,
    pub start_time: String,
    pub price_per_seat: f64,
}

/// `selectedShow`: the show plus the seats picked on the seat map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedShow {
    pub show: Show,
    pub movie_title: String,
    #[serde(default)]
    pub seats: Vec<String>,
}

impl SelectedShow {
    pub fn new(show: Show, movie_title: impl Into<String>) -> Self {
        Self {
            show,
            movie_title: movie_title.into(),
            seats: Vec::new(),
        }
    }

    pub fn toggle_seat(&mut self, seat: &str) {
        match self.seats.iter().position(|s| s == seat) {
            Some(index) => {
                self.seats.remove(index);
            }
            None => self.seats.push(seat.to_string()),
        }
    }

    pub fn total(&self) -> f64 {
        self.show.price_per_seat * self.seats.len() as f64
    }
}

impl StoreRecord for Movie {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "movie without id")
    }
}

impl StoreRecord for SelectedShow {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.show.id.is_empty(), "show without id")?;
        ensure_price(self.show.price_per_seat, "pricePerSeat")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_seat_and_total() {
        let show = Show {
            id: "s1".into(),
            movie_id: "mv1".into(),
            theatre: "PVR Forum".into(),
            start_time: "7:30 PM".into(),
            price_per_seat: 250.0,
        };
        let mut selected = SelectedShow::new(show, "Interstellar");
        selected.toggle_seat("C4");
        selected.toggle_seat("C5");
        selected.toggle_seat("C4");
        assert_eq!(selected.seats, vec!["C5".to_string()]);
        assert_eq!(selected.total(), 250.0);
    }
}
