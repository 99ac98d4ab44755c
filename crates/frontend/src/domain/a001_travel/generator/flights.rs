use contracts::domain::a001_travel::{Amenity, Flight};

use super::sampler_for;
use super::seed::{format_arrival, format_duration, format_time_12h};

const AIRLINES: [(&str, &str); 5] = [
    ("IndiGo", "6E"),
    ("Air India", "AI"),
    ("Vistara", "UK"),
    ("SpiceJet", "SG"),
    ("Akasa Air", "QP"),
];

/// Samples consumed per result
const WINDOW: u32 = 16;

pub const MIN_FARE: f64 = 2_499.0;
pub const MAX_FARE: f64 = 14_999.0;

pub fn generate_flights(origin: &str, destination: &str, date: &str, count: usize) -> Vec<Flight> {
    let Some(mut sampler) = sampler_for(origin, destination, date) else {
        return Vec::new();
    };
    // Route-level base fare so the same route is consistently cheap or dear
    let base_fare = 3_000.0 + f64::from(sampler.seed() % 40) * 100.0;

    (0..count as u32)
        .map(|i| {
            let s = sampler.at(i * WINDOW);
            let (airline, code) = *s.pick(&AIRLINES);
            let flight_number = format!("{} {}", code, s.range(100, 1000));
            let departure_minutes = s.range(0, 24) * 60 + s.range(0, 12) * 5;
            let stops = match s.draw() {
                x if x < 0.6 => 0,
                x if x < 0.9 => 1,
                _ => 2,
            };
            let duration_minutes = 55 + s.range(0, 14) * 10 + u32::from(stops) * 80;
            let jitter = 0.75 + s.draw() * 0.9;
            let price = (base_fare * jitter - f64::from(stops) * 350.0)
                .round()
                .clamp(MIN_FARE, MAX_FARE);
            let rating = (35.0 + s.draw() * 15.0).round() as f32 / 10.0;
            let seats_left = s.range(1, 31);
            let refundable = s.chance(0.5);

            let mut amenities = Vec::new();
            if s.chance(0.5) {
                amenities.push(Amenity::Meals);
            }
            if s.chance(0.35) {
                amenities.push(Amenity::Wifi);
            }
            if s.chance(0.4) {
                amenities.push(Amenity::PowerOutlet);
            }
            if s.chance(0.25) {
                amenities.push(Amenity::Entertainment);
            }

            Flight {
                id: format!("FL-{}-{}", sampler.seed(), i),
                airline: airline.to_string(),
                flight_number,
                from: origin.to_string(),
                to: destination.to_string(),
                date: date.to_string(),
                departure_minutes,
                departure_time: format_time_12h(departure_minutes),
                arrival_time: format_arrival(departure_minutes, duration_minutes),
                duration_minutes,
                duration: format_duration(duration_minutes),
                stops,
                price,
                rating,
                seats_left,
                refundable,
                amenities,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_search_same_results() {
        let a = generate_flights("Bengaluru (BLR)", "Goa (GOX)", "2025-10-21", 8);
        let b = generate_flights("Bengaluru (BLR)", "Goa (GOX)", "2025-10-21", 8);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_other_date_changes_results() {
        let a = generate_flights("Bengaluru (BLR)", "Goa (GOX)", "2025-10-21", 8);
        let b = generate_flights("Bengaluru (BLR)", "Goa (GOX)", "2025-10-22", 8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(generate_flights("", "Goa (GOX)", "2025-10-21", 8).is_empty());
        assert!(generate_flights("Pune", "  ", "2025-10-21", 8).is_empty());
        assert!(generate_flights("Pune", "Goa", "", 8).is_empty());
    }

    #[test]
    fn test_fields_are_plausible() {
        let flights = generate_flights("Delhi (DEL)", "Mumbai (BOM)", "2025-12-01", 20);
        assert_eq!(flights.len(), 20);
        for flight in &flights {
            assert!((MIN_FARE..=MAX_FARE).contains(&flight.price));
            assert!((3.5..=5.0).contains(&flight.rating));
            assert!(flight.departure_minutes < 24 * 60);
            assert!(flight.stops <= 2);
            assert!((1..=30).contains(&flight.seats_left));
            assert!(flight.departure_time.ends_with("AM") || flight.departure_time.ends_with("PM"));
        }
    }
}
