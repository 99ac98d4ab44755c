use contracts::domain::a001_travel::{Amenity, BusRoute};

use super::sampler_for;
use super::seed::{format_arrival, format_duration, format_time_12h};

const OPERATORS: [&str; 5] = [
    "VRL Travels",
    "SRS Travels",
    "Orange Tours",
    "KSRTC Airavat",
    "IntrCity SmartBus",
];

const BUS_TYPES: [&str; 4] = [
    "AC Sleeper (2+1)",
    "Volvo Multi-Axle AC Semi Sleeper",
    "Non-AC Seater (2+2)",
    "AC Seater (2+2)",
];

const WINDOW: u32 = 12;

pub fn generate_buses(origin: &str, destination: &str, date: &str, count: usize) -> Vec<BusRoute> {
    let Some(mut sampler) = sampler_for(origin, destination, date) else {
        return Vec::new();
    };

    (0..count as u32)
        .map(|i| {
            let s = sampler.at(i * WINDOW);
            let operator = *s.pick(&OPERATORS);
            let bus_type = *s.pick(&BUS_TYPES);
            // overnight-heavy schedule: 17:00 .. 23:45, a few morning runs
            let departure_minutes = if s.chance(0.75) {
                (17 + s.range(0, 7)) * 60 + s.range(0, 4) * 15
            } else {
                (6 + s.range(0, 4)) * 60 + s.range(0, 4) * 15
            };
            let duration_minutes = 4 * 60 + s.range(0, 17) * 30;
            let is_ac = bus_type.starts_with("AC") || bus_type.starts_with("Volvo");
            let base = if is_ac { 900.0 } else { 550.0 };
            let price = (base + s.draw() * 900.0).round();
            let rating = (32.0 + s.draw() * 16.0).round() as f32 / 10.0;
            let seats_left = s.range(2, 41);

            let mut amenities = Vec::new();
            if is_ac {
                amenities.push(Amenity::AirConditioning);
            }
            if s.chance(0.6) {
                amenities.push(Amenity::WaterBottle);
            }
            if s.chance(0.5) {
                amenities.push(Amenity::PowerOutlet);
            }
            if bus_type.contains("Sleeper") {
                amenities.push(Amenity::Blanket);
            }

            BusRoute {
                id: format!("BUS-{}-{}", sampler.seed(), i),
                operator: operator.to_string(),
                bus_type: bus_type.to_string(),
                from: origin.to_string(),
                to: destination.to_string(),
                date: date.to_string(),
                departure_minutes,
                departure_time: format_time_12h(departure_minutes),
                arrival_time: format_arrival(departure_minutes, duration_minutes),
                duration_minutes,
                duration: format_duration(duration_minutes),
                price,
                rating,
                seats_left,
                amenities,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_and_bounded() {
        let a = generate_buses("Bengaluru", "Hyderabad", "2025-11-14", 10);
        let b = generate_buses("Bengaluru", "Hyderabad", "2025-11-14", 10);
        assert_eq!(a, b);
        for bus in &a {
            assert!((550.0..=1_800.0).contains(&bus.price));
            assert!(bus.duration_minutes >= 240);
            let sleeper = bus.bus_type.contains("Sleeper");
            assert_eq!(bus.amenities.contains(&Amenity::Blanket), sleeper);
        }
        assert!(generate_buses("Bengaluru", "", "2025-11-14", 10).is_empty());
    }
}
