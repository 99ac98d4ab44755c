use contracts::domain::a001_travel::MetroRoute;

use super::sampler_for;
use super::seed::{format_duration, format_time_12h};

const LINES: [&str; 4] = ["Purple Line", "Green Line", "Yellow Line", "Blue Line"];

const WINDOW: u32 = 8;

const MIN_FARE: f64 = 10.0;
const MAX_FARE: f64 = 60.0;

pub fn generate_metro(origin: &str, destination: &str, date: &str, count: usize) -> Vec<MetroRoute> {
    let Some(mut sampler) = sampler_for(origin, destination, date) else {
        return Vec::new();
    };

    (0..count as u32)
        .map(|i| {
            let s = sampler.at(i * WINDOW);
            let line = *s.pick(&LINES);
            // service runs 05:30 .. 23:00
            let departure_minutes = 5 * 60 + 30 + s.range(0, 70) * 15;
            let stations = s.range(3, 21);
            let interchanges = s.range(0, 3).min(stations / 5);
            let duration_minutes = stations * 2 + interchanges * 6 + s.range(0, 5);
            let fare = (MIN_FARE + f64::from(stations) * 3.0).min(MAX_FARE);
            let frequency_minutes = s.range(4, 13);

            MetroRoute {
                id: format!("MET-{}-{}", sampler.seed(), i),
                line: line.to_string(),
                from: origin.to_string(),
                to: destination.to_string(),
                date: date.to_string(),
                departure_minutes,
                departure_time: format_time_12h(departure_minutes),
                duration_minutes,
                duration: format_duration(duration_minutes),
                stations,
                interchanges,
                fare,
                frequency_minutes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fares_and_schedule() {
        let routes = generate_metro("MG Road", "Whitefield", "2025-10-21", 12);
        assert_eq!(routes.len(), 12);
        for route in &routes {
            assert!((MIN_FARE..=MAX_FARE).contains(&route.fare));
            assert!(route.departure_minutes >= 5 * 60 + 30);
            assert!(route.departure_minutes < 23 * 60 + 30);
            assert!(route.interchanges <= 2);
        }
        assert_eq!(routes, generate_metro("MG Road", "Whitefield", "2025-10-21", 12));
    }
}
