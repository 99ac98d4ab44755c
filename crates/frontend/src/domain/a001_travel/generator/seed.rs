/// Sum of the UTF-16 code units of `origin + destination + date`
pub fn seed_of(origin: &str, destination: &str, date: &str) -> u32 {
    origin
        .encode_utf16()
        .chain(destination.encode_utf16())
        .chain(date.encode_utf16())
        .map(u32::from)
        .sum()
}

/// `|sin(seed + i)|`, a uniform-ish value in `[0, 1]`
pub fn sample(seed: u32, i: u32) -> f64 {
    (f64::from(seed) + f64::from(i)).sin().abs()
}

/// Walks `sample(seed, i)` for increasing `i`
#[derive(Debug, Clone)]
pub struct Sampler {
    seed: u32,
    cursor: u32,
}

impl Sampler {
    pub fn new(seed: u32) -> Self {
        Self { seed, cursor: 0 }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Repositions the cursor; results use disjoint windows of `i`
    pub fn at(&mut self, cursor: u32) -> &mut Self {
        self.cursor = cursor;
        self
    }

    pub fn draw(&mut self) -> f64 {
        let value = sample(self.seed, self.cursor);
        self.cursor += 1;
        value
    }

    /// Integer in `[low, high)`
    pub fn range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = high - low;
        low + ((self.draw() * f64::from(span)) as u32).min(span - 1)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.range(0, items.len() as u32) as usize;
        &items[index]
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.draw() < probability
    }
}

/// "6:05 AM"; minutes past midnight, wrapping at 24h
pub fn format_time_12h(minutes: u32) -> String {
    let minutes = minutes % (24 * 60);
    let (hour, minute) = (minutes / 60, minutes % 60);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, minute, suffix)
}

/// Arrival label, with "+1" when the trip crosses midnight
pub fn format_arrival(departure_minutes: u32, duration_minutes: u32) -> String {
    let arrival = departure_minutes + duration_minutes;
    let label = format_time_12h(arrival);
    match arrival / (24 * 60) {
        0 => label,
        days => format!("{} +{}", label, days),
    }
}

/// "2h 15m", "45m", "3h"
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sums_code_units() {
        assert_eq!(seed_of("A", "B", "1"), 65 + 66 + 49);
        assert_eq!(seed_of("", "", ""), 0);
        // non-BMP characters count as two UTF-16 units
        assert_eq!(seed_of("😀", "", ""), 0xD83D + 0xDE00);
    }

    #[test]
    fn test_sample_is_sin_of_seed_plus_index() {
        assert_eq!(sample(0, 0), 0.0);
        assert!((sample(1, 0) - 1f64.sin()).abs() < 1e-12);
        assert!((sample(10, 5) - 15f64.sin().abs()).abs() < 1e-12);
        for i in 0..100 {
            let v = sample(12_345, i);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut sampler = Sampler::new(987);
        for _ in 0..500 {
            let v = sampler.range(3, 9);
            assert!((3..9).contains(&v));
        }
        assert_eq!(sampler.range(4, 4), 4);
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(format_time_12h(0), "12:00 AM");
        assert_eq!(format_time_12h(6 * 60 + 5), "6:05 AM");
        assert_eq!(format_time_12h(12 * 60), "12:00 PM");
        assert_eq!(format_time_12h(23 * 60 + 59), "11:59 PM");
        assert_eq!(format_arrival(22 * 60, 3 * 60), "1:00 AM +1");
        assert_eq!(format_arrival(8 * 60, 90), "9:30 AM");
    }

    #[test]
    fn test_duration_labels() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(180), "3h");
        assert_eq!(format_duration(135), "2h 15m");
    }
}
