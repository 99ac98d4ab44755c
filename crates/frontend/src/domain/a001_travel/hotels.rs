use contracts::domain::a001_travel::{Amenity, Hotel};
use once_cell::sync::Lazy;

fn hotel(id: &str, name: &str, city: &str, price: f64, rating: f32, amenities: &[Amenity]) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        price_per_night: price,
        rating,
        amenities: amenities.to_vec(),
    }
}

static HOTELS: Lazy<Vec<Hotel>> = Lazy::new(|| {
    use Amenity::*;
    vec![
        hotel("h1", "Taj Fort Aguada Resort", "Goa", 14_500.0, 4.7, &[Pool, Wifi, Breakfast]),
        hotel("h2", "Novotel Goa Candolim", "Goa", 7_200.0, 4.3, &[Pool, Wifi]),
        hotel("h3", "Zostel Goa", "Goa", 1_100.0, 4.1, &[Wifi]),
        hotel("h4", "The Leela Palace", "Bengaluru", 16_800.0, 4.8, &[Pool, Wifi, Breakfast]),
        hotel("h5", "Lemon Tree Premier", "Bengaluru", 5_400.0, 4.0, &[Wifi, Breakfast]),
        hotel("h6", "Trident Nariman Point", "Mumbai", 12_300.0, 4.6, &[Pool, Wifi]),
        hotel("h7", "Ibis Mumbai Airport", "Mumbai", 4_200.0, 3.9, &[Wifi]),
        hotel("h8", "The Imperial", "Delhi", 18_900.0, 4.8, &[Pool, Wifi, Breakfast]),
        hotel("h9", "Bloomrooms @ Janpath", "Delhi", 3_600.0, 4.2, &[Wifi, Breakfast]),
    ]
});

/// Hotels in the destination city ("Goa (GOX)" matches "Goa"); none for an
/// unknown or blank city
pub fn hotels_in(location: &str) -> Vec<Hotel> {
    let city = contracts::domain::a001_travel::search::city_name(location);
    if city.is_empty() {
        return Vec::new();
    }
    HOTELS
        .iter()
        .filter(|h| h.city.eq_ignore_ascii_case(city))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotels_by_destination() {
        let goa = hotels_in("Goa (GOX)");
        assert_eq!(goa.len(), 3);
        assert!(goa.iter().all(|h| h.city == "Goa"));
        assert_eq!(hotels_in("delhi").len(), 2);
        assert!(hotels_in("Atlantis").is_empty());
        assert!(hotels_in("").is_empty());
    }
}
