use contracts::domain::a003_tickets::{Movie, Show};
use once_cell::sync::Lazy;

use crate::domain::a001_travel::generator::seed::{seed_of, Sampler};

fn movie(id: &str, title: &str, language: &str, genre: &str, cert: &str, rating: f32, minutes: u32) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        language: language.to_string(),
        genre: genre.to_string(),
        certificate: cert.to_string(),
        rating,
        duration_minutes: minutes,
    }
}

static MOVIES: Lazy<Vec<Movie>> = Lazy::new(|| {
    vec![
        movie("mv1", "Kalki 2898 AD", "Telugu", "Sci-Fi, Action", "UA", 4.4, 181),
        movie("mv2", "Stree 2", "Hindi", "Horror, Comedy", "UA", 4.2, 147),
        movie("mv3", "Manjummel Boys", "Malayalam", "Thriller, Drama", "UA", 4.6, 135),
        movie("mv4", "Interstellar (Re-release)", "English", "Sci-Fi, Drama", "UA", 4.8, 169),
    ]
});

const THEATRES: [(&str, f64); 3] = [
    ("PVR Forum Mall", 250.0),
    ("INOX Garuda", 220.0),
    ("Cinepolis Nexus", 280.0),
];

const START_TIMES: [&str; 4] = ["10:15 AM", "1:30 PM", "6:45 PM", "10:00 PM"];

pub const SEAT_ROWS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
pub const SEATS_PER_ROW: u32 = 10;

pub fn movies() -> &'static [Movie] {
    &MOVIES
}

pub fn movie_by_id(id: &str) -> Option<&'static Movie> {
    MOVIES.iter().find(|m| m.id == id)
}

/// Every theatre screens every movie at the same four slots
pub fn shows_for(movie_id: &str) -> Vec<Show> {
    if movie_by_id(movie_id).is_none() {
        return Vec::new();
    }
    THEATRES
        .iter()
        .enumerate()
        .flat_map(|(t, (theatre, price))| {
            START_TIMES.iter().enumerate().map(move |(s, start)| Show {
                id: format!("{}-t{}-s{}", movie_id, t, s),
                movie_id: movie_id.to_string(),
                theatre: theatre.to_string(),
                start_time: start.to_string(),
                // evening and late shows cost more
                price_per_seat: if s >= 2 { price + 50.0 } else { *price },
            })
        })
        .collect()
}

/// Seats already taken for a show; stable per show id
pub fn booked_seats(show_id: &str) -> Vec<String> {
    let mut sampler = Sampler::new(seed_of(show_id, "", ""));
    let mut booked = Vec::new();
    for row in SEAT_ROWS {
        for number in 1..=SEATS_PER_ROW {
            if sampler.chance(0.3) {
                booked.push(format!("{}{}", row, number));
            }
        }
    }
    booked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_per_movie() {
        let shows = shows_for("mv2");
        assert_eq!(shows.len(), THEATRES.len() * START_TIMES.len());
        assert!(shows.iter().all(|s| s.movie_id == "mv2"));
        assert!(shows_for("missing").is_empty());
    }

    #[test]
    fn test_booked_seats_are_stable() {
        let a = booked_seats("mv1-t0-s2");
        assert_eq!(a, booked_seats("mv1-t0-s2"));
        assert!(a.len() < (SEAT_ROWS.len() as u32 * SEATS_PER_ROW) as usize);
    }
}
