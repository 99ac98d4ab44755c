mod home;
mod seats;
mod shows;

pub use home::TicketsHome;
pub use seats::TicketsSeats;
pub use shows::TicketsShows;
