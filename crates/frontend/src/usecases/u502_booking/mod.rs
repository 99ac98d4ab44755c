mod service;

pub use service::{book_bus, book_flight, book_hotel, book_metro, book_show, BookingError};
