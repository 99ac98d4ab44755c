mod booking;
mod filter_panel;
mod results;
mod search_form;

pub use booking::TravelBooking;
pub use results::TravelResults;
pub use search_form::TravelHome;
