mod service;

pub use service::{apply_offer_code, checkout, clear_offer_code, quote, selected_offer, OfferError, Quote};
