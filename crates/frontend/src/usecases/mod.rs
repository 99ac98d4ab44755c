pub mod u501_checkout;
pub mod u502_booking;
pub mod u503_repeat_order;
