pub mod a001_travel;
pub mod a002_food;
pub mod a003_tickets;
pub mod a004_shopping;
