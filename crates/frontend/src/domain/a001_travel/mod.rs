pub mod filters;
pub mod generator;
pub mod hotels;
pub mod ui;
