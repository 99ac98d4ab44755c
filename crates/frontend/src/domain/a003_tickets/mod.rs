pub mod catalog;
pub mod ui;
