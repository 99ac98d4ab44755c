pub mod cart;
pub mod clipboard;
pub mod date_utils;
pub mod event_bus;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod orders;
pub mod storage;
pub mod ui;
