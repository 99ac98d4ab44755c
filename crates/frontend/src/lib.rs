pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::{load_config, AppConfig};
use crate::shared::storage::browser_store;

#[wasm_bindgen]
pub fn hydrate() {
    let store = browser_store();
    let (config, config_error) = match load_config(&store) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();
    if let Some(e) = config_error {
        log::warn!("config: {:#}, using defaults", e);
    }

    leptos::mount::mount_to_body(move || view! { <app::App store=store config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
