use leptos::*;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod routes;
pub mod state;

use config::AppConfig;

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::load();
    log::info!(
        "Starting {} v{} (API: {})",
        config.name,
        config.version,
        config.api.base_url
    );

    mount_to_body(move || view! { <app::App config=config /> });
}
