//! Career Week Landing Page
//!
//! Leptos front-end: a single scrolling page with a staggered slide-out menu.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod config;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Career Week landing page starting...");

    // Falls back to an empty page with default menu options
    if let Err(err) = config::init_config() {
        log::error!("{}", err);
    }

    app::hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
