//! Leptos frontend for the inventory dashboard.

pub mod app;
pub mod product_modal;
pub mod shell;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // tracing events reach the browser console through its `log` feature.
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount_to_body(app::App);
}
