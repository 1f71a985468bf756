//! eCommerce orders dashboard (Leptos CSR).

pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point: logging, panic hook, then the app itself
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("dashboard v{} starting", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(app::App);
}
