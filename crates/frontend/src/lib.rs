pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: logging, panic hook, then mount the app on `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("hr vision {} starting", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(app::App);
}
