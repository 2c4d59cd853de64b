//! Browser entry point of the portfolio site.
//!
//! Hydrates the server-rendered page so the section hooks start fetching, and
//! routes `log` output and panics to the browser console.

#![recursion_limit = "256"]

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::component);
}
