#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod board;
pub mod config;
pub mod content;
pub mod guestbook;
pub mod listing;
pub mod reveal;
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
