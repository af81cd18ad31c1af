//! # accounts-client
//!
//! Leptos + WASM frontend for account registration, login, and logout
//! against the `/api/users` HTTP API.
//!
//! The interesting part is the session core: one shared
//! `{ current user, loading }` state established by a single session check
//! at startup, updated by login, cleared by logout, and exposed to any
//! component through context. Routing and the three pages are thin glue
//! around it.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
