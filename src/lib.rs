//! # orenda-client
//!
//! Leptos + WASM frontend for the Orenda rental/asset management platform.
//!
//! This crate contains the route table and navigation guard, the session
//! store that owns all authentication state, the REST API helpers, and the
//! route-level pages. All mutations of session state go through
//! [`state::session::SessionStore`]; everything else observes it read-only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);
}
