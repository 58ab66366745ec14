//! # portal-client
//!
//! Leptos + WASM frontend for the school and donation portal.
//!
//! This crate contains pages, components, the auth session store, role
//! guards, role-aware navigation, and the REST session client that talks to
//! the external portal backend. The non-UI core (`net`, `state::auth`,
//! `util`) has no browser dependency so it can also be driven natively, as
//! `portal-cli` does.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
