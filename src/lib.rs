//! # cyclebank-client
//!
//! Leptos + WASM frontend for the CycleBank menstrual-product distribution
//! platform: registration and login for the four account roles, role-gated
//! dashboard routing, and the product-request flow.
//!
//! The interesting machinery lives in `state`: an explicit session state
//! machine drives the token lifecycle so every auth-affecting HTTP completion
//! is applied as a single event instead of racing ad hoc callbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
