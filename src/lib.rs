//! CareView browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos front end for a role-based care-management REST backend. `app`
//! wires the session store, API handle, and route table; pages and components
//! consume them via context. The `hydrate` feature gates all browser-only
//! code so the test suite runs natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
