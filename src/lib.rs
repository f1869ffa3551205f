//! # dig-inv-web
//!
//! Leptos + WASM browser client for the digital inventory application.
//!
//! This crate contains the OpenID session lifecycle (login redirect, code
//! exchange, session restore, logout), the toast notification store, the
//! asset-class resource container, and the typed REST wrappers they call.
//! Browser-only glue is gated behind the `csr` feature so the state machines
//! can be exercised natively in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs console logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
