//! # talentboard
//!
//! Leptos + WASM single-page HR dashboard: job-posting inventory, summary
//! statistics, posting creation, and per-posting applicant review with
//! resume download. Replaces the React dashboard component with a
//! Rust-native UI layer over the same `/api` REST boundary.
//!
//! This crate contains pages, components, application state, and the REST
//! client. Browser-only concerns (HTTP, localStorage, locale dates) are
//! gated behind the `hydrate` feature with SSR stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
