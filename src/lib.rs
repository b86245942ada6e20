//! # jobportal
//!
//! Leptos + WASM front-end for a job board backed by a separate REST API.
//!
//! This crate contains pages, components, session state, and the typed API
//! client. The same library is compiled twice: as WASM with `hydrate` for the
//! browser, and natively with `ssr` for the host binary in `main.rs`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
