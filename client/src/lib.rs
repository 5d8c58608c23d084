//! # client
//!
//! Leptos + WASM frontend for the Lexi legal research assistant.
//!
//! This crate contains the page shell, the chat interface and citation viewer
//! components, the conversation state they share, and the mock assistant that
//! stands in for a research backend. Built with `hydrate` for the browser and
//! with `ssr` for the Axum host in the `server` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
