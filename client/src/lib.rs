//! # client
//!
//! Leptos front-end shell for the LearnHub learning platform: page layout and
//! metadata, role-gated routes, login and signup forms, and toast
//! notifications. Access decisions come from the `gate` crate; this crate
//! connects them to the session signal and the router.
//!
//! Built twice: with `ssr` for the server-side render in the `learnhub`
//! binary, and with `hydrate` for the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod meta;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
