//! # client
//!
//! Leptos + WASM front end for the agent builder.
//!
//! Shared state lives in `slices` scopes: the app root provides theme and
//! viewport, each layout composes the providers its pages need, and
//! components consume them through typed hooks. The `hydrate` feature binds
//! storage, timers, and window events to the browser.

pub mod app;
pub mod components;
pub mod env;
pub mod hooks;
pub mod layouts;
pub mod pages;
pub mod providers;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
