//! # comanda-client
//!
//! Leptos + WASM staff console for the restaurant ordering API.
//!
//! Staff sign in with a bearer token issued by the external API, follow table
//! orders on the dashboard, and administrators maintain the product catalog,
//! categories and tables. All business rules live on the API server; this
//! crate decodes the session token, keeps it in `localStorage`, attaches it to
//! outgoing requests and gates routes by role.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    leptos::mount::hydrate_body(app::App);
}
