//! # client
//!
//! Leptos + WASM frontend for the foundation website.
//!
//! This crate contains the routing shell, layout chrome, pages, reusable
//! components, the contact-form state machine, and the HTTP transport used to
//! reach the external contact-intake service. The `server` crate renders it
//! with `leptos_axum`; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::SiteConfig::from_document();
    log::debug!("hydrating with contact api base {}", config.api_base);
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <app::App/> }
    });
}
