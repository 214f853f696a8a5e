//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the whole site: the Leptos page routes rendered on
//! the server, the compiled bundle under `/pkg`, operational endpoints, and the
//! public directory (policy PDFs, images) for every other path. A request that
//! matches nothing falls through to Leptos, which renders the not-found view.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::SiteConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Operational endpoints that do not touch the Leptos app.
pub fn ops_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full site router, with Leptos options loaded from the cargo-leptos metadata.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    Ok(site_router(conf.leptos_options, config.site.clone(), &config.public_dir))
}

/// Leptos SSR routes plus static assets for the given options.
pub fn site_router(leptos_options: LeptosOptions, site: SiteConfig, public_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered page routes");

    let context = move || provide_context(site.clone());

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Public files first; misses render the app so unknown paths get the 404 page.
    let not_found = file_and_error_handler_with_context::<LeptosOptions, _>(context, client::app::shell)
        .with_state(leptos_options.clone());
    let public = ServeDir::new(public_dir).fallback(not_found);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .merge(ops_routes())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
