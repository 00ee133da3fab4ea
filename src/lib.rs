//! Portfolio site backend
//!
//! Contact pipeline (form client, HTTP handler, mail relay, SQLite record) and
//! the scroll-driven view state of the single-page site.

pub mod api;
pub mod client;
pub mod config;
pub mod contact;
pub mod db;
pub mod errors;
pub mod mail;
pub mod models;
pub mod view;

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use contact::ContactService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub contact: ContactService,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Any method reaches the handler so it can answer 405 itself
        .route("/contact", any(api::handle_contact))
        .route("/site", get(api::get_site));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    let mut router = Router::new().nest("/api", api_routes).merge(health_routes);

    // Built site, if configured
    if let Some(dir) = &state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
