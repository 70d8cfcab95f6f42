//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Dashboard page
//! - `GET  /health`      - Health check: dataset rows and date range
//! - `/api/*`            - Chart, event and entity endpoints (rate limited)
//! - `POST /api/footer`  - Footer position on scroll (not rate limited)
//! - `/static/*`         - Page script and stylesheet
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`, except `/api/footer`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the rate limit and the static file directory
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let api_router = api::routes::routes()
        .layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
        .merge(api::routes::footer_routes());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
