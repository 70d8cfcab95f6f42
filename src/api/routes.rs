//! API route configuration.

use crate::api::handlers::{
    charts_handler, entities_handler, event_handler, footer_handler, not_found_handler,
    refresh_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Rate-limited API routes.
///
/// # Endpoints
///
/// - `GET  /charts`          - Create every chart with default inputs
/// - `GET  /charts/refresh`  - Refresh one scope from query parameters
/// - `POST /events`          - Dispatch a page control event
/// - `GET  /entities`        - Entity dropdown options for a view type
///
/// Unknown paths answer with a JSON `not_found` error.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/charts", get(charts_handler))
        .route("/charts/refresh", get(refresh_handler))
        .route("/events", post(event_handler))
        .route("/entities", get(entities_handler))
        .fallback(not_found_handler)
}

/// API routes that do no dataset work and skip the rate limit.
///
/// - `POST /footer`          - Footer position for a page scroll
pub fn footer_routes() -> Router<AppState> {
    Router::new().route("/footer", post(footer_handler))
}
