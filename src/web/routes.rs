//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Dashboard routes.
///
/// # Endpoints
///
/// - `GET /` - Dashboard page with controls and chart containers
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard_handler))
}
