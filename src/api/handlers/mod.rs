//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod charts;
pub mod entities;
pub mod events;
pub mod health;

pub use charts::{charts_handler, refresh_handler};
pub use entities::entities_handler;
pub use events::{event_handler, footer_handler};
pub use health::health_handler;

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Runs dataset-bound work off the async executor.
///
/// Figure building scans the whole dataset, so it goes to the blocking pool.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!(error = %e, "Blocking task failed");
        AppError::internal("Chart rendering was interrupted", json!({}))
    })
}

/// JSON 404 for unmatched API paths.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Endpoint not found", json!({ "path": uri.path() }))
}
