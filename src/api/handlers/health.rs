//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Dataset loaded with at least one row
/// - **503 Service Unavailable**: Dataset is empty
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "dataset": { "status": "ok", "message": "1520 rows, 2023-10-18 to 2024-06-11" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let dataset_check = check_dataset(&state);
    let healthy = dataset_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            dataset: dataset_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the dataset holds rows.
fn check_dataset(state: &AppState) -> CheckStatus {
    let rows = state.dataset_service.row_count();
    if rows == 0 {
        return CheckStatus {
            status: "error".to_string(),
            message: Some("Dataset is empty".to_string()),
        };
    }

    let message = match state.dataset_service.date_bounds() {
        Some(bounds) => format!("{rows} rows, {} to {}", bounds.min, bounds.max),
        None => format!("{rows} rows, no snapshot dates"),
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message),
    }
}
