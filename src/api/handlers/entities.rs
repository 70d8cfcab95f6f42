//! Handler for entity dropdown options.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::entities::{EntitiesQuery, EntitiesResponse};
use crate::domain::entities::ViewType;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the songs or artists the entity dropdown offers.
///
/// # Endpoint
///
/// `GET /api/entities?view=song|artist`
///
/// Songs are listed as `"{artists} | {name}"`. Without `view`, songs are
/// returned.
///
/// # Errors
///
/// Returns 400 Bad Request if `view` is neither `song` nor `artist`.
pub async fn entities_handler(
    State(state): State<AppState>,
    Query(query): Query<EntitiesQuery>,
) -> Result<Json<EntitiesResponse>, AppError> {
    let view = query
        .view
        .as_deref()
        .map(str::parse::<ViewType>)
        .transpose()
        .map_err(|e| AppError::bad_request(e.to_string(), json!({ "view": query.view })))?;

    Ok(Json(state.dataset_service.entity_options(view).into()))
}
