//! Handlers for chart initialization and refresh.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use super::run_blocking;
use crate::api::dto::charts::{ChartsResponse, RefreshQuery};
use crate::domain::controls::read_selection;
use crate::error::AppError;
use crate::state::AppState;

/// Creates every chart with its default inputs.
///
/// # Endpoint
///
/// `GET /api/charts`
///
/// # Response
///
/// ```json
/// {
///   "updated": ["choropleth_map", "line_graph", "genre_distribution", "dance_energy", "scatter_plot"],
///   "failed": [],
///   "figures": [{ "chart": "choropleth_map", "container_id": "choropleth-map", "figure": { "data": [], "layout": {} } }]
/// }
/// ```
pub async fn charts_handler(
    State(state): State<AppState>,
) -> Result<Json<ChartsResponse>, AppError> {
    let response = run_blocking(move || {
        let mut coordinator = state.coordinator();
        let report = coordinator.initialize();
        ChartsResponse::new(None, report, coordinator.into_renderer().into_figures())
    })
    .await?;

    Ok(Json(response))
}

/// Refreshes the charts of one scope from query parameters.
///
/// # Endpoint
///
/// `GET /api/charts/refresh`
///
/// # Query Parameters
///
/// - `scope` (optional): `all` (default), `dance_energy` or `scatter`
/// - `entity`, `start_date`, `end_date`, `type` - primary filters
/// - `feature` - audio feature for the dance/energy chart
/// - `x_axis`, `y_axis` - scatter plot axes
///
/// Parameters outside the scope are ignored. Values that do not parse are
/// treated as absent, exactly like an empty control on the page.
///
/// # Errors
///
/// Returns 400 Bad Request if a parameter is too long.
pub async fn refresh_handler(
    State(state): State<AppState>,
    Query(query): Query<RefreshQuery>,
) -> Result<Json<ChartsResponse>, AppError> {
    query.validate()?;

    let scope = query.scope();
    let selection = read_selection(&query.to_snapshot(), scope);

    let response = run_blocking(move || {
        let mut coordinator = state.coordinator();
        let report = coordinator.refresh(scope, &selection);
        ChartsResponse::new(Some(scope), report, coordinator.into_renderer().into_figures())
    })
    .await?;

    Ok(Json(response))
}
