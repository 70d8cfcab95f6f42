//! Handler for page control events.

use axum::{Json, extract::State};
use validator::Validate;

use super::run_blocking;
use crate::api::dto::events::{EventRequest, EventResponse, ScrollRequest};
use crate::application::services::{ControlEvent, ControlPanelBinder};
use crate::domain::controls::ControlSnapshot;
use crate::error::AppError;
use crate::state::AppState;

/// Dispatches one control event through the control panel binder.
///
/// # Endpoint
///
/// `POST /api/events`
///
/// # Request Body
///
/// ```json
/// {
///   "event": "change",
///   "control": "type-radio",
///   "controls": {
///     "song-artist-dropdown": "Artist X",
///     "type-radio": "artist",
///     "audio-feature-dropdown": null
///   }
/// }
/// ```
///
/// Controls absent from `controls` are treated as missing from the page and
/// get no listener, so a change on them is ignored.
///
/// # Errors
///
/// Returns 400 Bad Request if a control value is too long.
pub async fn event_handler(
    State(state): State<AppState>,
    Json(request): Json<EventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    request.validate()?;

    let (event, document) = request.into_parts();

    let response = run_blocking(move || {
        let binder = ControlPanelBinder::bind(&document, state.footer_anchor());
        let mut coordinator = state.coordinator();
        let outcome = binder.handle(event, &document, &mut coordinator);
        EventResponse::new(outcome, coordinator.into_renderer().into_figures())
    })
    .await?;

    Ok(Json(response))
}

/// Reports where the footer sits for a page scroll.
///
/// # Endpoint
///
/// `POST /api/footer`
///
/// ```json
/// { "scroll_y": 1240.0 }
/// ```
///
/// Touches no chart, so it is served outside the `/api` rate limit. The page
/// asks once and keeps the footer in place on later scrolls.
///
/// # Errors
///
/// Returns 400 Bad Request if `scroll_y` is not finite.
pub async fn footer_handler(
    State(state): State<AppState>,
    Json(request): Json<ScrollRequest>,
) -> Result<Json<EventResponse>, AppError> {
    request.validate()?;

    let document = ControlSnapshot::new();
    let binder = ControlPanelBinder::bind(&document, state.footer_anchor());
    let outcome = binder.handle(
        ControlEvent::Scroll {
            scroll_y: request.scroll_y,
        },
        &document,
        &mut state.coordinator(),
    );

    Ok(Json(EventResponse::new(outcome, Vec::new())))
}
