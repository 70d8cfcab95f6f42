//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::application::services::figure_renderer::{DEFAULT_BAR_FEATURE, DEFAULT_SCATTER_AXES};
use crate::domain::controls::FOOTER_ELEMENT_ID;
use crate::domain::entities::{AudioFeature, ChartKind, ViewType};
use crate::state::AppState;

/// An `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn feature(feature: AudioFeature, selected: AudioFeature) -> Self {
        Self {
            value: feature.column().to_string(),
            label: feature.label(),
            selected: feature == selected,
        }
    }
}

/// A chart container on the page.
#[derive(Debug, Clone)]
pub struct ChartSlot {
    pub container_id: &'static str,
    pub heading: &'static str,
}

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with every control populated from the
/// dataset and one container per chart.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub entity_options: Vec<SelectOption>,
    pub start_date: String,
    pub end_date: String,
    pub view_type: &'static str,
    pub feature_options: Vec<SelectOption>,
    pub x_axis_options: Vec<SelectOption>,
    pub y_axis_options: Vec<SelectOption>,
    pub charts: Vec<ChartSlot>,
    pub footer_id: &'static str,
    pub footer_offset_px: u32,
}

impl DashboardTemplate {
    /// Builds the page for the initial song view.
    pub fn from_state(state: &AppState) -> Self {
        let entities = state.dataset_service.entity_options(Some(ViewType::Song));
        let entity_options = entities
            .options
            .iter()
            .map(|name| SelectOption {
                value: name.clone(),
                label: name.clone(),
                selected: entities.default.as_deref() == Some(name.as_str()),
            })
            .collect();

        let (start_date, end_date) = state
            .dataset_service
            .date_bounds()
            .map(|b| (b.min.to_string(), b.max.to_string()))
            .unwrap_or_default();

        let (x_default, y_default) = DEFAULT_SCATTER_AXES;
        let options = |selected| {
            AudioFeature::ALL
                .into_iter()
                .map(|f| SelectOption::feature(f, selected))
                .collect::<Vec<_>>()
        };

        Self {
            entity_options,
            start_date,
            end_date,
            view_type: entities.view.as_str(),
            feature_options: options(DEFAULT_BAR_FEATURE),
            x_axis_options: options(x_default),
            y_axis_options: options(y_default),
            charts: ChartKind::ALL
                .into_iter()
                .map(|chart| ChartSlot {
                    container_id: chart.container_id(),
                    heading: chart.heading(),
                })
                .collect(),
            footer_id: FOOTER_ELEMENT_ID,
            footer_offset_px: state.settings.footer_offset_px,
        }
    }
}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/dashboard.html` for server-side rendering.
/// The page script loads figures from `/api/charts` and posts every control
/// change to `/api/events`.
pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    DashboardTemplate::from_state(&state)
}
