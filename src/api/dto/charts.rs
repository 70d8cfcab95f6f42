//! DTOs for chart initialization and refresh endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::application::services::{ChartFailure, RefreshReport};
use crate::domain::controls::{ControlId, ControlSnapshot, RefreshScope};
use crate::domain::entities::{ChartFigure, ChartKind};

/// Longest value accepted for any free-text control.
pub const MAX_CONTROL_VALUE_LEN: usize = 512;
const MAX_CONTROL_VALUE_LEN_U64: u64 = MAX_CONTROL_VALUE_LEN as u64;

/// Query parameters for `GET /api/charts/refresh`.
///
/// Every parameter is optional. Empty strings are treated as absent, and
/// values that do not parse become absent filters.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RefreshQuery {
    #[serde(default)]
    pub scope: Option<RefreshScope>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = MAX_CONTROL_VALUE_LEN_U64))]
    pub entity: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 32))]
    pub start_date: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 32))]
    pub end_date: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "type")]
    #[validate(length(max = 32))]
    pub view_type: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 64))]
    pub feature: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 64))]
    pub x_axis: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 64))]
    pub y_axis: Option<String>,
}

impl RefreshQuery {
    pub fn scope(&self) -> RefreshScope {
        self.scope.unwrap_or(RefreshScope::All)
    }

    /// The query as a control document, one control per parameter.
    pub fn to_snapshot(&self) -> ControlSnapshot {
        [
            (ControlId::SongArtistDropdown, &self.entity),
            (ControlId::StartDate, &self.start_date),
            (ControlId::EndDate, &self.end_date),
            (ControlId::TypeRadio, &self.view_type),
            (ControlId::AudioFeatureDropdown, &self.feature),
            (ControlId::XAxisDropdown, &self.x_axis),
            (ControlId::YAxisDropdown, &self.y_axis),
        ]
        .into_iter()
        .fold(ControlSnapshot::new(), |snapshot, (control, value)| {
            match value {
                Some(v) => snapshot.with(control, v.clone()),
                None => snapshot.with_empty(control),
            }
        })
    }
}

/// Figures produced by an initialization or refresh.
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<RefreshScope>,
    pub updated: Vec<ChartKind>,
    pub failed: Vec<ChartFailure>,
    pub figures: Vec<ChartFigure>,
}

impl ChartsResponse {
    pub fn new(scope: Option<RefreshScope>, report: RefreshReport, figures: Vec<ChartFigure>) -> Self {
        Self {
            scope,
            updated: report.updated,
            failed: report.failed,
            figures,
        }
    }
}
