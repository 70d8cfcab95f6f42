//! Selection state snapshotted from the dashboard controls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::audio_feature::AudioFeature;

/// Error returned when a string is neither `song` nor `artist`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view type: '{0}'")]
pub struct ParseViewTypeError(pub String);

/// Whether the entity selection names a song or an artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Song,
    Artist,
}

impl ViewType {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Song => "song",
            ViewType::Artist => "artist",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = ParseViewTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "song" => Ok(ViewType::Song),
            "artist" => Ok(ViewType::Artist),
            _ => Err(ParseViewTypeError(s.to_string())),
        }
    }
}

/// Immutable snapshot of every control value at the time of one event.
///
/// All fields are optional and unvalidated: a missing or unselected control
/// is `None`, and `start_date` may be after `end_date`. Each `None` is
/// treated downstream as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub entity: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub view_type: Option<ViewType>,
    pub audio_feature: Option<AudioFeature>,
    pub x_axis: Option<AudioFeature>,
    pub y_axis: Option<AudioFeature>,
}

/// The subset of [`SelectionState`] consumed by the map and line charts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrimaryFilters {
    pub entity: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub view_type: Option<ViewType>,
}

impl SelectionState {
    /// Extracts the entity, date range and view type.
    pub fn primary_filters(&self) -> PrimaryFilters {
        PrimaryFilters {
            entity: self.entity.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            view_type: self.view_type,
        }
    }
}
