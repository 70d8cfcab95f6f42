//! Read-only view of the page's controls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::control::{ControlId, RefreshScope};
use crate::domain::entities::{AudioFeature, SelectionState, ViewType};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The document the binder attaches to and the coordinator reads from.
pub trait ControlDocument {
    /// Whether the control's element exists on the page.
    fn contains(&self, control: ControlId) -> bool;

    /// The control's current value; `None` when the element is missing or
    /// nothing is selected (e.g. no radio checked).
    fn value(&self, control: ControlId) -> Option<String>;
}

/// A document captured as a map of control values.
///
/// A key that is present means the element exists; a `null` value means the
/// element exists but holds nothing.
///
/// ```json
/// { "song-artist-dropdown": "Artist X", "type-radio": null }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlSnapshot {
    controls: BTreeMap<ControlId, Option<String>>,
}

impl ControlSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot where every control exists but none holds a value.
    pub fn all_empty() -> Self {
        ControlId::ALL
            .into_iter()
            .fold(Self::new(), |snapshot, control| snapshot.with_empty(control))
    }

    /// Adds a control holding `value`.
    pub fn with(mut self, control: ControlId, value: impl Into<String>) -> Self {
        self.controls.insert(control, Some(value.into()));
        self
    }

    /// Adds a control that exists but holds no value.
    pub fn with_empty(mut self, control: ControlId) -> Self {
        self.controls.insert(control, None);
        self
    }

    /// Removes a control from the document entirely.
    pub fn without(mut self, control: ControlId) -> Self {
        self.controls.remove(&control);
        self
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl ControlDocument for ControlSnapshot {
    fn contains(&self, control: ControlId) -> bool {
        self.controls.contains_key(&control)
    }

    fn value(&self, control: ControlId) -> Option<String> {
        self.controls.get(&control).cloned().flatten()
    }
}

/// Snapshots the controls a refresh of `scope` needs.
///
/// `All` reads every control, because a full refresh also redraws the
/// dance/energy chart and the scatter plot. The narrower scopes read only
/// their own controls. Missing, empty or unparseable values become `None`.
pub fn read_selection<D>(document: &D, scope: RefreshScope) -> SelectionState
where
    D: ControlDocument + ?Sized,
{
    let mut selection = SelectionState::default();

    if scope == RefreshScope::All {
        selection.entity = text(document, ControlId::SongArtistDropdown);
        selection.start_date = parsed(document, ControlId::StartDate, parse_date);
        selection.end_date = parsed(document, ControlId::EndDate, parse_date);
        selection.view_type = parsed(document, ControlId::TypeRadio, |s| {
            ViewType::from_str(s).ok()
        });
    }

    if matches!(scope, RefreshScope::All | RefreshScope::DanceEnergy) {
        selection.audio_feature = parsed(document, ControlId::AudioFeatureDropdown, |s| {
            AudioFeature::from_str(s).ok()
        });
    }

    if matches!(scope, RefreshScope::All | RefreshScope::Scatter) {
        selection.x_axis = parsed(document, ControlId::XAxisDropdown, |s| {
            AudioFeature::from_str(s).ok()
        });
        selection.y_axis = parsed(document, ControlId::YAxisDropdown, |s| {
            AudioFeature::from_str(s).ok()
        });
    }

    selection
}

fn text<D>(document: &D, control: ControlId) -> Option<String>
where
    D: ControlDocument + ?Sized,
{
    document
        .value(control)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<D, T>(document: &D, control: ControlId, parse: impl Fn(&str) -> Option<T>) -> Option<T>
where
    D: ControlDocument + ?Sized,
{
    let raw = text(document, control)?;
    let value = parse(&raw);
    if value.is_none() {
        tracing::debug!(control = %control, value = %raw, "Unrecognised control value, treating as absent");
    }
    value
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
