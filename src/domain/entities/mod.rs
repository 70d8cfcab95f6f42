//! Core domain entities for the listening dashboard.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`TrackSnapshot`] - One row of the top-songs dataset
//! - [`SelectionState`] - Immutable snapshot of the dashboard controls
//! - [`AudioFeature`] - Numeric track characteristics
//! - [`Country`] - Market country codes for the map
//! - [`ChartKind`] / [`ChartFilters`] - The five dashboard charts and their inputs
//! - [`Figure`] - Plotly-compatible chart output

pub mod audio_feature;
pub mod chart;
pub mod country;
pub mod figure;
pub mod selection;
pub mod track;

pub use audio_feature::{AudioFeature, ParseAudioFeatureError};
pub use chart::{ChartFilters, ChartKind};
pub use country::Country;
pub use figure::{ChartFigure, Figure, Layout, Trace, TraceType, Values};
pub use selection::{ParseViewTypeError, PrimaryFilters, SelectionState, ViewType};
pub use track::TrackSnapshot;
