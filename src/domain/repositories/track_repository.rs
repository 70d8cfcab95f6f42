//! Repository trait for the listening-history dataset.

use crate::domain::entities::{AudioFeature, PrimaryFilters, TrackSnapshot, ViewType};
use chrono::NaiveDate;

/// Mean popularity of the filtered snapshots in one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryPopularity {
    pub country: String,
    pub popularity: f64,
}

/// Mean popularity of the filtered snapshots on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPopularity {
    pub date: NaiveDate,
    pub popularity: f64,
}

/// Mean value of one audio feature for a track.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRanking {
    pub track_id: String,
    pub value: f64,
}

/// One scatter point per track.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePoint {
    pub track_id: String,
    pub artists: String,
    pub x: f64,
    pub y: f64,
    pub popularity: Option<f64>,
}

/// Number of distinct tracks in one genre.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub tracks: usize,
}

/// Filter criteria for snapshot queries.
///
/// Every criterion is optional; `None` means "no filter". Date bounds are
/// inclusive and are not checked against each other, so an inverted range
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotFilter {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub view_type: Option<ViewType>,
    pub entity: Option<String>,
}

impl SnapshotFilter {
    /// Creates a filter that matches every snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds date range filtering to the query.
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from_date = from;
        self.to_date = to;
        self
    }

    /// Adds entity filtering under the given view type.
    pub fn with_entity(mut self, view_type: Option<ViewType>, entity: Option<String>) -> Self {
        self.view_type = view_type;
        self.entity = entity;
        self
    }

    /// Whether a snapshot passes every criterion.
    pub fn matches(&self, snapshot: &TrackSnapshot) -> bool {
        if self.from_date.is_some() || self.to_date.is_some() {
            let Some(date) = snapshot.snapshot_date else {
                return false;
            };
            if self.from_date.is_some_and(|from| date < from) {
                return false;
            }
            if self.to_date.is_some_and(|to| date > to) {
                return false;
            }
        }

        match &self.entity {
            Some(entity) => snapshot.matches_entity(self.view_type, entity),
            None => true,
        }
    }
}

impl From<&PrimaryFilters> for SnapshotFilter {
    fn from(filters: &PrimaryFilters) -> Self {
        SnapshotFilter::new()
            .with_date_range(filters.start_date, filters.end_date)
            .with_entity(filters.view_type, filters.entity.clone())
    }
}

/// Read-only access to the listening-history dataset.
///
/// Aggregations live behind the trait so chart rendering never walks raw rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::dataset::InMemoryTrackRepository`] - CSV-backed dataset held in memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait TrackRepository: Send + Sync {
    /// Number of snapshots in the dataset.
    fn count(&self) -> usize;

    /// Earliest and latest snapshot dates, or `None` when no row has a date.
    fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)>;

    /// Sorted unique entity names: track ids for songs, artists for artists.
    fn entity_names(&self, view_type: ViewType) -> Vec<String>;

    /// Mean popularity per country, sorted by country name.
    ///
    /// Snapshots without a country (the global chart) or popularity are skipped.
    fn popularity_by_country(&self, filter: &SnapshotFilter) -> Vec<CountryPopularity>;

    /// Mean popularity per snapshot date, in ascending date order.
    fn daily_popularity(&self, filter: &SnapshotFilter) -> Vec<DailyPopularity>;

    /// Tracks with the highest mean value of `feature`, descending.
    fn top_tracks_by_feature(&self, feature: AudioFeature, limit: usize) -> Vec<FeatureRanking>;

    /// One point per track having both features, sorted by track id.
    ///
    /// A track charting on several days or in several markets is averaged
    /// into a single point (x, y and popularity are per-track means), so the
    /// scatter plot shows tracks rather than individual chart rows.
    fn feature_points(&self, x: AudioFeature, y: AudioFeature) -> Vec<FeaturePoint>;

    /// Genres with the most distinct tracks, descending.
    fn genre_counts(&self, limit: usize) -> Vec<GenreCount>;
}
