//! In-memory implementation of [`TrackRepository`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::NaiveDate;

use super::csv_loader::{self, DatasetError};
use crate::domain::entities::{AudioFeature, TrackSnapshot, ViewType};
use crate::domain::repositories::{
    CountryPopularity, DailyPopularity, FeaturePoint, FeatureRanking, GenreCount, SnapshotFilter,
    TrackRepository,
};

/// Running mean accumulator.
#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Read-only dataset held entirely in memory.
///
/// Aggregations scan the snapshot list on every call; the dataset is
/// immutable after loading, so the repository is freely shared across
/// request handlers.
#[derive(Debug, Default)]
pub struct InMemoryTrackRepository {
    snapshots: Vec<TrackSnapshot>,
}

impl InMemoryTrackRepository {
    pub fn new(snapshots: Vec<TrackSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Loads the repository from a CSV file.
    ///
    /// # Errors
    ///
    /// Propagates [`DatasetError`] from the loader.
    pub fn from_csv_path(path: &Path) -> Result<Self, DatasetError> {
        Ok(Self::new(csv_loader::load_path(path)?))
    }

    fn filtered<'a>(&'a self, filter: &'a SnapshotFilter) -> impl Iterator<Item = &'a TrackSnapshot> {
        self.snapshots.iter().filter(move |s| filter.matches(s))
    }
}

impl TrackRepository for InMemoryTrackRepository {
    fn count(&self) -> usize {
        self.snapshots.len()
    }

    fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.snapshots.iter().filter_map(|s| s.snapshot_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
    }

    fn entity_names(&self, view_type: ViewType) -> Vec<String> {
        let names: BTreeSet<String> = self
            .snapshots
            .iter()
            .map(|s| match view_type {
                ViewType::Song => s.track_id(),
                ViewType::Artist => s.artists.clone(),
            })
            .collect();

        names.into_iter().collect()
    }

    fn popularity_by_country(&self, filter: &SnapshotFilter) -> Vec<CountryPopularity> {
        let mut by_country: BTreeMap<&str, Mean> = BTreeMap::new();
        for snapshot in self.filtered(filter) {
            if let (Some(country), Some(popularity)) = (&snapshot.country, snapshot.popularity) {
                by_country.entry(country.as_str()).or_default().add(popularity);
            }
        }

        by_country
            .into_iter()
            .filter_map(|(country, mean)| {
                mean.value().map(|popularity| CountryPopularity {
                    country: country.to_string(),
                    popularity,
                })
            })
            .collect()
    }

    fn daily_popularity(&self, filter: &SnapshotFilter) -> Vec<DailyPopularity> {
        let mut by_date: BTreeMap<NaiveDate, Mean> = BTreeMap::new();
        for snapshot in self.filtered(filter) {
            if let (Some(date), Some(popularity)) = (snapshot.snapshot_date, snapshot.popularity) {
                by_date.entry(date).or_default().add(popularity);
            }
        }

        by_date
            .into_iter()
            .filter_map(|(date, mean)| {
                mean.value()
                    .map(|popularity| DailyPopularity { date, popularity })
            })
            .collect()
    }

    fn top_tracks_by_feature(&self, feature: AudioFeature, limit: usize) -> Vec<FeatureRanking> {
        let mut by_track: BTreeMap<String, Mean> = BTreeMap::new();
        for snapshot in &self.snapshots {
            if let Some(value) = snapshot.feature(feature) {
                by_track.entry(snapshot.track_id()).or_default().add(value);
            }
        }

        let mut rankings: Vec<FeatureRanking> = by_track
            .into_iter()
            .filter_map(|(track_id, mean)| {
                mean.value().map(|value| FeatureRanking { track_id, value })
            })
            .collect();

        // Stable sort keeps ties in track id order.
        rankings.sort_by(|a, b| b.value.total_cmp(&a.value));
        rankings.truncate(limit);
        rankings
    }

    /// Averages every row of a track into one point; rows missing either
    /// feature do not contribute.
    fn feature_points(&self, x: AudioFeature, y: AudioFeature) -> Vec<FeaturePoint> {
        struct Accumulator<'a> {
            artists: &'a str,
            x: Mean,
            y: Mean,
            popularity: Mean,
        }

        let mut by_track: BTreeMap<String, Accumulator<'_>> = BTreeMap::new();
        for snapshot in &self.snapshots {
            let (Some(x_value), Some(y_value)) = (snapshot.feature(x), snapshot.feature(y)) else {
                continue;
            };

            let entry = by_track
                .entry(snapshot.track_id())
                .or_insert_with(|| Accumulator {
                    artists: &snapshot.artists,
                    x: Mean::default(),
                    y: Mean::default(),
                    popularity: Mean::default(),
                });
            entry.x.add(x_value);
            entry.y.add(y_value);
            if let Some(popularity) = snapshot.popularity {
                entry.popularity.add(popularity);
            }
        }

        by_track
            .into_iter()
            .filter_map(|(track_id, acc)| {
                Some(FeaturePoint {
                    track_id,
                    artists: acc.artists.to_string(),
                    x: acc.x.value()?,
                    y: acc.y.value()?,
                    popularity: acc.popularity.value(),
                })
            })
            .collect()
    }

    fn genre_counts(&self, limit: usize) -> Vec<GenreCount> {
        let mut by_genre: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
        for snapshot in &self.snapshots {
            if let Some(genre) = &snapshot.genre {
                by_genre
                    .entry(genre.as_str())
                    .or_default()
                    .insert(snapshot.track_id());
            }
        }

        let mut counts: Vec<GenreCount> = by_genre
            .into_iter()
            .map(|(genre, tracks)| GenreCount {
                genre: genre.to_string(),
                tracks: tracks.len(),
            })
            .collect();

        counts.sort_by(|a, b| b.tracks.cmp(&a.tracks));
        counts.truncate(limit);
        counts
    }
}
