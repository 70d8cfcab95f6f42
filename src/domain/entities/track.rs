//! Track snapshot entity: one row of the top-songs dataset.

use chrono::NaiveDate;

use super::audio_feature::AudioFeature;
use super::selection::ViewType;

/// A track's chart position on one date in one country.
///
/// Numeric columns that failed to parse are stored as `None` rather than
/// rejecting the row.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSnapshot {
    pub name: String,
    pub artists: String,
    pub snapshot_date: Option<NaiveDate>,
    /// Country of the chart; `None` for the global chart.
    pub country: Option<String>,
    pub popularity: Option<f64>,
    pub genre: Option<String>,
    pub features: [Option<f64>; 10],
}

impl TrackSnapshot {
    /// Creates a snapshot with no date, country, popularity or features.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let track = TrackSnapshot::new("Blinding Lights", "The Weeknd")
    ///     .with_feature(AudioFeature::Energy, 0.73);
    /// assert_eq!(track.track_id(), "The Weeknd | Blinding Lights");
    /// ```
    pub fn new(name: impl Into<String>, artists: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artists: artists.into(),
            snapshot_date: None,
            country: None,
            popularity: None,
            genre: None,
            features: [None; 10],
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.snapshot_date = Some(date);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_feature(mut self, feature: AudioFeature, value: f64) -> Self {
        self.features[feature.index()] = Some(value);
        self
    }

    /// Unique track identifier, `"{artists} | {name}"`.
    pub fn track_id(&self) -> String {
        format!("{} | {}", self.artists, self.name)
    }

    pub fn feature(&self, feature: AudioFeature) -> Option<f64> {
        self.features[feature.index()]
    }

    /// Whether this snapshot belongs to `entity` under the given view.
    ///
    /// Without a view type the entity may name either the track or the artists.
    pub fn matches_entity(&self, view: Option<ViewType>, entity: &str) -> bool {
        match view {
            Some(ViewType::Song) => self.track_id() == entity,
            Some(ViewType::Artist) => self.artists == entity,
            None => self.artists == entity || self.track_id() == entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_id() {
        let track = TrackSnapshot::new("Blinding Lights", "The Weeknd");
        assert_eq!(track.track_id(), "The Weeknd | Blinding Lights");
    }

    #[test]
    fn test_feature_accessors() {
        let track = TrackSnapshot::new("Song", "Artist")
            .with_feature(AudioFeature::Energy, 0.8)
            .with_feature(AudioFeature::Tempo, 120.0);

        assert_eq!(track.feature(AudioFeature::Energy), Some(0.8));
        assert_eq!(track.feature(AudioFeature::Tempo), Some(120.0));
        assert_eq!(track.feature(AudioFeature::Valence), None);
    }

    #[test]
    fn test_matches_entity_by_view() {
        let track = TrackSnapshot::new("Shape of You", "Ed Sheeran");

        assert!(track.matches_entity(Some(ViewType::Song), "Ed Sheeran | Shape of You"));
        assert!(!track.matches_entity(Some(ViewType::Song), "Ed Sheeran"));
        assert!(track.matches_entity(Some(ViewType::Artist), "Ed Sheeran"));
        assert!(!track.matches_entity(Some(ViewType::Artist), "Ed Sheeran | Shape of You"));
    }

    #[test]
    fn test_matches_entity_without_view() {
        let track = TrackSnapshot::new("Shape of You", "Ed Sheeran");

        assert!(track.matches_entity(None, "Ed Sheeran"));
        assert!(track.matches_entity(None, "Ed Sheeran | Shape of You"));
        assert!(!track.matches_entity(None, "Dua Lipa"));
    }
}
