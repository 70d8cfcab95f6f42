//! Audio features tracked per song in the listening dataset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string does not name a known audio feature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown audio feature: '{0}'")]
pub struct ParseAudioFeatureError(pub String);

/// A numeric audio characteristic of a track.
///
/// Variants map one-to-one onto dataset columns (see [`AudioFeature::column`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFeature {
    Danceability,
    Energy,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
    Speechiness,
    Loudness,
    DurationMs,
}

impl AudioFeature {
    /// All features in dropdown order.
    pub const ALL: [AudioFeature; 10] = [
        AudioFeature::Danceability,
        AudioFeature::Energy,
        AudioFeature::Acousticness,
        AudioFeature::Instrumentalness,
        AudioFeature::Liveness,
        AudioFeature::Valence,
        AudioFeature::Tempo,
        AudioFeature::Speechiness,
        AudioFeature::Loudness,
        AudioFeature::DurationMs,
    ];

    /// Dataset column name for this feature.
    pub fn column(self) -> &'static str {
        match self {
            AudioFeature::Danceability => "danceability",
            AudioFeature::Energy => "energy",
            AudioFeature::Acousticness => "acousticness",
            AudioFeature::Instrumentalness => "instrumentalness",
            AudioFeature::Liveness => "liveness",
            AudioFeature::Valence => "valence",
            AudioFeature::Tempo => "tempo",
            AudioFeature::Speechiness => "speechiness",
            AudioFeature::Loudness => "loudness",
            AudioFeature::DurationMs => "duration_ms",
        }
    }

    /// Position of this feature in [`AudioFeature::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label: the column name with its first letter capitalized.
    pub fn label(self) -> String {
        let column = self.column();
        let mut chars = column.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether values of this feature are bounded to `[0, 1]` and should be
    /// plotted on a fixed axis.
    pub fn is_unit_interval(self) -> bool {
        matches!(
            self,
            AudioFeature::Danceability | AudioFeature::Energy | AudioFeature::Valence
        )
    }
}

impl fmt::Display for AudioFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for AudioFeature {
    type Err = ParseAudioFeatureError;

    /// Parses a feature name case-insensitively, accepting both column names
    /// (`duration_ms`) and dropdown labels (`Duration ms`, `Danceability`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");

        AudioFeature::ALL
            .into_iter()
            .find(|feature| feature.column() == normalized)
            .ok_or_else(|| ParseAudioFeatureError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Danceability".parse::<AudioFeature>(),
            Ok(AudioFeature::Danceability)
        );
        assert_eq!("ENERGY".parse::<AudioFeature>(), Ok(AudioFeature::Energy));
        assert_eq!(
            " duration ms ".parse::<AudioFeature>(),
            Ok(AudioFeature::DurationMs)
        );
    }

    #[test]
    fn test_parse_unknown_feature() {
        let err = "popularity".parse::<AudioFeature>().unwrap_err();
        assert_eq!(err, ParseAudioFeatureError("popularity".to_string()));
    }

    #[test]
    fn test_label_capitalizes_first_letter() {
        assert_eq!(AudioFeature::Valence.label(), "Valence");
        assert_eq!(AudioFeature::DurationMs.label(), "Duration_ms");
    }

    #[test]
    fn test_index_matches_all_order() {
        for (position, feature) in AudioFeature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), position);
        }
    }

    #[test]
    fn test_unit_interval_features() {
        assert!(AudioFeature::Energy.is_unit_interval());
        assert!(!AudioFeature::Tempo.is_unit_interval());
        assert!(!AudioFeature::Loudness.is_unit_interval());
    }
}
