//! CSV loading for the top-songs dataset.
//!
//! Headers are normalised (trimmed, lowercased, whitespace to `_`) so
//! `Snapshot Date` and `snapshot_date` name the same column. Cell values
//! that fail to parse are coerced to `None` instead of rejecting the row.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::entities::{AudioFeature, TrackSnapshot};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Errors that can occur while loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open dataset '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset header: {0}")]
    Header(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    artists: usize,
    snapshot_date: Option<usize>,
    country: Option<usize>,
    popularity: Option<usize>,
    genre: Option<usize>,
    features: [Option<usize>; 10],
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (normalize_header(h), i))
            .collect();

        let required = |column: &'static str| {
            index
                .get(column)
                .copied()
                .ok_or(DatasetError::MissingColumn(column))
        };

        let mut features = [None; 10];
        for feature in AudioFeature::ALL {
            features[feature.index()] = index.get(feature.column()).copied();
        }

        Ok(Self {
            name: required("name")?,
            artists: required("artists")?,
            snapshot_date: index.get("snapshot_date").copied(),
            country: index.get("country").copied(),
            popularity: index.get("popularity").copied(),
            genre: index.get("genre").copied(),
            features,
        })
    }

    fn snapshot(&self, record: &csv::StringRecord) -> TrackSnapshot {
        let cell = |i: Option<usize>| {
            i.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let mut snapshot = TrackSnapshot::new(
            record.get(self.name).unwrap_or_default().trim(),
            record.get(self.artists).unwrap_or_default().trim(),
        );
        snapshot.snapshot_date = cell(self.snapshot_date).and_then(parse_date);
        snapshot.country = cell(self.country).map(str::to_string);
        snapshot.popularity = cell(self.popularity).and_then(|v| v.parse().ok());
        snapshot.genre = cell(self.genre).map(str::to_string);
        for feature in AudioFeature::ALL {
            snapshot.features[feature.index()] =
                cell(self.features[feature.index()]).and_then(|v| v.parse().ok());
        }
        snapshot
    }
}

/// Loads every snapshot from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError::Open`] if the file cannot be opened,
/// [`DatasetError::Header`] if the header row is unreadable and
/// [`DatasetError::MissingColumn`] if `name` or `artists` is absent.
pub fn load_path(path: &Path) -> Result<Vec<TrackSnapshot>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    load_reader(file)
}

/// Loads every snapshot from CSV data.
///
/// Rows the CSV parser cannot read are logged and skipped.
pub fn load_reader<R: Read>(reader: R) -> Result<Vec<TrackSnapshot>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?)?;

    let mut snapshots = Vec::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        match result {
            Ok(record) => snapshots.push(columns.snapshot(&record)),
            Err(e) => {
                skipped += 1;
                tracing::warn!(error = %e, "Skipping unreadable dataset row");
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "Some dataset rows could not be read");
    }
    tracing::debug!(rows = snapshots.len(), "Dataset parsed");

    Ok(snapshots)
}

/// Normalises a header the way the dataset columns are referenced.
pub fn normalize_header(header: &str) -> String {
    WHITESPACE
        .replace_all(header.trim(), "_")
        .to_lowercase()
}

/// Parses `YYYY-MM-DD`, ignoring any time component that follows.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
spotify_id,Name,Artists, Snapshot Date ,Country,Popularity,danceability,energy,tempo
1,Blinding Lights,The Weeknd,2024-01-02,BR,95,0.51,0.73,171.0
2,Espresso,Sabrina Carpenter,not-a-date,,88,0.70,n/a,104.0
";

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Snapshot Date "), "snapshot_date");
        assert_eq!(normalize_header("Duration\tMS"), "duration_ms");
        assert_eq!(normalize_header("energy"), "energy");
    }

    #[test]
    fn test_load_reader_parses_rows() {
        let rows = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.track_id(), "The Weeknd | Blinding Lights");
        assert_eq!(first.snapshot_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(first.country.as_deref(), Some("BR"));
        assert_eq!(first.popularity, Some(95.0));
        assert_eq!(first.feature(AudioFeature::Energy), Some(0.73));
        assert_eq!(first.feature(AudioFeature::Tempo), Some(171.0));
        assert_eq!(first.feature(AudioFeature::Valence), None);
    }

    #[test]
    fn test_unparseable_cells_are_coerced_to_none() {
        let rows = load_reader(SAMPLE.as_bytes()).unwrap();
        let second = &rows[1];

        assert!(second.snapshot_date.is_none());
        assert!(second.country.is_none());
        assert!(second.feature(AudioFeature::Energy).is_none());
        assert_eq!(second.feature(AudioFeature::Danceability), Some(0.70));
    }

    #[test]
    fn test_datetime_values_keep_the_date() {
        let csv = "name,artists,snapshot_date\nSong,Artist,2024-03-05 00:00:00\n";
        let rows = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].snapshot_date, NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "name,country\nSong,US\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("artists")));
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = load_path(Path::new("/nonexistent/dataset.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/dataset.csv"));
    }
}
