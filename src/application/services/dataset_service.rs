//! Dataset lookups that populate the dashboard controls.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::ViewType;
use crate::domain::repositories::TrackRepository;

/// Options for the entity dropdown under one view type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityOptions {
    pub view: ViewType,
    pub options: Vec<String>,
    /// Preselected value: the first option, if any.
    pub default: Option<String>,
}

/// Earliest and latest snapshot dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Service for the dataset facts the page needs before any chart is drawn.
pub struct DatasetService {
    tracks: Arc<dyn TrackRepository>,
}

impl DatasetService {
    pub fn new(tracks: Arc<dyn TrackRepository>) -> Self {
        Self { tracks }
    }

    /// Entity options for `view`; songs when no view is selected.
    pub fn entity_options(&self, view: Option<ViewType>) -> EntityOptions {
        let view = view.unwrap_or(ViewType::Song);
        let options = self.tracks.entity_names(view);
        let default = options.first().cloned();

        EntityOptions {
            view,
            options,
            default,
        }
    }

    /// Date range covered by the dataset, used to bound the date inputs.
    pub fn date_bounds(&self) -> Option<DateBounds> {
        self.tracks
            .date_bounds()
            .map(|(min, max)| DateBounds { min, max })
    }

    /// Number of snapshots loaded.
    pub fn row_count(&self) -> usize {
        self.tracks.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTrackRepository;
    use mockall::predicate::eq;

    #[test]
    fn test_entity_options_default_to_songs() {
        let mut mock = MockTrackRepository::new();
        mock.expect_entity_names()
            .with(eq(ViewType::Song))
            .times(1)
            .returning(|_| vec!["A | One".to_string(), "B | Two".to_string()]);

        let service = DatasetService::new(Arc::new(mock));
        let options = service.entity_options(None);

        assert_eq!(options.view, ViewType::Song);
        assert_eq!(options.options.len(), 2);
        assert_eq!(options.default.as_deref(), Some("A | One"));
    }

    #[test]
    fn test_entity_options_empty_dataset() {
        let mut mock = MockTrackRepository::new();
        mock.expect_entity_names()
            .with(eq(ViewType::Artist))
            .returning(|_| Vec::new());

        let service = DatasetService::new(Arc::new(mock));
        let options = service.entity_options(Some(ViewType::Artist));

        assert!(options.options.is_empty());
        assert!(options.default.is_none());
    }

    #[test]
    fn test_date_bounds() {
        let min = NaiveDate::from_ymd_opt(2023, 10, 18).unwrap();
        let max = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();

        let mut mock = MockTrackRepository::new();
        mock.expect_date_bounds().returning(move || Some((min, max)));
        mock.expect_count().returning(|| 42);

        let service = DatasetService::new(Arc::new(mock));

        assert_eq!(service.date_bounds(), Some(DateBounds { min, max }));
        assert_eq!(service.row_count(), 42);
    }
}
