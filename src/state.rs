use std::sync::Arc;

use crate::application::services::{ChartCoordinator, DatasetService, FigureRenderer};
use crate::config::{Config, DEFAULT_TOP_N};
use crate::domain::controls::{DEFAULT_FOOTER_OFFSET_PX, FooterAnchor};
use crate::domain::repositories::TrackRepository;

/// Per-process dashboard settings taken from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    pub footer_offset_px: u32,
    pub top_n: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            footer_offset_px: DEFAULT_FOOTER_OFFSET_PX,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl From<&Config> for DashboardSettings {
    fn from(config: &Config) -> Self {
        Self {
            footer_offset_px: config.footer_offset_px,
            top_n: config.top_n,
        }
    }
}

/// Shared state handed to every handler.
///
/// Only the immutable dataset is shared; each request builds its own
/// renderer and coordinator through [`AppState::coordinator`].
#[derive(Clone)]
pub struct AppState {
    pub tracks: Arc<dyn TrackRepository>,
    pub dataset_service: Arc<DatasetService>,
    pub settings: DashboardSettings,
}

impl AppState {
    pub fn new(tracks: Arc<dyn TrackRepository>, settings: DashboardSettings) -> Self {
        let dataset_service = Arc::new(DatasetService::new(tracks.clone()));

        Self {
            tracks,
            dataset_service,
            settings,
        }
    }

    /// A fresh coordinator drawing into a figure renderer over the dataset.
    pub fn coordinator(&self) -> ChartCoordinator<FigureRenderer> {
        ChartCoordinator::new(FigureRenderer::new(
            self.tracks.clone(),
            self.settings.top_n,
        ))
    }

    pub fn footer_anchor(&self) -> FooterAnchor {
        FooterAnchor::new(self.settings.footer_offset_px)
    }
}
