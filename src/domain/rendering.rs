//! Rendering collaborator interface.
//!
//! The chart coordinator never draws anything itself. It marshals filters
//! into a [`ChartRenderer`], which is injected so tests can substitute a
//! recording double for the real figure builder.

use crate::domain::entities::{ChartFilters, ChartKind};

/// Errors a renderer may report for a single chart operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Chart '{chart}' does not accept {filters} filters")]
    UnsupportedFilters {
        chart: ChartKind,
        filters: &'static str,
    },

    #[error("Chart '{chart}' could not be rendered: {message}")]
    Unavailable { chart: ChartKind, message: String },
}

impl RenderError {
    /// The chart the failed operation targeted.
    pub fn chart(&self) -> ChartKind {
        match self {
            RenderError::UnsupportedFilters { chart, .. } => *chart,
            RenderError::Unavailable { chart, .. } => *chart,
        }
    }
}

/// Create/update capability per chart kind.
///
/// # Implementations
///
/// - [`crate::application::services::FigureRenderer`] - Builds themed figures from the dataset
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer {
    /// Draws a chart for the first time with its default inputs.
    fn create_chart(&mut self, chart: ChartKind) -> Result<(), RenderError>;

    /// Redraws an existing chart with new filters.
    fn update_chart(&mut self, chart: ChartKind, filters: &ChartFilters) -> Result<(), RenderError>;
}
