//! Chart kinds shown on the dashboard and the filters each one accepts.

use serde::Serialize;
use std::fmt;

use super::audio_feature::AudioFeature;
use super::selection::PrimaryFilters;

/// One of the five charts on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    ChoroplethMap,
    LineGraph,
    GenreDistribution,
    DanceEnergy,
    ScatterPlot,
}

impl ChartKind {
    /// Creation order used when the page first loads.
    pub const ALL: [ChartKind; 5] = [
        ChartKind::ChoroplethMap,
        ChartKind::LineGraph,
        ChartKind::GenreDistribution,
        ChartKind::DanceEnergy,
        ChartKind::ScatterPlot,
    ];

    /// Element id of the container the chart is drawn into.
    pub fn container_id(self) -> &'static str {
        match self {
            ChartKind::ChoroplethMap => "choropleth-map",
            ChartKind::LineGraph => "line-graph",
            ChartKind::GenreDistribution => "genre-distribution",
            ChartKind::DanceEnergy => "dance-energy-chart",
            ChartKind::ScatterPlot => "scatter-plot",
        }
    }

    /// Section heading shown above the chart.
    pub fn heading(self) -> &'static str {
        match self {
            ChartKind::ChoroplethMap => "Global Music Popularity by Region",
            ChartKind::LineGraph => "Popularity Over Time",
            ChartKind::GenreDistribution => "Genre Distribution",
            ChartKind::DanceEnergy => "Top Songs by Selected Audio Feature",
            ChartKind::ScatterPlot => "Song Popularity vs. Audio Features",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_id())
    }
}

/// Filters passed to a single chart update.
///
/// Each chart consumes only its own subset of the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartFilters {
    /// Entity, date range and view type (map and line graph).
    Primary(PrimaryFilters),
    /// Selected audio feature (dance/energy chart).
    Feature(Option<AudioFeature>),
    /// Scatter plot axes.
    Axes {
        x: Option<AudioFeature>,
        y: Option<AudioFeature>,
    },
    /// No filters apply (genre distribution).
    Unfiltered,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_container_ids_are_unique() {
        let ids: HashSet<_> = ChartKind::ALL.iter().map(|c| c.container_id()).collect();
        assert_eq!(ids.len(), ChartKind::ALL.len());
    }

    #[test]
    fn test_display_uses_container_id() {
        assert_eq!(ChartKind::DanceEnergy.to_string(), "dance-energy-chart");
    }
}
