//! Production rendering collaborator: dataset aggregates to themed figures.

use std::sync::Arc;

use crate::domain::entities::figure::{
    AxisLayout, GeoLayout, LineStyle, Marker, MarkerColor, Projection, theme,
};
use crate::domain::entities::{
    AudioFeature, ChartFigure, ChartFilters, ChartKind, Country, Figure, Layout, PrimaryFilters,
    Trace, TraceType, Values,
};
use crate::domain::repositories::{SnapshotFilter, TrackRepository};
use crate::domain::rendering::{ChartRenderer, RenderError};

/// Feature shown by the dance/energy chart before the user picks one.
pub const DEFAULT_BAR_FEATURE: AudioFeature = AudioFeature::Energy;
/// Default scatter plot axes.
pub const DEFAULT_SCATTER_AXES: (AudioFeature, AudioFeature) =
    (AudioFeature::Danceability, AudioFeature::Energy);

/// Builds chart figures from the track repository.
///
/// Figures accumulate in the renderer as operations run; a later operation
/// on the same chart replaces the earlier figure. Call
/// [`FigureRenderer::into_figures`] once dispatch is finished.
pub struct FigureRenderer {
    tracks: Arc<dyn TrackRepository>,
    top_n: usize,
    figures: Vec<ChartFigure>,
}

impl FigureRenderer {
    pub fn new(tracks: Arc<dyn TrackRepository>, top_n: usize) -> Self {
        Self {
            tracks,
            top_n,
            figures: Vec::new(),
        }
    }

    /// Figures produced so far, in first-rendered order.
    pub fn figures(&self) -> &[ChartFigure] {
        &self.figures
    }

    pub fn into_figures(self) -> Vec<ChartFigure> {
        self.figures
    }

    fn store(&mut self, chart: ChartKind, figure: Figure) {
        let rendered = ChartFigure::new(chart, figure);
        match self.figures.iter_mut().find(|f| f.chart == chart) {
            Some(existing) => *existing = rendered,
            None => self.figures.push(rendered),
        }
    }

    fn build(&self, chart: ChartKind, filters: &ChartFilters) -> Result<Figure, RenderError> {
        match (chart, filters) {
            (ChartKind::ChoroplethMap, ChartFilters::Primary(p)) => Ok(self.map_figure(p)),
            (ChartKind::LineGraph, ChartFilters::Primary(p)) => Ok(self.line_figure(p)),
            (ChartKind::GenreDistribution, ChartFilters::Unfiltered) => Ok(self.genre_figure()),
            (ChartKind::DanceEnergy, ChartFilters::Feature(feature)) => {
                Ok(self.feature_bar_figure(*feature))
            }
            (ChartKind::ScatterPlot, ChartFilters::Axes { x, y }) => {
                Ok(self.scatter_figure(*x, *y))
            }
            (chart, filters) => Err(RenderError::UnsupportedFilters {
                chart,
                filters: filters_name(filters),
            }),
        }
    }

    fn map_figure(&self, filters: &PrimaryFilters) -> Figure {
        let rows = self
            .tracks
            .popularity_by_country(&SnapshotFilter::from(filters));

        let mut locations = Vec::with_capacity(rows.len());
        let mut names = Vec::with_capacity(rows.len());
        let mut popularity = Vec::with_capacity(rows.len());
        for row in &rows {
            match Country::lookup(&row.country) {
                Some(country) => {
                    locations.push(country.iso3.to_string());
                    names.push(country.name.to_string());
                    popularity.push(row.popularity);
                }
                None => tracing::debug!(country = %row.country, "Unknown country left off the map"),
            }
        }

        let mut trace = Trace::new(TraceType::Choropleth);
        trace.locationmode = Some("ISO-3");
        trace.locations = Some(locations);
        trace.text = Some(names);
        trace.z = Some(popularity);
        trace.colorscale = Some(theme::COLOR_SCALE);

        let mut layout = Layout::themed("Popularity by Country");
        layout.geo = Some(GeoLayout {
            showframe: false,
            showcoastlines: true,
            projection: Projection {
                projection_type: "mercator",
            },
        });

        Figure {
            data: vec![trace],
            layout,
        }
    }

    fn line_figure(&self, filters: &PrimaryFilters) -> Figure {
        let rows = self.tracks.daily_popularity(&SnapshotFilter::from(filters));

        let mut trace = Trace::new(TraceType::Scatter);
        trace.mode = Some("lines");
        trace.name = Some("Popularity".to_string());
        trace.x = Some(Values::Labels(
            rows.iter().map(|r| r.date.format("%Y-%m-%d").to_string()).collect(),
        ));
        trace.y = Some(Values::Numbers(rows.iter().map(|r| r.popularity).collect()));
        trace.line = Some(LineStyle {
            color: theme::ACCENT,
            width: 3.0,
        });

        let title = match &filters.entity {
            Some(entity) => format!("Daily Popularity Trend for {entity}"),
            None => "Daily Popularity Trend".to_string(),
        };
        let mut layout = Layout::themed(title);
        layout.xaxis = Some(AxisLayout::titled("Date"));
        layout.yaxis = Some(AxisLayout::titled("Popularity Score"));

        Figure {
            data: vec![trace],
            layout,
        }
    }

    fn genre_figure(&self) -> Figure {
        let rows = self.tracks.genre_counts(self.top_n);

        let mut trace = Trace::new(TraceType::Bar);
        trace.x = Some(Values::Labels(rows.iter().map(|r| r.genre.clone()).collect()));
        trace.y = Some(Values::Numbers(rows.iter().map(|r| r.tracks as f64).collect()));
        trace.marker = Some(Marker {
            color: Some(MarkerColor::Solid(theme::ACCENT)),
            colorscale: None,
            showscale: None,
            line: Some(LineStyle {
                color: theme::ACCENT_OUTLINE,
                width: 1.5,
            }),
        });

        let mut layout = Layout::themed(format!("Top {} Genres by Song Count", self.top_n));
        layout.xaxis = Some(AxisLayout {
            tickangle: Some(-45),
            ..AxisLayout::titled("Genre")
        });
        layout.yaxis = Some(AxisLayout::titled("Song Count"));

        Figure {
            data: vec![trace],
            layout,
        }
    }

    fn feature_bar_figure(&self, feature: Option<AudioFeature>) -> Figure {
        let Some(feature) = feature else {
            return placeholder("Select an audio feature to display data", "Feature Value", "Song");
        };

        let rows = self.tracks.top_tracks_by_feature(feature, self.top_n);
        let values: Vec<f64> = rows.iter().map(|r| r.value).collect();

        let mut trace = Trace::new(TraceType::Bar);
        trace.orientation = Some("h");
        trace.x = Some(Values::Numbers(values.clone()));
        trace.y = Some(Values::Labels(rows.iter().map(|r| r.track_id.clone()).collect()));
        trace.marker = Some(Marker {
            color: Some(MarkerColor::Scale(values)),
            colorscale: Some(theme::COLOR_SCALE),
            showscale: Some(false),
            line: None,
        });

        let label = feature.label();
        let mut layout = Layout::themed(format!("Top Songs by {label}"));
        layout.xaxis = Some(AxisLayout {
            dtick: Some(0.1),
            range: feature.is_unit_interval().then_some([0.0, 1.0]),
            ..AxisLayout::titled(label)
        });
        layout.yaxis = Some(AxisLayout {
            categoryorder: Some("total ascending"),
            ..AxisLayout::titled("Song")
        });

        Figure {
            data: vec![trace],
            layout,
        }
    }

    fn scatter_figure(&self, x: Option<AudioFeature>, y: Option<AudioFeature>) -> Figure {
        let (Some(x), Some(y)) = (x, y) else {
            return placeholder("Select two audio features to display data", "X", "Y");
        };

        let points = self.tracks.feature_points(x, y);

        let mut trace = Trace::new(TraceType::Scatter);
        trace.mode = Some("markers");
        trace.x = Some(Values::Numbers(points.iter().map(|p| p.x).collect()));
        trace.y = Some(Values::Numbers(points.iter().map(|p| p.y).collect()));
        trace.text = Some(points.iter().map(|p| p.artists.clone()).collect());
        trace.marker = Some(Marker {
            color: Some(MarkerColor::Scale(
                points.iter().map(|p| p.popularity.unwrap_or(0.0)).collect(),
            )),
            colorscale: Some(theme::COLOR_SCALE),
            showscale: Some(true),
            line: None,
        });

        let mut layout = Layout::themed(format!("{} vs {}", x.label(), y.label()));
        layout.xaxis = Some(AxisLayout::titled(x.label()));
        layout.yaxis = Some(AxisLayout::titled(y.label()));

        Figure {
            data: vec![trace],
            layout,
        }
    }
}

impl ChartRenderer for FigureRenderer {
    fn create_chart(&mut self, chart: ChartKind) -> Result<(), RenderError> {
        let filters = match chart {
            ChartKind::ChoroplethMap | ChartKind::LineGraph => {
                ChartFilters::Primary(PrimaryFilters::default())
            }
            ChartKind::GenreDistribution => ChartFilters::Unfiltered,
            ChartKind::DanceEnergy => ChartFilters::Feature(Some(DEFAULT_BAR_FEATURE)),
            ChartKind::ScatterPlot => ChartFilters::Axes {
                x: Some(DEFAULT_SCATTER_AXES.0),
                y: Some(DEFAULT_SCATTER_AXES.1),
            },
        };

        let figure = self.build(chart, &filters)?;
        self.store(chart, figure);
        Ok(())
    }

    fn update_chart(&mut self, chart: ChartKind, filters: &ChartFilters) -> Result<(), RenderError> {
        let figure = self.build(chart, filters)?;
        tracing::debug!(chart = %chart, traces = figure.data.len(), "Chart figure rebuilt");
        self.store(chart, figure);
        Ok(())
    }
}

/// An empty figure with a prompt as its title and hidden axes.
fn placeholder(title: &str, x_title: &str, y_title: &str) -> Figure {
    let mut layout = Layout::themed(title);
    layout.showlegend = Some(false);
    layout.xaxis = Some(AxisLayout {
        title: Some(x_title.to_string()),
        ..AxisLayout::hidden()
    });
    layout.yaxis = Some(AxisLayout {
        title: Some(y_title.to_string()),
        ..AxisLayout::hidden()
    });

    Figure {
        data: Vec::new(),
        layout,
    }
}

fn filters_name(filters: &ChartFilters) -> &'static str {
    match filters {
        ChartFilters::Primary(_) => "entity/date",
        ChartFilters::Feature(_) => "audio feature",
        ChartFilters::Axes { .. } => "axis",
        ChartFilters::Unfiltered => "empty",
    }
}
