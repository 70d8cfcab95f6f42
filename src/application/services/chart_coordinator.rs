//! Chart coordination: selection snapshot in, chart updates out.

use serde::Serialize;

use crate::domain::controls::RefreshScope;
use crate::domain::entities::{ChartFilters, ChartKind, SelectionState};
use crate::domain::rendering::{ChartRenderer, RenderError};

/// Charts a full refresh redraws, in dispatch order.
pub const REFRESH_ALL_ORDER: [ChartKind; 4] = [
    ChartKind::ChoroplethMap,
    ChartKind::LineGraph,
    ChartKind::DanceEnergy,
    ChartKind::ScatterPlot,
];

/// A chart operation that failed during a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartFailure {
    pub chart: ChartKind,
    pub reason: String,
}

/// Outcome of one refresh or initialization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    /// Charts whose operation succeeded, in dispatch order.
    pub updated: Vec<ChartKind>,
    /// Charts whose operation failed; later charts still ran.
    pub failed: Vec<ChartFailure>,
}

impl RefreshReport {
    /// Every chart that was dispatched to, successful or not.
    pub fn dispatched(&self) -> usize {
        self.updated.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, chart: ChartKind, result: Result<(), RenderError>) {
        match result {
            Ok(()) => {
                metrics::counter!("dashboard_chart_updates_total", "chart" => chart.container_id())
                    .increment(1);
                self.updated.push(chart);
            }
            Err(e) => {
                tracing::warn!(chart = %chart, error = %e, "Chart operation failed");
                metrics::counter!(
                    "dashboard_chart_update_failures_total",
                    "chart" => chart.container_id()
                )
                .increment(1);
                self.failed.push(ChartFailure {
                    chart,
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Marshals selection state into chart operations.
///
/// The coordinator holds no selection of its own: every refresh takes a
/// fresh [`SelectionState`] and hands each chart only the subset it needs.
/// Operations run synchronously in a fixed order with no rollback.
pub struct ChartCoordinator<R: ChartRenderer> {
    renderer: R,
}

impl<R: ChartRenderer> ChartCoordinator<R> {
    /// Creates a coordinator dispatching to `renderer`.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Releases the renderer, e.g. to collect the figures it produced.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Creates all five charts in page order.
    pub fn initialize(&mut self) -> RefreshReport {
        tracing::debug!("Creating all charts");

        let mut report = RefreshReport::default();
        for chart in ChartKind::ALL {
            let result = self.renderer.create_chart(chart);
            report.record(chart, result);
        }
        report
    }

    /// Redraws the charts covered by `scope`.
    pub fn refresh(&mut self, scope: RefreshScope, selection: &SelectionState) -> RefreshReport {
        match scope {
            RefreshScope::All => self.refresh_all(selection),
            RefreshScope::DanceEnergy => self.refresh_dance_energy(selection),
            RefreshScope::Scatter => self.refresh_scatter(selection),
        }
    }

    /// Redraws the map, line graph, dance/energy chart and scatter plot.
    pub fn refresh_all(&mut self, selection: &SelectionState) -> RefreshReport {
        tracing::info!(
            entity = ?selection.entity,
            start_date = ?selection.start_date,
            end_date = ?selection.end_date,
            view_type = ?selection.view_type,
            "Updating all charts"
        );

        let primary = ChartFilters::Primary(selection.primary_filters());

        let mut report = RefreshReport::default();
        for chart in REFRESH_ALL_ORDER {
            let result = match chart {
                ChartKind::ChoroplethMap | ChartKind::LineGraph => {
                    self.renderer.update_chart(chart, &primary)
                }
                ChartKind::DanceEnergy => self
                    .renderer
                    .update_chart(chart, &Self::feature_filters(selection)),
                _ => self
                    .renderer
                    .update_chart(chart, &Self::axes_filters(selection)),
            };
            report.record(chart, result);
        }
        report
    }

    /// Redraws the dance/energy chart from the selected audio feature.
    pub fn refresh_dance_energy(&mut self, selection: &SelectionState) -> RefreshReport {
        tracing::info!(feature = ?selection.audio_feature, "Updating dance/energy chart");

        let mut report = RefreshReport::default();
        let result = self
            .renderer
            .update_chart(ChartKind::DanceEnergy, &Self::feature_filters(selection));
        report.record(ChartKind::DanceEnergy, result);
        report
    }

    /// Redraws the scatter plot from the selected axes.
    pub fn refresh_scatter(&mut self, selection: &SelectionState) -> RefreshReport {
        tracing::info!(x_axis = ?selection.x_axis, y_axis = ?selection.y_axis, "Updating scatter plot");

        let mut report = RefreshReport::default();
        let result = self
            .renderer
            .update_chart(ChartKind::ScatterPlot, &Self::axes_filters(selection));
        report.record(ChartKind::ScatterPlot, result);
        report
    }

    fn feature_filters(selection: &SelectionState) -> ChartFilters {
        ChartFilters::Feature(selection.audio_feature)
    }

    fn axes_filters(selection: &SelectionState) -> ChartFilters {
        ChartFilters::Axes {
            x: selection.x_axis,
            y: selection.y_axis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AudioFeature, PrimaryFilters, ViewType};
    use crate::domain::rendering::MockChartRenderer;
    use chrono::NaiveDate;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn scenario_selection() -> SelectionState {
        SelectionState {
            entity: Some("Artist X".to_string()),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31),
            view_type: Some(ViewType::Song),
            audio_feature: Some(AudioFeature::Energy),
            x_axis: Some(AudioFeature::Danceability),
            y_axis: Some(AudioFeature::Valence),
        }
    }

    #[test]
    fn test_refresh_all_dispatches_in_order() {
        let selection = scenario_selection();
        let primary = ChartFilters::Primary(PrimaryFilters {
            entity: Some("Artist X".to_string()),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31),
            view_type: Some(ViewType::Song),
        });

        let mut renderer = MockChartRenderer::new();
        let mut seq = Sequence::new();

        renderer
            .expect_update_chart()
            .with(eq(ChartKind::ChoroplethMap), eq(primary.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        renderer
            .expect_update_chart()
            .with(eq(ChartKind::LineGraph), eq(primary))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        renderer
            .expect_update_chart()
            .with(
                eq(ChartKind::DanceEnergy),
                eq(ChartFilters::Feature(Some(AudioFeature::Energy))),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        renderer
            .expect_update_chart()
            .with(
                eq(ChartKind::ScatterPlot),
                eq(ChartFilters::Axes {
                    x: Some(AudioFeature::Danceability),
                    y: Some(AudioFeature::Valence),
                }),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut coordinator = ChartCoordinator::new(renderer);
        let report = coordinator.refresh_all(&selection);

        assert_eq!(report.updated, REFRESH_ALL_ORDER.to_vec());
        assert!(report.is_success());
    }

    #[test]
    fn test_refresh_all_continues_after_failure() {
        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_update_chart()
            .withf(|chart, _| *chart == ChartKind::LineGraph)
            .times(1)
            .returning(|chart, _| {
                Err(RenderError::Unavailable {
                    chart,
                    message: "boom".to_string(),
                })
            });
        renderer
            .expect_update_chart()
            .withf(|chart, _| *chart != ChartKind::LineGraph)
            .times(3)
            .returning(|_, _| Ok(()));

        let mut coordinator = ChartCoordinator::new(renderer);
        let report = coordinator.refresh_all(&SelectionState::default());

        assert_eq!(
            report.updated,
            vec![
                ChartKind::ChoroplethMap,
                ChartKind::DanceEnergy,
                ChartKind::ScatterPlot
            ]
        );
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].chart, ChartKind::LineGraph);
        assert!(report.failed[0].reason.contains("boom"));
        assert_eq!(report.dispatched(), 4);
    }

    #[test]
    fn test_refresh_dance_energy_only_touches_one_chart() {
        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_update_chart()
            .with(eq(ChartKind::DanceEnergy), eq(ChartFilters::Feature(None)))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut coordinator = ChartCoordinator::new(renderer);
        let report = coordinator.refresh(RefreshScope::DanceEnergy, &SelectionState::default());

        assert_eq!(report.updated, vec![ChartKind::DanceEnergy]);
    }

    #[test]
    fn test_refresh_scatter_only_touches_one_chart() {
        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_update_chart()
            .with(
                eq(ChartKind::ScatterPlot),
                eq(ChartFilters::Axes {
                    x: Some(AudioFeature::Danceability),
                    y: Some(AudioFeature::Valence),
                }),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let mut coordinator = ChartCoordinator::new(renderer);
        let report = coordinator.refresh(RefreshScope::Scatter, &scenario_selection());

        assert_eq!(report.updated, vec![ChartKind::ScatterPlot]);
    }

    #[test]
    fn test_initialize_creates_every_chart() {
        let mut renderer = MockChartRenderer::new();
        let mut seq = Sequence::new();
        for chart in ChartKind::ALL {
            renderer
                .expect_create_chart()
                .with(eq(chart))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let mut coordinator = ChartCoordinator::new(renderer);
        let report = coordinator.initialize();

        assert_eq!(report.updated, ChartKind::ALL.to_vec());
    }
}
