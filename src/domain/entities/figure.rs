//! Plotly-compatible figure model emitted to the dashboard page.
//!
//! Figures serialize to the `{ "data": [...], "layout": {...} }` shape the
//! page passes straight to `Plotly.react`.

use serde::Serialize;

use super::chart::ChartKind;

/// Dashboard colour theme.
pub mod theme {
    pub const BACKGROUND: &str = "#282828";
    pub const FONT: &str = "#FFFFFF";
    pub const ACCENT: &str = "#1DB954";
    pub const ACCENT_OUTLINE: &str = "#1ed760";
    pub const COLOR_SCALE: &str = "Cividis";
}

/// A complete chart figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// A figure bound to the chart it was rendered for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub chart: ChartKind,
    pub container_id: &'static str,
    pub figure: Figure,
}

impl ChartFigure {
    pub fn new(chart: ChartKind, figure: Figure) -> Self {
        Self {
            chart,
            container_id: chart.container_id(),
            figure,
        }
    }
}

/// Axis values: either numbers or category labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Numbers(v) => v.len(),
            Values::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Choropleth,
    Scatter,
    Bar,
}

/// A single data series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locationmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    /// An empty trace of the given type; fields are filled in by the caller.
    pub fn new(trace_type: TraceType) -> Self {
        Self {
            trace_type,
            name: None,
            x: None,
            y: None,
            locations: None,
            locationmode: None,
            z: None,
            text: None,
            mode: None,
            orientation: None,
            colorscale: None,
            line: None,
            marker: None,
        }
    }

    /// Number of data points in the trace.
    pub fn point_count(&self) -> usize {
        if let Some(locations) = &self.locations {
            return locations.len();
        }
        self.x.as_ref().map(Values::len).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Solid(&'static str),
    Scale(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Layout {
    /// A layout with the dashboard theme applied and no axes configured.
    pub fn themed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paper_bgcolor: theme::BACKGROUND,
            plot_bgcolor: theme::BACKGROUND,
            font: Font { color: theme::FONT },
            margin: Margin {
                l: 20,
                r: 20,
                t: 40,
                b: 20,
            },
            xaxis: None,
            yaxis: None,
            geo: None,
            showlegend: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl AxisLayout {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// An axis hidden from view, used for placeholder figures.
    pub fn hidden() -> Self {
        Self {
            showgrid: Some(false),
            visible: Some(false),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLayout {
    pub showframe: bool,
    pub showcoastlines: bool,
    pub projection: Projection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub projection_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_serializes_type_and_skips_empty_fields() {
        let mut trace = Trace::new(TraceType::Bar);
        trace.x = Some(Values::Labels(vec!["Pop".to_string()]));
        trace.y = Some(Values::Numbers(vec![3.0]));

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value, json!({ "type": "bar", "x": ["Pop"], "y": [3.0] }));
    }

    #[test]
    fn test_themed_layout() {
        let layout = Layout::themed("Title");
        let value = serde_json::to_value(&layout).unwrap();

        assert_eq!(value["paper_bgcolor"], "#282828");
        assert_eq!(value["font"]["color"], "#FFFFFF");
        assert_eq!(value["margin"]["t"], 40);
        assert!(value.get("xaxis").is_none());
    }

    #[test]
    fn test_point_count_prefers_locations() {
        let mut trace = Trace::new(TraceType::Choropleth);
        trace.locations = Some(vec!["Brazil".to_string(), "Japan".to_string()]);
        assert_eq!(trace.point_count(), 2);

        let empty = Trace::new(TraceType::Scatter);
        assert_eq!(empty.point_count(), 0);
    }
}
