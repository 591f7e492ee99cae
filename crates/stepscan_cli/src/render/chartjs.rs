//! Chart.js-compatible JSON renderer.
//!
//! Emits a scatter chart document whose datasets draw connecting lines, so
//! it can be fed straight to `new Chart(ctx, config)` in a browser.

use serde::Serialize;
use std::io::{self, Write};
use stepscan_core::plot::{GuideLine, LineStyle, PlotFrame, PlotSeries, Renderer, SeriesRole};

// =============================================================================
// Chart.js document structure
// =============================================================================

/// One `{x, y}` data point
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChartJsPoint {
    /// Abscissa
    pub x: f64,
    /// Ordinate
    pub y: f64,
}

/// Chart.js dataset
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    /// Legend label
    pub label: String,
    /// Points
    pub data: Vec<ChartJsPoint>,
    /// Line colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Dash pattern, empty for solid
    pub border_dash: Vec<u32>,
    /// Connect points with a line
    pub show_line: bool,
    /// Marker radius
    pub point_radius: u32,
}

/// Chart.js data block
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsData {
    /// Datasets in drawing order
    pub datasets: Vec<ChartJsDataset>,
}

/// Chart.js axis options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsScale {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Axis title
    pub title: ChartJsTitleOptions,
}

/// Chart.js scales block
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsScales {
    /// Horizontal axis
    pub x: ChartJsScale,
    /// Vertical axis
    pub y: ChartJsScale,
}

/// Chart.js title options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsTitleOptions {
    /// Title visibility
    pub display: bool,
    /// Title text
    pub text: String,
}

/// Chart.js plugin options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsPlugins {
    /// Chart title
    pub title: ChartJsTitleOptions,
    /// Result summary
    pub subtitle: ChartJsTitleOptions,
}

/// Chart.js options
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsOptions {
    /// Axes
    pub scales: ChartJsScales,
    /// Title and subtitle
    pub plugins: ChartJsPlugins,
}

/// Complete Chart.js configuration
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsChart {
    /// Chart type
    #[serde(rename = "type")]
    pub chart_type: String,
    /// Chart data
    pub data: ChartJsData,
    /// Chart options
    pub options: ChartJsOptions,
}

// =============================================================================
// Renderer
// =============================================================================

/// Writes each frame as a pretty-printed Chart.js configuration.
///
/// Guide lines become two-point dashed datasets so no annotation plugin is
/// needed.
pub struct ChartJsRenderer<W: Write> {
    out: W,
}

impl<W: Write> ChartJsRenderer<W> {
    /// Renderer writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ChartJsRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, frame: &PlotFrame) -> io::Result<()> {
        let chart = to_chartjs(frame);
        serde_json::to_writer_pretty(&mut self.out, &chart)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Convert a frame into the Chart.js document structure
pub fn to_chartjs(frame: &PlotFrame) -> ChartJsChart {
    let mut datasets: Vec<ChartJsDataset> = frame.series.iter().map(series_dataset).collect();
    datasets.extend(frame.guides.iter().map(|g| guide_dataset(g, frame)));

    ChartJsChart {
        chart_type: "scatter".to_string(),
        data: ChartJsData { datasets },
        options: ChartJsOptions {
            scales: ChartJsScales {
                x: ChartJsScale {
                    min: frame.x_axis.min,
                    max: frame.x_axis.max,
                    title: ChartJsTitleOptions {
                        display: true,
                        text: frame.x_axis.title.clone(),
                    },
                },
                y: ChartJsScale {
                    min: frame.y_axis.min,
                    max: frame.y_axis.max,
                    title: ChartJsTitleOptions {
                        display: true,
                        text: frame.y_axis.title.clone(),
                    },
                },
            },
            plugins: ChartJsPlugins {
                title: ChartJsTitleOptions {
                    display: true,
                    text: frame.title.clone(),
                },
                subtitle: ChartJsTitleOptions {
                    display: frame.status.is_some(),
                    text: frame.status.clone().unwrap_or_default(),
                },
            },
        },
    }
}

fn series_dataset(series: &PlotSeries) -> ChartJsDataset {
    ChartJsDataset {
        label: series.name.clone(),
        data: series
            .points
            .iter()
            .map(|p| ChartJsPoint { x: p.x, y: p.y })
            .collect(),
        border_color: series.style.color.hex().map(str::to_string),
        border_dash: dash_pattern(series.style.line),
        show_line: series.role != SeriesRole::Solution,
        point_radius: match series.role {
            SeriesRole::Curve => 0,
            SeriesRole::Trail => 2,
            SeriesRole::Solution => 5,
        },
    }
}

fn guide_dataset(guide: &GuideLine, frame: &PlotFrame) -> ChartJsDataset {
    let [(x0, y0), (x1, y1)] = guide.endpoints(&frame.x_axis, &frame.y_axis);
    ChartJsDataset {
        label: String::new(),
        data: vec![ChartJsPoint { x: x0, y: y0 }, ChartJsPoint { x: x1, y: y1 }],
        border_color: guide.style.color.hex().map(str::to_string),
        border_dash: dash_pattern(guide.style.line),
        show_line: true,
        point_radius: 0,
    }
}

fn dash_pattern(line: LineStyle) -> Vec<u32> {
    match line {
        LineStyle::Solid => Vec::new(),
        LineStyle::Dash => vec![6, 4],
    }
}
