//! The complete payload of one render call.

use super::series::{PlotSeries, SeriesColor, SeriesRole, SeriesStyle};

/// Visible range and title of one axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBounds {
    /// Axis title
    pub title: String,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl AxisBounds {
    /// Axis with the given title and bounds.
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            title: title.into(),
            min,
            max,
        }
    }

    /// Bounds as an array, the shape chart widgets take.
    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

/// Orientation of a reference guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GuideOrientation {
    /// `y = value`
    Horizontal,
    /// `x = value`
    Vertical,
}

/// A reference line spanning the whole plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideLine {
    /// Orientation
    pub orientation: GuideOrientation,
    /// Position on the perpendicular axis
    pub value: f64,
    /// Display hints
    pub style: SeriesStyle,
}

impl GuideLine {
    /// Grey dashed line at `y = value`.
    pub fn horizontal(value: f64) -> Self {
        Self {
            orientation: GuideOrientation::Horizontal,
            value,
            style: SeriesStyle::dashed(SeriesColor::Gray),
        }
    }

    /// Grey dashed line at `x = value`.
    pub fn vertical(value: f64) -> Self {
        Self {
            orientation: GuideOrientation::Vertical,
            value,
            style: SeriesStyle::dashed(SeriesColor::Gray),
        }
    }

    /// Endpoints of the guide clipped to the given axes.
    pub fn endpoints(&self, x_axis: &AxisBounds, y_axis: &AxisBounds) -> [(f64, f64); 2] {
        match self.orientation {
            GuideOrientation::Horizontal => [(x_axis.min, self.value), (x_axis.max, self.value)],
            GuideOrientation::Vertical => [(self.value, y_axis.min), (self.value, y_axis.max)],
        }
    }
}

/// Everything a renderer receives for one action.
///
/// Built fresh for every plot or solve and dropped after rendering. A
/// renderer replaces whatever it showed before with this frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotFrame {
    /// Plot title
    pub title: String,
    /// Series in drawing order: curve, then trail, then solution
    pub series: Vec<PlotSeries>,
    /// Horizontal axis
    pub x_axis: AxisBounds,
    /// Vertical axis
    pub y_axis: AxisBounds,
    /// Reference lines
    pub guides: Vec<GuideLine>,
    /// One-line result summary; `None` for a plain plot
    pub status: Option<String>,
}

impl PlotFrame {
    /// First series with the given role.
    pub fn series_by_role(&self, role: SeriesRole) -> Option<&PlotSeries> {
        self.series.iter().find(|s| s.role == role)
    }
}
