//! Named point series and their display hints.

use crate::types::SamplePoint;

/// What a series shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeriesRole {
    /// Background function curve
    Curve,
    /// Points visited by the scan
    Trail,
    /// The interpolated root
    Solution,
}

/// Colour hint for a renderer. `Auto` leaves the choice to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeriesColor {
    /// Renderer default
    #[default]
    Auto,
    /// Scan trail
    Yellow,
    /// Solution marker
    Red,
    /// Guide lines
    Gray,
}

impl SeriesColor {
    /// CSS hex colour, `None` for `Auto`.
    pub fn hex(&self) -> Option<&'static str> {
        match self {
            SeriesColor::Auto => None,
            SeriesColor::Yellow => Some("#FFFF00"),
            SeriesColor::Red => Some("#FF0000"),
            SeriesColor::Gray => Some("#808080"),
        }
    }
}

/// Stroke hint for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Dashed line
    Dash,
}

/// Optional display hints attached to a series or guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesStyle {
    /// Colour hint
    pub color: SeriesColor,
    /// Stroke hint
    pub line: LineStyle,
}

impl SeriesStyle {
    /// Solid line in the given colour.
    pub fn solid(color: SeriesColor) -> Self {
        Self {
            color,
            line: LineStyle::Solid,
        }
    }

    /// Dashed line in the given colour.
    pub fn dashed(color: SeriesColor) -> Self {
        Self {
            color,
            line: LineStyle::Dash,
        }
    }
}

/// A named, ordered point sequence handed to a renderer.
///
/// # Example
///
/// ```
/// use stepscan_core::plot::{PlotSeries, SeriesRole};
/// use stepscan_core::types::SamplePoint;
///
/// let s = PlotSeries::new("Solution", SeriesRole::Solution, vec![SamplePoint::new(2.0, 0.0)]);
/// assert_eq!(s.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotSeries {
    /// Legend title
    pub name: String,
    /// What the series shows
    pub role: SeriesRole,
    /// Points in increasing `x`
    pub points: Vec<SamplePoint<f64>>,
    /// Display hints
    pub style: SeriesStyle,
}

impl PlotSeries {
    /// Series with default styling.
    pub fn new(name: impl Into<String>, role: SeriesRole, points: Vec<SamplePoint<f64>>) -> Self {
        Self {
            name: name.into(),
            role,
            points,
            style: SeriesStyle::default(),
        }
    }

    /// Replace the style hint.
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as `(x, y)` tuples.
    pub fn tuples(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(SamplePoint::as_tuple).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let s = PlotSeries::new("f(x)", SeriesRole::Curve, Vec::new());
        assert_eq!(s.style.color, SeriesColor::Auto);
        assert_eq!(s.style.line, LineStyle::Solid);
        assert!(s.is_empty());
    }

    #[test]
    fn test_with_style() {
        let s = PlotSeries::new("Steps", SeriesRole::Trail, vec![SamplePoint::new(0.0, 1.0)])
            .with_style(SeriesStyle::solid(SeriesColor::Yellow));
        assert_eq!(s.style.color.hex(), Some("#FFFF00"));
        assert_eq!(s.tuples(), vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_auto_color_has_no_hex() {
        assert_eq!(SeriesColor::Auto.hex(), None);
        assert_eq!(SeriesColor::Gray.hex(), Some("#808080"));
    }
}
