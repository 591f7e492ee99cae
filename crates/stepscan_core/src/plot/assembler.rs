//! Composition of curve, trail and solution into a [`PlotFrame`].

use super::frame::{AxisBounds, GuideLine, PlotFrame};
use super::series::{PlotSeries, SeriesColor, SeriesRole, SeriesStyle};
use crate::math::catalog::Evaluator;
use crate::types::SamplePoint;

/// Title of the trail series.
pub const TRAIL_TITLE: &str = "Steps";
/// Title of the solution series.
pub const SOLUTION_TITLE: &str = "Solution";
/// Status text when the scan found no sign change.
pub const NO_SOLUTION: &str = "No solution found";

const FRAME_TITLE: &str = "Function plot";

/// Builds render frames from sampling and scan output.
///
/// Holds only the axis layout; every call produces a fresh frame and leaves
/// its inputs untouched.
///
/// # Example
///
/// ```
/// use stepscan_core::math::catalog::FunctionCatalog;
/// use stepscan_core::plot::{PlotDataAssembler, SeriesRole};
/// use stepscan_core::types::SamplePoint;
///
/// let f = FunctionCatalog::resolve("x^2 - 4").unwrap();
/// let curve = vec![SamplePoint::new(0.0, -4.0), SamplePoint::new(3.0, 5.0)];
/// let trail = vec![SamplePoint::new(1.0, -3.0), SamplePoint::new(3.0, 5.0)];
///
/// let frame = PlotDataAssembler::default().assemble(&curve, &trail, Some(2.0), f);
/// assert_eq!(frame.series.len(), 3);
/// assert_eq!(frame.status.as_deref(), Some("Solution: 2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDataAssembler {
    x_axis: AxisBounds,
    y_axis: AxisBounds,
}

impl Default for PlotDataAssembler {
    /// Both axes span `[-10, 10]`.
    fn default() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }
}

impl PlotDataAssembler {
    /// Assembler with explicit axis bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_axis: AxisBounds::new("x", x_min, x_max),
            y_axis: AxisBounds::new("f(x)", y_min, y_max),
        }
    }

    /// Frame for a solve action.
    ///
    /// Always contains the curve. The trail series is added when `trail` is
    /// non-empty, with each point re-evaluated through `f`. The solution
    /// series holds exactly `(root, f(root))` and is added only when `root`
    /// is `Some`.
    pub fn assemble(
        &self,
        curve: &[SamplePoint<f64>],
        trail: &[SamplePoint<f64>],
        root: Option<f64>,
        f: Evaluator,
    ) -> PlotFrame {
        let mut series = vec![curve_series(curve, f)];

        if !trail.is_empty() {
            let points = trail
                .iter()
                .map(|p| SamplePoint::sample(f.as_fn(), p.x))
                .collect();
            series.push(
                PlotSeries::new(TRAIL_TITLE, SeriesRole::Trail, points)
                    .with_style(SeriesStyle::solid(SeriesColor::Yellow)),
            );
        }

        if let Some(root) = root {
            series.push(
                PlotSeries::new(
                    SOLUTION_TITLE,
                    SeriesRole::Solution,
                    vec![SamplePoint::sample(f.as_fn(), root)],
                )
                .with_style(SeriesStyle::solid(SeriesColor::Red)),
            );
        }

        self.frame(series, Some(status_text(root)))
    }

    /// Frame for a plot action: the curve only, no status line.
    pub fn curve_only(&self, curve: &[SamplePoint<f64>], f: Evaluator) -> PlotFrame {
        self.frame(vec![curve_series(curve, f)], None)
    }

    fn frame(&self, series: Vec<PlotSeries>, status: Option<String>) -> PlotFrame {
        PlotFrame {
            title: FRAME_TITLE.to_string(),
            series,
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
            guides: vec![GuideLine::horizontal(0.0), GuideLine::vertical(0.0)],
            status,
        }
    }
}

/// Human-readable summary of a scan outcome.
///
/// ```
/// use stepscan_core::plot::status_text;
///
/// assert_eq!(status_text(Some(1.5)), "Solution: 1.5");
/// assert_eq!(status_text(None), "No solution found");
/// ```
pub fn status_text(root: Option<f64>) -> String {
    match root {
        Some(root) => format!("{}: {}", SOLUTION_TITLE, root),
        None => NO_SOLUTION.to_string(),
    }
}

fn curve_series(curve: &[SamplePoint<f64>], f: Evaluator) -> PlotSeries {
    PlotSeries::new(
        format!("f(x) = {}", f.id().expression()),
        SeriesRole::Curve,
        curve.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::catalog::FunctionId;

    fn quadratic() -> Evaluator {
        Evaluator::new(FunctionId::QuadraticMinusFour)
    }

    fn points(xs: &[f64]) -> Vec<SamplePoint<f64>> {
        xs.iter().map(|&x| SamplePoint::new(x, x * x - 4.0)).collect()
    }

    #[test]
    fn test_all_three_series() {
        let curve = points(&[-1.0, 0.0, 1.0]);
        let trail = points(&[0.0, 1.0]);

        let frame = PlotDataAssembler::default().assemble(&curve, &trail, Some(2.0), quadratic());

        let roles: Vec<_> = frame.series.iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![SeriesRole::Curve, SeriesRole::Trail, SeriesRole::Solution]
        );
        assert_eq!(frame.series[0].name, "f(x) = x^2 - 4");
        assert_eq!(frame.series[0].points, curve);
        assert_eq!(frame.series[1].name, "Steps");
        assert_eq!(frame.series[1].style.color, SeriesColor::Yellow);
        assert_eq!(frame.series[2].points, vec![SamplePoint::new(2.0, 0.0)]);
        assert_eq!(frame.series[2].style.color, SeriesColor::Red);
        assert_eq!(frame.status.as_deref(), Some("Solution: 2"));
    }

    #[test]
    fn test_no_root_omits_solution() {
        let curve = points(&[0.0]);
        let trail = points(&[0.0, 0.5]);

        let frame = PlotDataAssembler::default().assemble(&curve, &trail, None, quadratic());

        assert_eq!(frame.series.len(), 2);
        assert!(frame.series_by_role(SeriesRole::Solution).is_none());
        assert_eq!(frame.status.as_deref(), Some("No solution found"));
    }

    #[test]
    fn test_empty_trail_omits_trail() {
        let frame = PlotDataAssembler::default().assemble(&points(&[0.0]), &[], None, quadratic());
        assert_eq!(frame.series.len(), 1);
        assert_eq!(frame.series[0].role, SeriesRole::Curve);
    }

    #[test]
    fn test_trail_points_reevaluated() {
        // Stale y-values in the trail are replaced by f(x)
        let trail = vec![SamplePoint::new(3.0, 123.0)];
        let frame = PlotDataAssembler::default().assemble(&[], &trail, None, quadratic());

        let trail_series = frame.series_by_role(SeriesRole::Trail).unwrap();
        assert_eq!(trail_series.points, vec![SamplePoint::new(3.0, 5.0)]);
    }

    #[test]
    fn test_axes_and_guides() {
        let frame = PlotDataAssembler::default().curve_only(&points(&[0.0]), quadratic());

        assert_eq!(frame.x_axis.as_array(), [-10.0, 10.0]);
        assert_eq!(frame.y_axis.as_array(), [-10.0, 10.0]);
        assert_eq!(
            frame.guides,
            vec![GuideLine::horizontal(0.0), GuideLine::vertical(0.0)]
        );
        assert_eq!(frame.status, None);
        assert_eq!(frame.series.len(), 1);
    }

    #[test]
    fn test_custom_axes() {
        let frame = PlotDataAssembler::new(-1.0, 1.0, -2.0, 2.0).curve_only(&[], quadratic());
        assert_eq!(frame.x_axis.title, "x");
        assert_eq!(frame.y_axis.title, "f(x)");
        assert_eq!(frame.y_axis.as_array(), [-2.0, 2.0]);
    }

    #[test]
    fn test_non_finite_root_displayed_as_is() {
        assert_eq!(status_text(Some(f64::NAN)), "Solution: NaN");
        assert_eq!(status_text(Some(f64::INFINITY)), "Solution: inf");
    }

    #[test]
    fn test_deterministic() {
        let curve = points(&[0.0, 1.0]);
        let a = PlotDataAssembler::default().assemble(&curve, &curve, Some(1.5), quadratic());
        let b = PlotDataAssembler::default().assemble(&curve, &curve, Some(1.5), quadratic());
        assert_eq!(a, b);
        assert_eq!(curve, points(&[0.0, 1.0]));
    }
}
