//! Plot data for the rendering boundary.
//!
//! - [`series`]: named point series with role and style hints
//! - [`frame`]: the full payload of one render call (series, axes, guides, status)
//! - [`assembler`]: builds frames from curve samples and scan output
//! - [`render`]: the [`Renderer`] trait implemented by concrete back ends

pub mod assembler;
pub mod frame;
pub mod render;
pub mod series;

pub use assembler::{status_text, PlotDataAssembler, NO_SOLUTION, SOLUTION_TITLE, TRAIL_TITLE};
pub use frame::{AxisBounds, GuideLine, GuideOrientation, PlotFrame};
pub use render::Renderer;
pub use series::{LineStyle, PlotSeries, SeriesColor, SeriesRole, SeriesStyle};
