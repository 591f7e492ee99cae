//! Render boundary.

use super::frame::PlotFrame;

/// Consumer of finished plot frames.
///
/// Called once per action with the complete frame. Implementations replace
/// whatever they displayed before; there is no incremental update.
///
/// # Example
///
/// ```
/// use stepscan_core::plot::{PlotFrame, Renderer};
///
/// #[derive(Default)]
/// struct Titles(Vec<String>);
///
/// impl Renderer for Titles {
///     type Error = std::convert::Infallible;
///
///     fn render(&mut self, frame: &PlotFrame) -> Result<(), Self::Error> {
///         self.0 = frame.series.iter().map(|s| s.name.clone()).collect();
///         Ok(())
///     }
/// }
/// ```
pub trait Renderer {
    /// Error raised while drawing.
    type Error;

    /// Draw `frame`, replacing any previous content.
    fn render(&mut self, frame: &PlotFrame) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, frame: &PlotFrame) -> Result<(), Self::Error> {
        (**self).render(frame)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    type Error = R::Error;

    fn render(&mut self, frame: &PlotFrame) -> Result<(), Self::Error> {
        (**self).render(frame)
    }
}
