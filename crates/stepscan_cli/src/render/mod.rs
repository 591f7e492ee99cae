//! Concrete renderers for the plot boundary.
//!
//! - [`TableRenderer`]: status line and point tables as plain text
//! - [`ChartJsRenderer`]: Chart.js-compatible JSON
//! - [`TerminalRenderer`]: interactive ratatui chart

pub mod chartjs;
pub mod table;
pub mod terminal;

pub use chartjs::{to_chartjs, ChartJsRenderer};
pub use table::TableRenderer;
pub use terminal::{draw_plot, TerminalRenderer};

use crate::config::OutputFormat;
use std::io::{self, Write};
use stepscan_core::plot::{PlotFrame, Renderer};

/// Renderer selected at runtime from an [`OutputFormat`].
pub enum AnyRenderer<W: Write> {
    /// Plain text
    Table(TableRenderer<W>),
    /// Chart.js JSON
    Json(ChartJsRenderer<W>),
    /// Terminal chart
    Tui(TerminalRenderer),
}

impl<W: Write> AnyRenderer<W> {
    /// Renderer for `format`; text formats write to `out`.
    pub fn for_format(format: OutputFormat, out: W) -> Self {
        match format {
            OutputFormat::Table => AnyRenderer::Table(TableRenderer::new(out)),
            OutputFormat::Json => AnyRenderer::Json(ChartJsRenderer::new(out)),
            OutputFormat::Tui => AnyRenderer::Tui(TerminalRenderer::new()),
        }
    }
}

impl<W: Write> Renderer for AnyRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, frame: &PlotFrame) -> io::Result<()> {
        match self {
            AnyRenderer::Table(r) => r.render(frame),
            AnyRenderer::Json(r) => r.render(frame),
            AnyRenderer::Tui(r) => r.render(frame),
        }
    }
}
