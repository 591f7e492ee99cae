//! Plain-text renderer.

use std::io::{self, Write};
use stepscan_core::plot::{PlotFrame, Renderer, SeriesRole};

/// Writes the status line and one point table per series.
///
/// Curve series can hold hundreds of points; only the first and last
/// `curve_preview` rows are written for them. Trail and solution series are
/// always written in full.
pub struct TableRenderer<W: Write> {
    out: W,
    curve_preview: usize,
}

impl<W: Write> TableRenderer<W> {
    /// Renderer writing to `out`, previewing 3 curve rows at each end.
    pub fn new(out: W) -> Self {
        Self {
            out,
            curve_preview: 3,
        }
    }

    /// Change how many curve rows are shown at each end.
    pub fn with_curve_preview(mut self, rows: usize) -> Self {
        self.curve_preview = rows;
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, frame: &PlotFrame) -> io::Result<()> {
        writeln!(self.out, "{}", frame.title)?;
        writeln!(
            self.out,
            "axes: {} [{}, {}], {} [{}, {}]",
            frame.x_axis.title,
            frame.x_axis.min,
            frame.x_axis.max,
            frame.y_axis.title,
            frame.y_axis.min,
            frame.y_axis.max
        )?;
        if let Some(status) = &frame.status {
            writeln!(self.out, "{}", status)?;
        }

        for series in &frame.series {
            writeln!(self.out)?;
            writeln!(self.out, "{} ({} points)", series.name, series.len())?;
            writeln!(self.out, "┌──────────────────────┬──────────────────────┐")?;
            writeln!(self.out, "│ {:<20} │ {:<20} │", "x", "f(x)")?;
            writeln!(self.out, "├──────────────────────┼──────────────────────┤")?;

            let n = series.points.len();
            let elide = series.role == SeriesRole::Curve && n > 2 * self.curve_preview;
            for (i, p) in series.points.iter().enumerate() {
                if elide && i >= self.curve_preview && i < n - self.curve_preview {
                    if i == self.curve_preview {
                        writeln!(self.out, "│ {:<20} │ {:<20} │", "…", "…")?;
                    }
                    continue;
                }
                writeln!(self.out, "│ {:<20.6} │ {:<20.6} │", p.x, p.y)?;
            }

            writeln!(self.out, "└──────────────────────┴──────────────────────┘")?;
        }

        self.out.flush()
    }
}
