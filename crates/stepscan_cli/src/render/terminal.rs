//! Terminal chart renderer built on ratatui.
//!
//! Drawing ([`draw_plot`]) is separate from terminal setup
//! ([`TerminalRenderer`]) so the chart can be drawn onto a test backend.

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Terminal,
};
use std::io::{self, Write};
use stepscan_core::plot::{AxisBounds, PlotFrame, Renderer, SeriesColor, SeriesRole};

/// Full-screen chart, shown until `q`, `Esc` or `Enter` is pressed.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// New renderer
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TerminalRenderer {
    type Error = io::Error;

    fn render(&mut self, frame: &PlotFrame) -> io::Result<()> {
        let _screen = ScreenGuard::enter(io::stdout(), enable_raw_mode, disable_raw_mode)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        show_until_dismissed(&mut terminal, frame)
    }
}

/// Raw mode plus alternate screen on `out`; both are left again on drop,
/// including when entering failed halfway.
struct ScreenGuard<W: Write> {
    out: W,
    leave_raw: fn() -> io::Result<()>,
}

impl<W: Write> ScreenGuard<W> {
    fn enter(
        out: W,
        enter_raw: fn() -> io::Result<()>,
        leave_raw: fn() -> io::Result<()>,
    ) -> io::Result<Self> {
        enter_raw()?;
        let mut guard = Self { out, leave_raw };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        // Restore terminal
        let _ = (self.leave_raw)();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

fn show_until_dismissed<B: Backend>(terminal: &mut Terminal<B>, plot: &PlotFrame) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            draw_plot(frame, area, plot);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
            {
                return Ok(());
            }
        }
    }
}

/// Draw `plot` into `area`: chart on top, status line below.
pub fn draw_plot(frame: &mut Frame, area: Rect, plot: &PlotFrame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    // Chart data must outlive the datasets borrowing it
    let guide_data: Vec<Vec<(f64, f64)>> = plot
        .guides
        .iter()
        .map(|g| g.endpoints(&plot.x_axis, &plot.y_axis).to_vec())
        .collect();
    let series_data: Vec<Vec<(f64, f64)>> = plot.series.iter().map(|s| s.tuples()).collect();

    let mut datasets: Vec<Dataset> = guide_data
        .iter()
        .map(|data| {
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(data)
        })
        .collect();

    for (series, data) in plot.series.iter().zip(&series_data) {
        let (marker, graph_type) = match series.role {
            SeriesRole::Curve => (symbols::Marker::Braille, GraphType::Line),
            SeriesRole::Trail => (symbols::Marker::Dot, GraphType::Scatter),
            SeriesRole::Solution => (symbols::Marker::Block, GraphType::Scatter),
        };
        datasets.push(
            Dataset::default()
                .name(series.name.clone())
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(terminal_color(series.style.color, series.role)))
                .data(data),
        );
    }

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", plot.title))
                .borders(Borders::ALL),
        )
        .x_axis(axis(&plot.x_axis))
        .y_axis(axis(&plot.y_axis));

    frame.render_widget(chart, chunks[0]);

    let status = match &plot.status {
        Some(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            " q / Esc to close ",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let summary = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    frame.render_widget(summary, chunks[1]);
}

fn axis(bounds: &AxisBounds) -> Axis<'static> {
    let mid = (bounds.min + bounds.max) / 2.0;
    Axis::default()
        .title(bounds.title.clone())
        .style(Style::default().fg(Color::Gray))
        .bounds(bounds.as_array())
        .labels(
            [bounds.min, mid, bounds.max]
                .iter()
                .map(|v| Span::raw(format_tick(*v)))
                .collect(),
        )
}

fn terminal_color(color: SeriesColor, role: SeriesRole) -> Color {
    match color {
        SeriesColor::Yellow => Color::Yellow,
        SeriesColor::Red => Color::Red,
        SeriesColor::Gray => Color::DarkGray,
        SeriesColor::Auto => match role {
            SeriesRole::Curve => Color::Cyan,
            SeriesRole::Trail => Color::Yellow,
            SeriesRole::Solution => Color::Red,
        },
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
