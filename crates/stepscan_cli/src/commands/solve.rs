//! Solve command implementation
//!
//! Scans one catalog function for its first sign change and renders the
//! curve, the scan trail and the solution point.

use std::io::Write;
use stepscan_core::math::solvers::ScanResult;
use stepscan_core::plot::Renderer;
use stepscan_core::workflow::solve_action;
use tracing::{debug, info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::render::AnyRenderer;
use crate::{CliError, Result};

/// Run the solve command
pub fn run<W: Write>(
    function: &str,
    config: &CliConfig,
    format: OutputFormat,
    out: W,
) -> Result<ScanResult<f64>> {
    let scan = &config.scan;
    info!("Solving {}", function);
    info!("  Start: {}", scan.start);
    info!("  Step: {}", scan.step);
    info!("  Range: {}", scan.range);
    debug!("  Output format: {}", format);

    let outcome = solve_action(function, scan)?;
    AnyRenderer::for_format(format, out)
        .render(&outcome.frame)
        .map_err(|e| CliError::Render(e.to_string()))?;
    let result = outcome.scan;

    debug!("Scan visited {} points", result.trail.len());
    match result.root {
        Some(root) if result.has_numeric_anomaly() => {
            warn!("Interpolation produced a non-finite root: {}", root);
        }
        Some(root) => info!("Root found at {}", root),
        None => info!("No sign change in [{}, {}]", scan.start, scan.start + scan.range),
    }

    Ok(result)
}
