//! Plot command implementation
//!
//! Draws the curve of one catalog function with axes and guide lines.

use std::io::Write;
use stepscan_core::workflow::{run_action, Action};
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::render::AnyRenderer;
use crate::Result;

/// Run the plot command
pub fn run<W: Write>(function: &str, config: &CliConfig, format: OutputFormat, out: W) -> Result<()> {
    info!("Plotting {}", function);
    debug!(
        "  Display domain: [{}, {}] step {}",
        config.scan.display_min, config.scan.display_max, config.scan.display_step
    );
    debug!("  Output format: {}", format);

    run_action(
        Action::Plot,
        function,
        &config.scan,
        AnyRenderer::for_format(format, out),
    )?;

    info!("Plot complete");
    Ok(())
}
