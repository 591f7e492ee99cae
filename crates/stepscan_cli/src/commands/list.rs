//! List command implementation
//!
//! Prints every catalog function with its accepted short id.

use std::io::Write;
use stepscan_core::math::catalog::FunctionCatalog;

use crate::Result;

/// Run the list command
pub fn run<W: Write>(mut out: W) -> Result<()> {
    for id in FunctionCatalog::all() {
        writeln!(out, "{:<4} {}", id.short_id(), id.expression())?;
    }
    Ok(())
}
