//! stepscan CLI - command line front end for the fixed-step root scanner
//!
//! # Commands
//!
//! - `stepscan list` - List the supported functions
//! - `stepscan plot <function>` - Draw a function curve
//! - `stepscan solve <function>` - Scan for a root and draw curve, trail and solution
//!
//! # Architecture
//!
//! The binary is a thin layer over `stepscan_core`: it loads configuration,
//! picks a renderer for the requested output format and runs one action.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use error::{CliError, Result};
