//! Numerical building blocks.
//!
//! - [`catalog`]: closed set of supported test functions
//! - [`sampling`]: uniform grid sampling for curve display
//! - [`solvers`]: fixed-step sign-change root scanning

pub mod catalog;
pub mod sampling;
pub mod solvers;
