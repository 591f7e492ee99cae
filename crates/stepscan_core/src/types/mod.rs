//! Core value and error types.
//!
//! This module provides:
//! - `point`: The `(x, y)` sample type shared by sampling, scanning and plotting
//! - `error`: Structured error types for catalog lookup and scan parameters
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SamplePoint`] from `point`
//! - [`CatalogError`], [`ScanError`], [`StepscanError`] from `error`

pub mod error;
pub mod point;

// Re-export commonly used types at module level
pub use error::{CatalogError, ScanError, StepscanError};
pub use point::SamplePoint;
