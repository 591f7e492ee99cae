//! Root scanning for single-variable functions.
//!
//! ## Available Solvers
//!
//! - [`LinearScanSolver`]: fixed-step sweep that stops at the first strict
//!   sign change and interpolates linearly inside the bracketing step
//!
//! The sweep has no tolerance or iteration limit. Its length is fixed by
//! `range / step` and the estimate is a single interpolation.
//!
//! ## Configuration
//!
//! [`ScanConfig`] holds:
//! - `start`: first abscissa (default: 0)
//! - `step`: sample spacing (default: 0.1)
//! - `range`: interval length (default: 10)
//!
//! ## Examples
//!
//! ```
//! use stepscan_core::math::solvers::{LinearScanSolver, ScanConfig};
//!
//! let solver = LinearScanSolver::new(ScanConfig::default());
//!
//! let f = |x: f64| x * x - 4.0;
//! let result = solver.scan(f, 0.0, 0.1, 10.0).unwrap();
//!
//! assert!((result.root.unwrap() - 2.0).abs() < 0.1);
//! assert_eq!(result.trail.len(), 21);
//! ```

mod config;
mod linear_scan;

// Re-export public types at module level
pub use config::ScanConfig;
pub use linear_scan::{LinearScanSolver, ScanResult};
