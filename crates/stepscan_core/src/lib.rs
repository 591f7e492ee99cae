//! # stepscan_core: Fixed-Step Root Scanning and Plot Data
//!
//! ## Role
//!
//! stepscan_core is the computational layer of the workspace, providing:
//! - A closed catalog of test functions (`math::catalog`)
//! - Uniform grid sampling for curve display (`math::sampling`)
//! - A fixed-step sign-change root scanner (`math::solvers`)
//! - Plot series assembly and the render boundary (`plot`)
//! - The plot and solve actions composed from the above (`workflow`)
//! - Error types: `CatalogError`, `ScanError`, `StepscanError` (`types::error`)
//!
//! ## No I/O
//!
//! Nothing in this crate prints, logs, or touches the filesystem. Rendering
//! happens behind the [`plot::Renderer`] trait, implemented by the CLI crate.
//!
//! ## Usage Examples
//!
//! ```rust
//! use stepscan_core::math::catalog::FunctionCatalog;
//! use stepscan_core::math::solvers::LinearScanSolver;
//!
//! let f = FunctionCatalog::resolve("x^2 - 4").unwrap();
//! let result = LinearScanSolver::with_defaults()
//!     .scan(|x: f64| f.eval(x), 0.0, 0.1, 10.0)
//!     .unwrap();
//!
//! let root = result.root.unwrap();
//! assert!((root - 2.0).abs() < 0.1);
//! assert_eq!(result.trail[0].x, 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for catalog ids, settings and plot frames

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod plot;
pub mod types;
pub mod workflow;
