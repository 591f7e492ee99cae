//! Error types for structured error handling.
//!
//! This module provides:
//! - `CatalogError`: Errors from function catalog lookup
//! - `ScanError`: Errors from invalid sampling or scanning parameters
//! - `StepscanError`: Union of the above, returned by the plot and solve actions
//!
//! A scan that finds no sign change is not an error: it is the `None` case of
//! [`ScanResult::root`](crate::math::solvers::ScanResult::root).

use thiserror::Error;

/// Function catalog errors.
///
/// # Examples
/// ```
/// use stepscan_core::types::CatalogError;
///
/// let err = CatalogError::UnknownFunction("tan(x)".to_string());
/// assert_eq!(format!("{}", err), "Unknown function: tan(x)");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// The requested identifier is not in the catalog.
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

/// Sampling and scanning parameter errors.
///
/// Raised before any evaluation happens, so a bad step or range can never
/// produce a non-terminating sweep.
///
/// # Variants
/// - `InvalidStep`: Step is zero or negative
/// - `InvalidRange`: Scan range is negative
/// - `InvalidDomain`: Grid lower bound exceeds upper bound
/// - `NonFiniteParameter`: A parameter is NaN or infinite
/// - `TooManySamples`: Step too fine for the interval
///
/// # Examples
/// ```
/// use stepscan_core::types::ScanError;
///
/// let err = ScanError::InvalidStep { step: 0.0 };
/// assert!(format!("{}", err).contains("must be positive"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScanError {
    /// Step is not strictly positive.
    #[error("Invalid step {step}: must be positive")]
    InvalidStep {
        /// The rejected step
        step: f64,
    },

    /// Scan range is negative.
    #[error("Invalid range {range}: must be non-negative")]
    InvalidRange {
        /// The rejected range
        range: f64,
    },

    /// Grid domain is inverted.
    #[error("Invalid domain [{lo}, {hi}]: lower bound exceeds upper bound")]
    InvalidDomain {
        /// Lower bound
        lo: f64,
        /// Upper bound
        hi: f64,
    },

    /// A parameter is NaN or infinite.
    #[error("Parameter '{name}' must be finite")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
    },

    /// Step too fine for the interval being swept.
    #[error("Sweep of {samples} samples exceeds the limit of {limit}")]
    TooManySamples {
        /// Interval length divided by step
        samples: f64,
        /// Largest accepted sample count
        limit: usize,
    },
}

/// Top-level error for the plot and solve actions.
///
/// # Examples
/// ```
/// use stepscan_core::types::{CatalogError, StepscanError};
///
/// let err: StepscanError = CatalogError::UnknownFunction("foo".to_string()).into();
/// assert!(matches!(err, StepscanError::Catalog(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepscanError {
    /// Catalog lookup failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Parameters rejected
    #[error(transparent)]
    Scan(#[from] ScanError),
}
