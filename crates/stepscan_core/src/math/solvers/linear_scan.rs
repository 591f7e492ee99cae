//! Fixed-step linear scan root finder.

use super::ScanConfig;
use crate::math::sampling::{check_finite, to_f64};
use crate::types::{SamplePoint, ScanError};
use num_traits::Float;

/// Outcome of a linear scan.
///
/// `trail` holds every sampled point in visiting order and always contains
/// at least the starting sample. `root` is `None` when the sweep finished
/// without a sign change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanResult<T: Float = f64> {
    /// Interpolated root, if a sign change was bracketed.
    pub root: Option<T>,
    /// Every sample taken, strictly increasing in `x`.
    pub trail: Vec<SamplePoint<T>>,
}

impl<T: Float> ScanResult<T> {
    /// Whether a sign change was found.
    pub fn found(&self) -> bool {
        self.root.is_some()
    }

    /// Whether the interpolated root is NaN or infinite.
    ///
    /// The interpolation is never guarded, so a degenerate bracket shows up
    /// here rather than as an error.
    pub fn has_numeric_anomaly(&self) -> bool {
        self.root.is_some_and(|r| !r.is_finite())
    }

    /// The last two trail points when a root was bracketed.
    pub fn bracket(&self) -> Option<(SamplePoint<T>, SamplePoint<T>)> {
        self.root?;
        match self.trail.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Fixed-step sign-change scanner.
///
/// Walks from `start` in steps of `step` while `x <= start + range`,
/// recording every sample. Stops at the first strict sign change
/// (`f(x_prev) * f(x) < 0`) and estimates the root by linear interpolation
/// between the two bracketing samples:
///
/// ```text
/// root = x - step + step * (0 - f(x_prev)) / (f(x) - f(x_prev))
/// ```
///
/// A sample value of exactly zero never triggers the sign test; such a root
/// is only reported if the following sample changes sign. Later sign
/// changes are ignored.
///
/// # Example
///
/// ```
/// use stepscan_core::math::solvers::{LinearScanSolver, ScanConfig};
///
/// let solver = LinearScanSolver::new(ScanConfig::default());
///
/// // e^x - 2 crosses zero at ln 2
/// let result = solver.scan_with_config(|x: f64| x.exp() - 2.0).unwrap();
/// assert!((result.root.unwrap() - 2.0_f64.ln()).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct LinearScanSolver<T: Float> {
    config: ScanConfig<T>,
}

impl<T: Float> LinearScanSolver<T> {
    /// Create a new scanner with the given configuration.
    pub fn new(config: ScanConfig<T>) -> Self {
        Self { config }
    }

    /// Create a scanner with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Scan using the stored configuration.
    pub fn scan_with_config<F>(&self, f: F) -> Result<ScanResult<T>, ScanError>
    where
        F: Fn(T) -> T,
    {
        self.scan(f, self.config.start, self.config.step, self.config.range)
    }

    /// Scan `f` over `[start, start + range]` in steps of `step`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to scan
    /// * `start` - First abscissa
    /// * `step` - Sample spacing (must be positive)
    /// * `range` - Interval length (must be non-negative)
    ///
    /// # Returns
    ///
    /// * `Ok(ScanResult)` - Trail and, if bracketed, the interpolated root
    /// * `Err(ScanError::InvalidStep)` - `step <= 0`
    /// * `Err(ScanError::InvalidRange)` - `range < 0`
    /// * `Err(ScanError::NonFiniteParameter)` - NaN or infinite argument
    ///
    /// Evaluation of `f` itself is not checked; whatever it returns flows
    /// into the trail and the interpolation.
    pub fn scan<F>(&self, f: F, start: T, step: T, range: T) -> Result<ScanResult<T>, ScanError>
    where
        F: Fn(T) -> T,
    {
        check_finite("start", start)?;
        check_finite("step", step)?;
        check_finite("range", range)?;

        if step <= T::zero() {
            return Err(ScanError::InvalidStep {
                step: to_f64(step),
            });
        }
        if range < T::zero() {
            return Err(ScanError::InvalidRange {
                range: to_f64(range),
            });
        }

        let end = start + range;
        let mut x = start;
        let mut last_value = f(x);

        let mut trail = Vec::with_capacity(
            ScanConfig {
                start,
                step,
                range,
            }
            .max_samples()
            .min(1 << 16),
        );
        trail.push(SamplePoint::new(x, last_value));

        x = x + step;
        while x <= end {
            let current = f(x);
            trail.push(SamplePoint::new(x, current));

            if last_value * current < T::zero() {
                let root = x - step + step * (T::zero() - last_value) / (current - last_value);
                return Ok(ScanResult {
                    root: Some(root),
                    trail,
                });
            }

            last_value = current;
            let next = x + step;
            // A step below the resolution of x would never advance
            if next <= x {
                break;
            }
            x = next;
        }

        Ok(ScanResult { root: None, trail })
    }

    /// Returns a reference to the scan configuration.
    pub fn config(&self) -> &ScanConfig<T> {
        &self.config
    }
}
