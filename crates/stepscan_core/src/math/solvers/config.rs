//! Scan configuration types.

use num_traits::Float;

/// Step and range settings for the linear scan.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use stepscan_core::math::solvers::ScanConfig;
///
/// // Use default configuration
/// let config: ScanConfig<f64> = ScanConfig::default();
/// assert_eq!(config.step, 0.1);
/// assert_eq!(config.range, 10.0);
///
/// // Custom configuration
/// let custom = ScanConfig {
///     start: -5.0,
///     step: 0.05,
///     range: 4.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig<T: Float> {
    /// First abscissa evaluated.
    pub start: T,

    /// Distance between consecutive samples. Must be positive.
    pub step: T,

    /// Length of the scanned interval `[start, start + range]`.
    /// Must be non-negative.
    pub range: T,
}

impl<T: Float> Default for ScanConfig<T> {
    /// Default values:
    /// - `start`: 0
    /// - `step`: 0.1
    /// - `range`: 10
    fn default() -> Self {
        Self {
            start: T::zero(),
            step: T::from(0.1).unwrap_or_else(T::one),
            range: T::from(10.0).unwrap_or_else(T::one),
        }
    }
}

impl<T: Float> ScanConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `step <= 0` or `range < 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use stepscan_core::math::solvers::ScanConfig;
    ///
    /// let config = ScanConfig::new(1.0, 0.5, 3.0);
    /// assert_eq!(config.end(), 4.0);
    /// ```
    pub fn new(start: T, step: T, range: T) -> Self {
        assert!(step > T::zero(), "step must be positive");
        assert!(range >= T::zero(), "range must be non-negative");
        Self { start, step, range }
    }

    /// Upper end of the scanned interval.
    pub fn end(&self) -> T {
        self.start + self.range
    }

    /// Number of samples a full sweep takes, ignoring accumulation drift.
    pub fn max_samples(&self) -> usize {
        (self.range / self.step)
            .floor()
            .to_usize()
            .map_or(1, |n| n.saturating_add(1))
    }
}
