//! Uniform grid sampling for curve display.

use crate::types::{SamplePoint, ScanError};
use num_traits::Float;

/// Produces `(x, f(x))` pairs over `[lo, hi]` at a fixed step.
///
/// The abscissa is advanced by repeated addition (`x += step`), so the
/// exact upper endpoint may be missed by less than one step through
/// floating-point drift. This is accepted as-is.
///
/// # Example
///
/// ```
/// use stepscan_core::math::sampling::SampleGenerator;
///
/// let curve = SampleGenerator::generate(|x: f64| 2.0 * x, 0.0, 1.0, 0.25).unwrap();
/// assert_eq!(curve.len(), 5);
/// assert_eq!(curve[4].y, 2.0);
/// ```
pub struct SampleGenerator;

impl SampleGenerator {
    /// Sample `f` on the grid `lo, lo + step, ...` up to and including `hi`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to sample
    /// * `lo` - First abscissa
    /// * `hi` - Inclusive upper bound
    /// * `step` - Grid spacing (must be positive)
    ///
    /// # Returns
    ///
    /// * `Ok(points)` - Non-empty, strictly increasing in `x`
    /// * `Err(ScanError::InvalidStep)` - `step <= 0`
    /// * `Err(ScanError::InvalidDomain)` - `lo > hi`
    /// * `Err(ScanError::NonFiniteParameter)` - NaN or infinite argument
    pub fn generate<T, F>(f: F, lo: T, hi: T, step: T) -> Result<Vec<SamplePoint<T>>, ScanError>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        check_finite("lo", lo)?;
        check_finite("hi", hi)?;
        check_finite("step", step)?;

        if step <= T::zero() {
            return Err(ScanError::InvalidStep {
                step: to_f64(step),
            });
        }
        if lo > hi {
            return Err(ScanError::InvalidDomain {
                lo: to_f64(lo),
                hi: to_f64(hi),
            });
        }

        let mut points = Vec::with_capacity(grid_len(lo, hi, step));
        let mut x = lo;
        while x <= hi {
            points.push(SamplePoint::sample(&f, x));
            let next = x + step;
            // A step below the resolution of x would never advance
            if next <= x {
                break;
            }
            x = next;
        }

        Ok(points)
    }
}

pub(crate) fn check_finite<T: Float>(name: &'static str, value: T) -> Result<(), ScanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScanError::NonFiniteParameter { name })
    }
}

pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn grid_len<T: Float>(lo: T, hi: T, step: T) -> usize {
    ((hi - lo) / step)
        .to_usize()
        .map_or(1, |n| n.saturating_add(2).min(1 << 20))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grid_starts_at_lo() {
        let f = |x: f64| x * x - 4.0;
        let curve = SampleGenerator::generate(f, -10.0, 10.0, 0.1).unwrap();

        assert_eq!(curve[0].x, -10.0);
        assert_eq!(curve[0].y, 96.0);
        assert!(curve.len() == 200 || curve.len() == 201);
        assert!(curve.last().unwrap().x <= 10.0);
        assert!(curve.last().unwrap().x > 9.8);
    }

    #[test]
    fn test_points_strictly_increasing_and_exact() {
        let f = |x: f64| x.sin() - 0.5;
        let curve = SampleGenerator::generate(f, -10.0, 10.0, 0.1).unwrap();

        for pair in curve.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
        for p in &curve {
            assert_eq!(p.y, f(p.x));
        }
    }

    #[test]
    fn test_degenerate_domain_single_point() {
        let curve = SampleGenerator::generate(|x: f64| x + 1.0, 3.0, 3.0, 0.5).unwrap();
        assert_eq!(curve, vec![SamplePoint::new(3.0, 4.0)]);
    }

    #[test]
    fn test_step_larger_than_domain() {
        let curve = SampleGenerator::generate(|x: f64| x, 0.0, 1.0, 5.0).unwrap();
        assert_eq!(curve.len(), 1);
    }

    #[test]
    fn test_zero_step_rejected() {
        let result = SampleGenerator::generate(|x: f64| x, 0.0, 1.0, 0.0);
        assert_eq!(result, Err(ScanError::InvalidStep { step: 0.0 }));
    }

    #[test]
    fn test_negative_step_rejected() {
        let result = SampleGenerator::generate(|x: f64| x, 0.0, 1.0, -0.1);
        assert!(matches!(result, Err(ScanError::InvalidStep { .. })));
    }

    #[test]
    fn test_inverted_domain_rejected() {
        let result = SampleGenerator::generate(|x: f64| x, 1.0, 0.0, 0.1);
        assert_eq!(result, Err(ScanError::InvalidDomain { lo: 1.0, hi: 0.0 }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = SampleGenerator::generate(|x: f64| x, f64::NEG_INFINITY, 0.0, 0.1);
        assert_eq!(result, Err(ScanError::NonFiniteParameter { name: "lo" }));

        let result = SampleGenerator::generate(|x: f64| x, 0.0, 1.0, f64::NAN);
        assert_eq!(result, Err(ScanError::NonFiniteParameter { name: "step" }));
    }

    #[test]
    fn test_sub_resolution_step_terminates() {
        let curve = SampleGenerator::generate(|x: f64| x, 1e20, 1e20 + 1e6, 1.0).unwrap();
        assert_eq!(curve.len(), 1);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn test_grid_monotone_and_bounded(
                lo in -100.0_f64..100.0,
                width in 0.0_f64..50.0,
                step in 0.01_f64..5.0
            ) {
                let hi = lo + width;
                let curve = SampleGenerator::generate(|x: f64| x * x, lo, hi, step).unwrap();

                prop_assert!(!curve.is_empty());
                prop_assert_eq!(curve[0].x, lo);
                for pair in curve.windows(2) {
                    prop_assert!(pair[1].x > pair[0].x);
                }
                prop_assert!(curve.iter().all(|p| p.x <= hi));
            }
        }
    }
}
