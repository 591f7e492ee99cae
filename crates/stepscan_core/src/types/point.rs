//! Sample point type.

use num_traits::Float;

/// A single `(x, y)` sample of a function.
///
/// Has no identity beyond its coordinates. Sequences of points are always
/// produced in strictly increasing `x` order.
///
/// # Example
///
/// ```
/// use stepscan_core::types::SamplePoint;
///
/// let p = SamplePoint::new(3.0_f64, 5.0);
/// assert_eq!(p.as_tuple(), (3.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplePoint<T: Float = f64> {
    /// Abscissa
    pub x: T,
    /// Function value at `x`
    pub y: T,
}

impl<T: Float> SamplePoint<T> {
    /// Create a point from its coordinates.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Sample `f` at `x`.
    pub fn sample<F>(f: F, x: T) -> Self
    where
        F: Fn(T) -> T,
    {
        Self { x, y: f(x) }
    }

    /// Coordinates as a tuple, the shape chart widgets consume.
    pub fn as_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: Float> From<(T, T)> for SamplePoint<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_evaluates_function() {
        let p = SamplePoint::sample(|x: f64| x * x - 4.0, 3.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, 5.0);
    }

    #[test]
    fn test_from_tuple() {
        let p: SamplePoint<f32> = (1.5_f32, -2.0_f32).into();
        assert_eq!(p.as_tuple(), (1.5, -2.0));
    }
}
