//! Metric spaces: a distance function and the near-equality built on it.

use crate::Scalar;

/// A type with a distance between any two of its values.
///
/// Implementations must be symmetric (`a.distance(&b) == b.distance(&a)`)
/// and put every value at distance zero from itself. Neither is checked.
///
/// Every [`Vector2D`](crate::Vector2D) type is a metric space through a
/// blanket impl, and so are `f32` and `f64` (absolute difference).
pub trait MetricSpace {
    type Scalar: Scalar;

    fn distance(&self, other: &Self) -> Self::Scalar;

    /// `true` when the distance is strictly below
    /// [`Scalar::DEFAULT_TOLERANCE`].
    #[inline]
    fn is_almost_equal(&self, other: &Self) -> bool {
        self.is_almost_equal_within(other, Self::Scalar::DEFAULT_TOLERANCE)
    }

    /// `true` when the distance is strictly below `tolerance`. A distance
    /// exactly equal to the tolerance does not count.
    #[inline]
    fn is_almost_equal_within(&self, other: &Self, tolerance: Self::Scalar) -> bool {
        self.distance(other) < tolerance
    }
}

macro_rules! scalar_metric {
    ($($t:ty),*) => {$(
        impl MetricSpace for $t {
            type Scalar = $t;

            #[inline]
            fn distance(&self, other: &$t) -> $t {
                (self - other).abs()
            }
        }
    )*};
}

scalar_metric!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_distance_is_absolute_difference() {
        assert_eq!(3.0f64.distance(&-1.5), 4.5);
        assert_eq!((-1.5f64).distance(&3.0), 4.5);
        assert_eq!(2.0f32.distance(&2.0), 0.0);
    }

    #[test]
    fn rounding_noise_is_almost_equal() {
        let (a, b) = (0.1f64, 0.2f64);
        assert_ne!(a + b, 0.3);
        assert!((a + b).is_almost_equal(&0.3));
        assert!(!(a + b).is_almost_equal(&0.31));
    }

    #[test]
    fn tolerance_boundary_is_strict() {
        assert!(!0.0f64.is_almost_equal_within(&0.5, 0.5));
        assert!(0.0f64.is_almost_equal_within(&0.5, 0.5000001));
        assert!(!0.0f64.is_almost_equal(&f64::DEFAULT_TOLERANCE));
    }

    #[test]
    fn reflexive() {
        for x in [0.0f64, -7.25, 1e12, f64::MIN_POSITIVE] {
            assert!(x.is_almost_equal(&x));
        }
    }
}
