//! The numeric type every capability is parameterized over.

use num_traits::{Float, FloatConst};
use std::fmt;

/// An ordered floating-point coordinate type.
///
/// `Float` supplies the arithmetic, square root and trigonometry;
/// `FloatConst` supplies `PI`. The only thing added on top is the default
/// tolerance used by [`MetricSpace::is_almost_equal`](crate::MetricSpace::is_almost_equal).
pub trait Scalar:
    Float + FloatConst + fmt::Debug + fmt::Display + Default + Send + Sync + 'static
{
    /// `epsilon * 1000`: the unit in the last place of `1.0`, widened so that
    /// a few rounding steps still compare as equal.
    const DEFAULT_TOLERANCE: Self;

    /// Convert a count (number of polygon sides, ...) to this scalar.
    fn from_count(n: usize) -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half(self) -> Self {
        self / Self::two()
    }
}

impl Scalar for f32 {
    const DEFAULT_TOLERANCE: f32 = f32::EPSILON * 1000.0;

    #[inline]
    fn from_count(n: usize) -> f32 {
        n as f32
    }
}

impl Scalar for f64 {
    const DEFAULT_TOLERANCE: f64 = f64::EPSILON * 1000.0;

    #[inline]
    fn from_count(n: usize) -> f64 {
        n as f64
    }
}
