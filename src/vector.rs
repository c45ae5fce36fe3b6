//! Vector spaces over a [`Scalar`](crate::Scalar).

use num_traits::{One, Zero};

use crate::errors::{GeometryError, Result};
use crate::log;
use crate::metric::MetricSpace;

/// A metric space with a zero, negation, addition and scalar multiplication.
///
/// The methods are named rather than bound to `std::ops` so the trait can be
/// implemented through blanket impls; see [`impl_vector_ops!`](crate::impl_vector_ops)
/// for the operator syntax.
pub trait Vector: MetricSpace + Copy + PartialEq {
    fn zero() -> Self;

    /// `-v`
    fn negated(self) -> Self;

    /// `u + v`
    fn plus(self, other: Self) -> Self;

    /// `u - v`
    fn minus(self, other: Self) -> Self;

    /// `v * a`
    fn times(self, a: Self::Scalar) -> Self;

    /// `a * v`, defined as `v * a`.
    #[inline]
    fn scale(a: Self::Scalar, v: Self) -> Self {
        v.times(a)
    }

    /// `v / a`, computed as `v * (1 / a)`.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] when `a` is exactly zero.
    fn checked_div(self, a: Self::Scalar) -> Result<Self> {
        if a == Self::Scalar::zero() {
            log::debug!("scalar division by zero");
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self.times(Self::Scalar::one() / a))
    }

    /// Linear interpolation `self + t * (to - self)`.
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate along the line.
    #[inline]
    fn lerp(self, to: Self, t: Self::Scalar) -> Self {
        self.plus(to.minus(self).times(t))
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! scalar_vector {
    ($($t:ty),*) => {$(
        impl Vector for $t {
            #[inline]
            fn zero() -> $t {
                0.0
            }

            #[inline]
            fn negated(self) -> $t {
                -self
            }

            #[inline]
            fn plus(self, other: $t) -> $t {
                self + other
            }

            #[inline]
            fn minus(self, other: $t) -> $t {
                self - other
            }

            #[inline]
            fn times(self, a: $t) -> $t {
                self * a
            }
        }
    )*};
}

scalar_vector!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lerp() {
        assert_eq!(Vector::lerp(2.0f64, 6.0, 0.0), 2.0);
        assert_eq!(Vector::lerp(2.0f64, 6.0, 1.0), 6.0);
        assert_eq!(Vector::lerp(2.0f64, 6.0, 0.25), 3.0);
        assert_eq!(Vector::lerp(2.0f64, 6.0, -0.5), 0.0);
        assert_eq!(Vector::lerp(2.0f32, 6.0, 1.5), 8.0);
    }

    #[test]
    fn scalar_checked_div() {
        assert_eq!(Vector::checked_div(3.0f64, -2.0), Ok(-1.5));
        assert_eq!(
            Vector::checked_div(3.0f64, 0.0),
            Err(GeometryError::DivisionByZero)
        );
        assert_eq!(
            Vector::checked_div(3.0f64, -0.0),
            Err(GeometryError::DivisionByZero)
        );
    }

    #[test]
    fn scalar_scale_commutes() {
        assert_eq!(<f64 as Vector>::scale(-2.0, 4.0), 4.0f64.times(-2.0));
    }

    #[test]
    fn scalar_is_zero() {
        assert!(Vector::is_zero(0.0f64));
        assert!(Vector::is_zero(-0.0f32));
        assert!(!Vector::is_zero(1e-300f64));
    }
}
