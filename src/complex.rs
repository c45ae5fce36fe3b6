//! Complex arithmetic on top of [`Vector2D`].
//!
//! `x` is the real part and `y` the imaginary part. The capability is opt-in:
//! a `Vector2D` type becomes complex with an empty `impl ComplexNumber for T {}`.
//! Addition, subtraction and scalar multiplication are the vector ones.
//!
//! Whenever a bare scalar `a` meets a complex value it stands for `(a, 0)`,
//! so `a + v` only moves the real part and `a - v` negates the imaginary one.

use num_traits::{One, Zero};

use crate::errors::{GeometryError, Result};
use crate::log;
use crate::vector2d::Vector2D;

pub trait ComplexNumber: Vector2D {
    /// `a - bi`
    #[inline]
    fn conjugate(self) -> Self {
        Self::from_xy(self.x(), -self.y())
    }

    /// `v + a` and `a + v`: `(a + x, y)`.
    #[inline]
    fn add_real(self, a: Self::Scalar) -> Self {
        Self::from_xy(a + self.x(), self.y())
    }

    /// `v - a`: `(x - a, y)`.
    #[inline]
    fn sub_real(self, a: Self::Scalar) -> Self {
        Self::from_xy(self.x() - a, self.y())
    }

    /// `a - v`: `(a - x, -y)`.
    #[inline]
    fn subtract_from_real(self, a: Self::Scalar) -> Self {
        Self::from_xy(a - self.x(), -self.y())
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    #[inline]
    fn complex_mul(self, v: Self) -> Self {
        let (a, b, c, d) = (self.x(), self.y(), v.x(), v.y());
        Self::from_xy(a * c - b * d, a * d + b * c)
    }

    /// `u / v = u * conj(v) / |v|²`.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] when `v` is zero.
    fn checked_complex_div(self, v: Self) -> Result<Self> {
        let n = v.norm_squared();
        if n == Self::Scalar::zero() {
            log::debug!("complex division by the zero vector");
            return Err(GeometryError::DivisionByZero);
        }
        let p = self.complex_mul(v.conjugate());
        let k = Self::Scalar::one() / n;
        Ok(Self::from_xy(k * p.x(), k * p.y()))
    }

    /// `a / self`, with `a` read as `(a, 0)`.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] when `self` is zero.
    #[inline]
    fn checked_real_div(self, a: Self::Scalar) -> Result<Self> {
        Self::from_xy(a, Self::Scalar::zero()).checked_complex_div(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use crate::MetricSpace;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn conjugate() {
        assert_eq!(p(1.0, 2.0).conjugate(), p(1.0, -2.0));
        assert_eq!(p(1.0, 2.0).conjugate().conjugate(), p(1.0, 2.0));
    }

    #[test]
    fn real_scalars_touch_only_the_real_part() {
        let v = p(1.0, 2.0);
        assert_eq!(v.add_real(3.0), p(4.0, 2.0));
        assert_eq!(v.sub_real(3.0), p(-2.0, 2.0));
        assert_eq!(v.subtract_from_real(3.0), p(2.0, -2.0));
    }

    #[test]
    fn multiplication() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        assert_eq!(p(1.0, 2.0).complex_mul(p(3.0, 4.0)), p(-5.0, 10.0));
        // i * i = -1
        assert_eq!(p(0.0, 1.0).complex_mul(p(0.0, 1.0)), p(-1.0, 0.0));
    }

    #[test]
    fn multiplying_by_unit_complex_rotates() {
        let v = p(2.0, 1.0);
        let r = Point::polar(1.0, std::f64::consts::FRAC_PI_2);
        assert!(v.complex_mul(r).is_almost_equal(&v.rotated_by(std::f64::consts::FRAC_PI_2)));
    }

    #[test]
    fn division() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        let q = p(-5.0, 10.0).checked_complex_div(p(3.0, 4.0)).unwrap();
        assert!(q.is_almost_equal(&p(1.0, 2.0)));
        assert_eq!(
            p(1.0, 1.0).checked_complex_div(p(0.0, 0.0)),
            Err(GeometryError::DivisionByZero)
        );
    }

    #[test]
    fn real_division() {
        // 1 / i = -i
        let q = p(0.0, 1.0).checked_real_div(1.0).unwrap();
        assert!(q.is_almost_equal(&p(0.0, -1.0)));
        // 10 / (3 + 4i) = (30 - 40i) / 25
        let q = p(3.0, 4.0).checked_real_div(10.0).unwrap();
        assert!(q.is_almost_equal(&p(1.2, -1.6)));
        assert_eq!(
            p(0.0, 0.0).checked_real_div(1.0),
            Err(GeometryError::DivisionByZero)
        );
    }

    #[test]
    fn times_conjugate_is_norm_squared() {
        let u = p(3.0, -7.0);
        assert_eq!(u.complex_mul(u.conjugate()), p(u.norm_squared(), 0.0));
    }
}
