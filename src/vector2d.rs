//! Two-dimensional vectors.
//!
//! A type becomes a [`Vector2D`] by providing `x`, `y` and `from_xy`. Every
//! other operation on this page, plus [`MetricSpace`] and [`Vector`], is
//! derived from those three.

use num_traits::{Float, FloatConst, One, Zero};

use crate::errors::{GeometryError, Result};
use crate::log;
use crate::metric::MetricSpace;
use crate::scalar::Scalar;
use crate::types::{Point, Rect, Size};
use crate::vector::Vector;

/// A pair of coordinates with Euclidean vector operations.
///
/// ```
/// use geometry_kit::prelude::*;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Pixel {
///     col: f32,
///     row: f32,
/// }
///
/// impl Vector2D for Pixel {
///     type Scalar = f32;
///     fn x(&self) -> f32 { self.col }
///     fn y(&self) -> f32 { self.row }
///     fn from_xy(x: f32, y: f32) -> Self { Pixel { col: x, row: y } }
/// }
///
/// let p = Pixel::from_xy(3.0, 4.0);
/// assert_eq!(p.magnitude(), 5.0);
/// assert_eq!(p.distance(&Pixel::zero()), 5.0);
/// ```
pub trait Vector2D: Copy + PartialEq {
    type Scalar: Scalar;

    fn x(&self) -> Self::Scalar;

    fn y(&self) -> Self::Scalar;

    /// Build a value from its coordinates. `from_xy(x, y).x()` must be `x`
    /// and `.y()` must be `y`, bit for bit.
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    // ------------------------------------------------------------------
    // Constants and conversions
    // ------------------------------------------------------------------

    /// `(1, 0)`
    #[inline]
    fn i() -> Self {
        Self::from_xy(Self::Scalar::one(), Self::Scalar::zero())
    }

    /// `(0, 1)`
    #[inline]
    fn j() -> Self {
        Self::from_xy(Self::Scalar::zero(), Self::Scalar::one())
    }

    #[inline]
    fn from_tuple((x, y): (Self::Scalar, Self::Scalar)) -> Self {
        Self::from_xy(x, y)
    }

    #[inline]
    fn to_tuple(self) -> (Self::Scalar, Self::Scalar) {
        (self.x(), self.y())
    }

    #[inline]
    fn to_point(self) -> Point<Self::Scalar> {
        Point::new(self.x(), self.y())
    }

    #[inline]
    fn to_size(self) -> Size<Self::Scalar> {
        Size::new(self.x(), self.y())
    }

    /// Where a vector starts when drawn as a frame: always the origin.
    #[inline]
    fn frame_origin(self) -> Point<Self::Scalar> {
        Point::new(Self::Scalar::zero(), Self::Scalar::zero())
    }

    /// The frame spanned by this vector from the origin.
    #[inline]
    fn as_frame(self) -> Rect<Self::Scalar> {
        Rect::from_origin_size(self.frame_origin(), self.to_size())
    }

    // ------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------

    /// `x² + y²`
    ///
    /// Underflows to zero for vectors shorter than about the square root of
    /// the smallest positive scalar; prefer [`magnitude`](Vector2D::magnitude)
    /// when only the length is needed.
    #[inline]
    fn norm_squared(self) -> Self::Scalar {
        self.x() * self.x() + self.y() * self.y()
    }

    /// `√(x² + y²)`, computed with `hypot` so that it stays non-zero for
    /// every non-zero vector.
    #[inline]
    fn magnitude(self) -> Self::Scalar {
        self.x().hypot(self.y())
    }

    /// Same as [`magnitude`](Vector2D::magnitude).
    #[inline]
    fn norm(self) -> Self::Scalar {
        self.magnitude()
    }

    /// `self / magnitude`.
    ///
    /// Fails with [`GeometryError::UndefinedNormalization`] for the zero
    /// vector.
    fn unit_vector(self) -> Result<Self> {
        let m = self.magnitude();
        if m == Self::Scalar::zero() {
            log::debug!("cannot normalize the zero vector");
            return Err(GeometryError::UndefinedNormalization);
        }
        Ok(Self::from_xy(self.x() / m, self.y() / m))
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// `u • v = u.x * v.x + u.y * v.y`
    #[inline]
    fn dot(self, v: Self) -> Self::Scalar {
        self.x() * v.x() + self.y() * v.y()
    }

    /// `u × v = u.x * v.y - u.y * v.x`, the signed area of the
    /// parallelogram spanned by `u` and `v`.
    #[inline]
    fn cross(self, v: Self) -> Self::Scalar {
        self.x() * v.y() - self.y() * v.x()
    }

    /// Non-proportional scale: `(u.x * v.x, u.y * v.y)`.
    #[inline]
    fn scaled_by(self, v: Self) -> Self {
        Self::from_xy(self.x() * v.x(), self.y() * v.y())
    }

    /// Non-proportional division: `(u.x / v.x, u.y / v.y)`.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] when either component
    /// of `v` is zero.
    fn divided_by(self, v: Self) -> Result<Self> {
        if v.x() == Self::Scalar::zero() || v.y() == Self::Scalar::zero() {
            log::debug!("component-wise division by a zero component");
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self::from_xy(self.x() / v.x(), self.y() / v.y()))
    }

    // ------------------------------------------------------------------
    // Angles
    // ------------------------------------------------------------------

    /// Rotate counter-clockwise (in a y-up frame) by `angle` radians.
    fn rotated_by(self, angle: Self::Scalar) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_xy(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Directed angle from `self` to `v` in radians, in `(-π, π]`.
    ///
    /// Opposite vectors give `π`, never `-π`. Fails with
    /// [`GeometryError::UndefinedAngle`] when either vector is zero.
    fn angle_to(self, v: Self) -> Result<Self::Scalar> {
        let (m, n) = (self.magnitude(), v.magnitude());
        if m == Self::Scalar::zero() || n == Self::Scalar::zero() {
            log::debug!("angle to or from the zero vector");
            return Err(GeometryError::UndefinedAngle);
        }
        // compare directions, so tiny vectors do not underflow the products
        let a = Self::from_xy(self.x() / m, self.y() / m);
        let b = Self::from_xy(v.x() / n, v.y() / n);
        let angle = a.cross(b).atan2(a.dot(b));
        // atan2(-0, negative) lands on the excluded end of the range.
        if angle == -Self::Scalar::PI() {
            return Ok(Self::Scalar::PI());
        }
        Ok(angle)
    }

    /// `(r cos θ, r sin θ)`
    #[inline]
    fn polar(radius: Self::Scalar, angle: Self::Scalar) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_xy(radius * cos, radius * sin)
    }
}

impl<V: Vector2D> MetricSpace for V {
    type Scalar = V::Scalar;

    /// `|self - other|`
    #[inline]
    fn distance(&self, other: &V) -> V::Scalar {
        V::from_xy(self.x() - other.x(), self.y() - other.y()).magnitude()
    }
}

impl<V: Vector2D> Vector for V {
    #[inline]
    fn zero() -> V {
        V::from_xy(V::Scalar::zero(), V::Scalar::zero())
    }

    #[inline]
    fn negated(self) -> V {
        V::from_xy(-self.x(), -self.y())
    }

    #[inline]
    fn plus(self, other: V) -> V {
        V::from_xy(self.x() + other.x(), self.y() + other.y())
    }

    #[inline]
    fn minus(self, other: V) -> V {
        V::from_xy(self.x() - other.x(), self.y() - other.y())
    }

    #[inline]
    fn times(self, a: V::Scalar) -> V {
        V::from_xy(a * self.x(), a * self.y())
    }
}
