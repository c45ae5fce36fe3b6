//! The crate's own point, size and rectangle types.
//!
//! Each one implements only the primitives of its capabilities; all the
//! derived geometry comes from the traits:
//! - [`Point`] is a [`Vector2D`] and a [`ComplexNumber`]
//! - [`Size`] is a [`Vector2D`] whose coordinates are named `w` and `h`
//! - [`Rect`] is a [`Frame`] built from a `Point` and a `Size`

use std::fmt;

use crate::complex::ComplexNumber;
use crate::frame::Frame;
use crate::scalar::Scalar;
use crate::vector2d::Vector2D;
use crate::{impl_complex_ops, impl_vector_ops};

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<S> {
    pub x: S,
    pub y: S,
}

impl<S> Point<S> {
    pub const fn new(x: S, y: S) -> Self {
        Point { x, y }
    }
}

impl<S: Scalar> Point<S> {
    /// Calculate the midpoint between two points
    pub fn midpoint(self, other: Self) -> Self {
        Point {
            x: (self.x + other.x).half(),
            y: (self.y + other.y).half(),
        }
    }
}

impl<S: Scalar> Vector2D for Point<S> {
    type Scalar = S;

    #[inline]
    fn x(&self) -> S {
        self.x
    }

    #[inline]
    fn y(&self) -> S {
        self.y
    }

    #[inline]
    fn from_xy(x: S, y: S) -> Self {
        Point { x, y }
    }
}

impl<S: Scalar> ComplexNumber for Point<S> {}

impl_vector_ops!(Point<S>);
impl_complex_ops!(Point<S>);

impl<S: fmt::Display> fmt::Display for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<S> From<(S, S)> for Point<S> {
    fn from((x, y): (S, S)) -> Self {
        Point { x, y }
    }
}

/// 2D size. Components may be negative; a [`Frame`] normalizes them.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<S> {
    pub w: S,
    pub h: S,
}

impl<S> Size<S> {
    pub const fn new(w: S, h: S) -> Self {
        Size { w, h }
    }
}

impl<S: Scalar> Vector2D for Size<S> {
    type Scalar = S;

    #[inline]
    fn x(&self) -> S {
        self.w
    }

    #[inline]
    fn y(&self) -> S {
        self.h
    }

    #[inline]
    fn from_xy(x: S, y: S) -> Self {
        Size { w: x, h: y }
    }
}

impl_vector_ops!(Size<S>);

impl<S: fmt::Display> fmt::Display for Size<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.w, self.h)
    }
}

/// Axis-aligned rectangle: an origin and a possibly negative size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect<S> {
    pub origin: Point<S>,
    pub size: Size<S>,
}

impl<S> Rect<S> {
    pub const fn new(x: S, y: S, w: S, h: S) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    pub const fn from_origin_size(origin: Point<S>, size: Size<S>) -> Self {
        Rect { origin, size }
    }
}

impl<S: Scalar> Frame for Rect<S> {
    type Scalar = S;
    type Point = Point<S>;
    type Size = Size<S>;

    #[inline]
    fn origin(&self) -> Point<S> {
        self.origin
    }

    #[inline]
    fn size(&self) -> Size<S> {
        self.size
    }
}

impl<S: fmt::Display> fmt::Display for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.size)
    }
}

/// Convenient aliases
pub type Point64 = Point<f64>;
pub type Size64 = Size<f64>;
pub type Rect64 = Rect<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MetricSpace, Vector};

    // ==================== Point tests ====================

    #[test]
    fn point_arithmetic() {
        let u = Point::new(1.0, 2.0);
        let v = Point::new(3.0, 4.0);

        assert_eq!(u + v, Point::new(4.0, 6.0));
        assert_eq!(u - v, Point::new(-2.0, -2.0));
        assert_eq!(-v, Point::new(-3.0, -4.0));
        assert_eq!(v * -3.0, Point::new(-9.0, -12.0));
        assert_eq!(-3.0 * v, Point::new(-9.0, -12.0));
        assert!((v / -3.0).is_almost_equal(&Point::new(-1.0, -4.0 / 3.0)));
    }

    #[test]
    fn point_compound_assignment() {
        let (u, v, a) = (Point::new(1.0, 2.0), Point::new(3.0, 4.0), -3.0);
        let mut w = Point::new(-2.0, 1.0);

        w += v;
        assert!(w.is_almost_equal(&Point::new(1.0, 5.0)));
        w -= u;
        assert!(w.is_almost_equal(&Point::new(0.0, 3.0)));
        w *= a;
        assert!(w.is_almost_equal(&Point::new(0.0, -9.0)));
        w /= 2.0;
        assert!(w.is_almost_equal(&Point::new(0.0, -4.5)));
    }

    #[test]
    #[should_panic(expected = "division by zero is not allowed")]
    fn point_div_by_zero_panics() {
        let _ = Point::new(1.0, 2.0) / 0.0;
    }

    #[test]
    #[should_panic(expected = "division by zero is not allowed")]
    fn point_div_assign_by_zero_panics() {
        let mut w = Point::new(1.0, 2.0);
        w /= 0.0;
    }

    #[test]
    fn point_complex_operators() {
        let u = Point::new(1.0, 2.0);
        let v = Point::new(3.0, 4.0);

        assert_eq!(u * v, Point::new(-5.0, 10.0));
        assert!(((u * v) / v).is_almost_equal(&u));
        assert_eq!(u + 3.0, Point::new(4.0, 2.0));
        assert_eq!(3.0 + u, Point::new(4.0, 2.0));
        assert_eq!(u - 3.0, Point::new(-2.0, 2.0));
        assert_eq!(3.0 - u, Point::new(2.0, -2.0));
        assert!((10.0_f64 / v).is_almost_equal(&Point::new(1.2, -1.6)));

        let mut w = u;
        w *= v;
        assert_eq!(w, Point::new(-5.0, 10.0));
        w /= v;
        assert!(w.is_almost_equal(&u));
        w += 1.0;
        w -= 2.0;
        assert!(w.is_almost_equal(&Point::new(0.0, 2.0)));
    }

    #[test]
    #[should_panic(expected = "division by zero is not allowed")]
    fn complex_div_by_zero_panics() {
        let _ = Point::new(1.0, 2.0) / Point::new(0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "division by zero is not allowed")]
    fn real_div_by_zero_panics() {
        let _ = 1.0 / Point::<f64>::zero();
    }

    #[test]
    fn point_midpoint() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(4.0, 6.0);
        assert_eq!(p1.midpoint(p2), Point::new(2.0, 3.0));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn point_from_tuple() {
        assert_eq!(Point::from((1.0f32, 2.0f32)), Point::new(1.0, 2.0));
    }

    #[test]
    fn f32_points() {
        let v = Point::new(3.0f32, 4.0f32);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(2.0f32 * v, Point::new(6.0, 8.0));
        assert!((v / 2.0).is_almost_equal(&Point::new(1.5, 2.0)));
    }

    // ==================== Size tests ====================

    #[test]
    fn size_is_a_vector() {
        let s = Size::new(3.0, 4.0);
        assert_eq!(s.x(), 3.0);
        assert_eq!(s.y(), 4.0);
        assert_eq!(Size::from_xy(1.0, 2.0), Size::new(1.0, 2.0));
        assert_eq!(s + Size::new(1.0, 1.0), Size::new(4.0, 5.0));
        assert_eq!(s * 2.0, Size::new(6.0, 8.0));
        assert_eq!(s.magnitude(), 5.0);
        assert_eq!(Size::<f64>::zero(), Size::new(0.0, 0.0));
    }

    #[test]
    fn size_display() {
        assert_eq!(Size::new(3.0, -4.0).to_string(), "3 x -4");
    }

    // ==================== Rect tests ====================

    #[test]
    fn rect_constructors_agree() {
        assert_eq!(
            Rect::new(1.0, 2.0, 3.0, 4.0),
            Rect::from_origin_size(Point::new(1.0, 2.0), Size::new(3.0, 4.0))
        );
    }

    #[test]
    fn rect_display() {
        assert_eq!(Rect::new(1.0, 2.0, -3.0, 4.0).to_string(), "(1, 2) -3 x 4");
    }
}
