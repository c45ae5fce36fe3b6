//! Axis-aligned rectangle geometry derived from an origin and a size.
//!
//! A frame is not orientation-normalized: its size may be negative in either
//! direction. Lengths and extrema normalize with `abs`/`min`/`max`, so the
//! derived geometry describes the same rectangle whichever corner the
//! origin sits on.
//!
//! Corner names assume a y-down coordinate system: `top` is `min_y`.

use num_traits::{Float, One, Zero};

use crate::metric::MetricSpace;
use crate::scalar::Scalar;
use crate::types::{Point, Rect, Size};
use crate::vector2d::Vector2D;

/// A type with an `origin` and a `size`.
///
/// ```
/// use geometry_kit::prelude::*;
///
/// let rect = Rect::new(1.0, 2.0, -3.0, 4.0);
/// assert_eq!(rect.width(), 3.0);
/// assert_eq!(rect.min_x(), -2.0);
/// assert_eq!(rect.top_left(), Point::new(-2.0, 2.0));
/// ```
pub trait Frame {
    type Scalar: Scalar;
    type Point: Vector2D<Scalar = Self::Scalar>;
    type Size: Vector2D<Scalar = Self::Scalar>;

    fn origin(&self) -> Self::Point;

    fn size(&self) -> Self::Size;

    /// `Rect((0, 0), (1, 1))`
    fn unit_square() -> Rect<Self::Scalar>
    where
        Self: Sized,
    {
        let (zero, one) = (Self::Scalar::zero(), Self::Scalar::one());
        Rect::new(zero, zero, one, one)
    }

    // ------------------------------------------------------------------
    // Lengths
    // ------------------------------------------------------------------

    /// `|size.x|`
    #[inline]
    fn width(&self) -> Self::Scalar {
        self.size().x().abs()
    }

    /// `|size.y|`
    #[inline]
    fn height(&self) -> Self::Scalar {
        self.size().y().abs()
    }

    #[inline]
    fn min_side(&self) -> Self::Scalar {
        self.width().min(self.height())
    }

    #[inline]
    fn max_side(&self) -> Self::Scalar {
        self.width().max(self.height())
    }

    // ------------------------------------------------------------------
    // Coordinates
    // ------------------------------------------------------------------

    /// Left bound.
    #[inline]
    fn min_x(&self) -> Self::Scalar {
        let ox = self.origin().x();
        ox.min(ox + self.size().x())
    }

    /// Right bound.
    #[inline]
    fn max_x(&self) -> Self::Scalar {
        let ox = self.origin().x();
        ox.max(ox + self.size().x())
    }

    /// `origin.x + size.x / 2`, with the size taken as signed.
    #[inline]
    fn mid_x(&self) -> Self::Scalar {
        self.origin().x() + self.size().x().half()
    }

    /// Top bound.
    #[inline]
    fn min_y(&self) -> Self::Scalar {
        let oy = self.origin().y();
        oy.min(oy + self.size().y())
    }

    /// Bottom bound.
    #[inline]
    fn max_y(&self) -> Self::Scalar {
        let oy = self.origin().y();
        oy.max(oy + self.size().y())
    }

    /// `origin.y + size.y / 2`, with the size taken as signed.
    #[inline]
    fn mid_y(&self) -> Self::Scalar {
        self.origin().y() + self.size().y().half()
    }

    // ------------------------------------------------------------------
    // Edge centers and corners
    // ------------------------------------------------------------------

    fn top(&self) -> Self::Point {
        Self::Point::from_xy(self.mid_x(), self.min_y())
    }

    fn bottom(&self) -> Self::Point {
        Self::Point::from_xy(self.mid_x(), self.max_y())
    }

    fn left(&self) -> Self::Point {
        Self::Point::from_xy(self.min_x(), self.mid_y())
    }

    fn right(&self) -> Self::Point {
        Self::Point::from_xy(self.max_x(), self.mid_y())
    }

    fn center(&self) -> Self::Point {
        Self::Point::from_xy(self.mid_x(), self.mid_y())
    }

    fn bottom_left(&self) -> Self::Point {
        Self::Point::from_xy(self.min_x(), self.max_y())
    }

    fn bottom_right(&self) -> Self::Point {
        Self::Point::from_xy(self.max_x(), self.max_y())
    }

    fn top_left(&self) -> Self::Point {
        Self::Point::from_xy(self.min_x(), self.min_y())
    }

    fn top_right(&self) -> Self::Point {
        Self::Point::from_xy(self.max_x(), self.min_y())
    }

    /// `[bottom_left, bottom_right, top_right, top_left]`
    fn corners(&self) -> [Self::Point; 4] {
        [
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ]
    }

    // ------------------------------------------------------------------
    // Relative points
    // ------------------------------------------------------------------

    /// `(min_x + s * width, min_y + t * height)`.
    ///
    /// Reads the frame as if normalized: `(0, 0)` is the top-left corner and
    /// `(1, 1)` the bottom-right one. `s` and `t` are not clamped.
    fn relative_point(&self, s: Self::Scalar, t: Self::Scalar) -> Self::Point {
        Self::Point::from_xy(
            self.min_x() + s * self.width(),
            self.min_y() + t * self.height(),
        )
    }

    /// [`relative_point`](Frame::relative_point) with `(s, t)` taken from any
    /// 2D value.
    #[inline]
    fn relative_point_of<V>(&self, v: V) -> Self::Point
    where
        V: Vector2D<Scalar = Self::Scalar>,
    {
        self.relative_point(v.x(), v.y())
    }

    /// `width / height`. Infinite or NaN when the height is zero.
    #[inline]
    fn aspect_ratio(&self) -> Self::Scalar {
        self.width() / self.height()
    }

    // ------------------------------------------------------------------
    // Rectangles
    // ------------------------------------------------------------------

    /// The same origin and size as a plain [`Rect`].
    fn rect(&self) -> Rect<Self::Scalar> {
        Rect::from_origin_size(self.origin().to_point(), self.size().to_size())
    }

    /// The square of side `max_side` sharing this frame's center.
    fn bounding_square(&self) -> Rect<Self::Scalar> {
        centered_square(self.mid_x(), self.mid_y(), self.max_side())
    }

    /// The square of side `min_side` sharing this frame's center.
    fn inscribed_square(&self) -> Rect<Self::Scalar> {
        centered_square(self.mid_x(), self.mid_y(), self.min_side())
    }

    /// Origins and sizes are both almost equal.
    fn is_almost_equal_frame(&self, other: &Self) -> bool {
        MetricSpace::is_almost_equal(&self.origin(), &other.origin())
            && MetricSpace::is_almost_equal(&self.size(), &other.size())
    }
}

fn centered_square<S: Scalar>(mid_x: S, mid_y: S, side: S) -> Rect<S> {
    let d = side.half();
    Rect::from_origin_size(Point::new(mid_x - d, mid_y - d), Size::new(side, side))
}
