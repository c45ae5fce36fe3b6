//! Regular polygons.

use crate::frame::Frame;
use crate::log;
use crate::scalar::Scalar;
use crate::types::Point;
use crate::vector::Vector;
use crate::vector2d::Vector2D;

/// A regular polygon: `sides` vertices evenly spaced on a circle of
/// `radius`, the first one at angle `rotation`.
///
/// ```
/// use geometry_kit::prelude::*;
///
/// let square = RegularPolygon::new(4, 2.0_f64.sqrt());
/// let v = square.vertices();
/// assert!(v[0].is_almost_equal(&Point::new(1.0, -1.0)));
/// assert!(v[2].is_almost_equal(&Point::new(-1.0, 1.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularPolygon<S> {
    sides: usize,
    radius: S,
    center: Option<Point<S>>,
    rotation: S,
}

impl<S: Scalar> RegularPolygon<S> {
    /// A polygon centered at the origin with the default rotation.
    ///
    /// Fewer than three sides are raised to three.
    pub fn new(sides: usize, radius: S) -> Self {
        if sides < 3 {
            log::warn!("regular polygon needs at least 3 sides, got {}", sides);
        }
        let sides = sides.max(3);
        RegularPolygon {
            sides,
            radius,
            center: None,
            rotation: Self::default_rotation(sides),
        }
    }

    /// `-π/2`, turned by half a step when `n` is even. With y pointing down
    /// this puts a vertex on top of odd polygons and a flat edge on top of
    /// even ones.
    fn default_rotation(n: usize) -> S {
        let up = -S::FRAC_PI_2();
        if n % 2 == 0 {
            up + S::PI() / S::from_count(n)
        } else {
            up
        }
    }

    pub fn with_center(self, center: Point<S>) -> Self {
        RegularPolygon {
            center: Some(center),
            ..self
        }
    }

    pub fn with_rotation(self, rotation: S) -> Self {
        RegularPolygon { rotation, ..self }
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Distance from the center to each vertex.
    pub fn radius(&self) -> S {
        self.radius
    }

    pub fn rotation(&self) -> S {
        self.rotation
    }

    /// The configured center, or the origin.
    pub fn center(&self) -> Point<S> {
        self.center.unwrap_or_else(Point::zero)
    }

    /// Radius of the inscribed circle: `radius * cos(π / n)`.
    pub fn inscribed_radius(&self) -> S {
        self.radius * (S::PI() / S::from_count(self.sides)).cos()
    }

    pub fn vertices(&self) -> Vec<Point<S>> {
        self.vertices_around(self.center())
    }

    /// The vertices placed inside `frame`: around the configured center if
    /// there is one, else around the frame's center.
    pub fn vertices_in<F>(&self, frame: &F) -> Vec<Point<S>>
    where
        F: Frame<Scalar = S>,
    {
        let center = self.center.unwrap_or_else(|| frame.center().to_point());
        self.vertices_around(center)
    }

    fn vertices_around(&self, center: Point<S>) -> Vec<Point<S>> {
        let step = S::TAU() / S::from_count(self.sides);
        (0..self.sides)
            .map(|i| {
                let angle = self.rotation + step * S::from_count(i);
                center + Point::polar(self.radius, angle)
            })
            .collect()
    }
}
