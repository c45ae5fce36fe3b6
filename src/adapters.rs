//! Capability impls for host vector types.
//!
//! `glam` vectors already carry their own operators, so only the primitives
//! are bound here. Note that glam's inherent methods (`dot`, `angle_to`,
//! `lerp`, `distance`, ...) take precedence over the trait methods of the
//! same name in method-call syntax; call the trait versions with
//! `Vector2D::angle_to(u, v)` to get the checked behavior.

use glam::{DVec2, Vec2};

use crate::complex::ComplexNumber;
use crate::vector2d::Vector2D;

impl Vector2D for DVec2 {
    type Scalar = f64;

    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn from_xy(x: f64, y: f64) -> Self {
        DVec2::new(x, y)
    }
}

impl ComplexNumber for DVec2 {}

impl Vector2D for Vec2 {
    type Scalar = f32;

    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    fn from_xy(x: f32, y: f32) -> Self {
        Vec2::new(x, y)
    }
}

impl ComplexNumber for Vec2 {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeometryError, MetricSpace, Vector};
    use glam::{dvec2, vec2};

    #[test]
    fn dvec2_gains_derived_geometry() {
        let u = dvec2(1.0, 2.0);
        let v = dvec2(3.0, 4.0);
        assert_eq!(Vector2D::cross(u, v), -2.0);
        assert_eq!(Vector2D::magnitude(v), 5.0);
        assert!(MetricSpace::distance(&u, &v).is_almost_equal(&8.0f64.sqrt()));
        assert_eq!(Vector::lerp(u, v, -2.0), dvec2(-3.0, -2.0));
        assert_eq!(u.scaled_by(v), dvec2(3.0, 8.0));
    }

    #[test]
    fn dvec2_checked_angle() {
        let i = DVec2::X;
        let angle = Vector2D::angle_to(i, -i).unwrap();
        assert_eq!(angle, std::f64::consts::PI);
        assert_eq!(
            Vector2D::angle_to(i, DVec2::ZERO),
            Err(GeometryError::UndefinedAngle)
        );
    }

    #[test]
    fn dvec2_complex_product() {
        let u = dvec2(1.0, 2.0);
        let v = dvec2(3.0, 4.0);
        assert_eq!(u.complex_mul(v), dvec2(-5.0, 10.0));
        // glam's own `*` stays component-wise
        assert_eq!(u * v, dvec2(3.0, 8.0));
    }

    #[test]
    fn vec2_is_f32() {
        let v = vec2(3.0, 4.0);
        assert_eq!(Vector2D::magnitude(v), 5.0f32);
        assert!(
            Vector2D::unit_vector(v)
                .unwrap()
                .is_almost_equal(&vec2(0.6, 0.8))
        );
        assert!(MetricSpace::is_almost_equal(&Vec2::i(), &Vec2::X));
    }
}
