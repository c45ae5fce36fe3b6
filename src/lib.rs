//! Generic 2D geometry built from small capability traits.
//!
//! A type opts into as much geometry as it needs by implementing a handful
//! of primitives:
//!
//! - [`Vector2D`]: `x`, `y` and `from_xy`. This also makes the type a
//!   [`Vector`] and a [`MetricSpace`], and gives it norms, products,
//!   rotation, angles and linear interpolation.
//! - [`ComplexNumber`]: an empty impl on top of `Vector2D` adds complex
//!   multiplication, division and conjugation.
//! - [`Frame`]: `origin` and `size` give a full set of rectangle accessors.
//!
//! Operator syntax is wired per type with [`impl_vector_ops!`] and
//! [`impl_complex_ops!`].
//!
//! ```
//! use geometry_kit::prelude::*;
//!
//! let u = Point::new(1.0, 2.0);
//! let v = Point::new(3.0, 4.0);
//! assert_eq!(u + v, Point::new(4.0, 6.0));
//! assert_eq!(u * v, Point::new(-5.0, 10.0));
//! assert_eq!(u.lerp(v, -2.0), Point::new(-3.0, -2.0));
//!
//! let frame = Rect::new(1.0, 2.0, -3.0, 4.0);
//! assert_eq!(frame.width(), 3.0);
//! assert_eq!(frame.bottom_left(), Point::new(-2.0, 6.0));
//! ```

pub mod log;

mod adapters;
mod complex;
mod errors;
mod frame;
mod macros;
mod metric;
mod scalar;
mod shapes;
mod types;
mod vector;
mod vector2d;

pub use complex::ComplexNumber;
pub use errors::{GeometryError, Result};
pub use frame::Frame;
pub use metric::MetricSpace;
pub use scalar::Scalar;
pub use shapes::RegularPolygon;
pub use types::{Point, Point64, Rect, Rect64, Size, Size64};
pub use vector::Vector;
pub use vector2d::Vector2D;

/// Traits and types for glob import.
pub mod prelude {
    pub use crate::{
        ComplexNumber, Frame, GeometryError, MetricSpace, Point, Rect, RegularPolygon, Scalar,
        Size, Vector, Vector2D,
    };
}
