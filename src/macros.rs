//! Operator syntax for capability types.
//!
//! The orphan rules forbid `impl<V: Vector2D> Add for V`, so the operators
//! are wired per type. Each macro accepts either a type generic over its
//! scalar (`Point<S>`), which gets the left-scalar forms for both `f32` and
//! `f64`, or a concrete type plus its scalar (`Pixel, f32`).
//!
//! ```
//! use geometry_kit::prelude::*;
//! use geometry_kit::{impl_complex_ops, impl_vector_ops};
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! struct Z {
//!     re: f64,
//!     im: f64,
//! }
//!
//! impl Vector2D for Z {
//!     type Scalar = f64;
//!     fn x(&self) -> f64 { self.re }
//!     fn y(&self) -> f64 { self.im }
//!     fn from_xy(re: f64, im: f64) -> Self { Z { re, im } }
//! }
//! impl ComplexNumber for Z {}
//!
//! impl_vector_ops!(Z, f64);
//! impl_complex_ops!(Z, f64);
//!
//! let i = Z { re: 0.0, im: 1.0 };
//! assert_eq!(i * i, Z { re: -1.0, im: 0.0 });
//! assert_eq!(2.0 * i + 1.0, Z { re: 1.0, im: 2.0 });
//! ```
//!
//! The division operators panic on the inputs where the checked methods
//! return [`GeometryError`](crate::GeometryError).

/// Implement `+ - * /`, unary `-` and their compound assignments for a
/// [`Vector2D`](crate::Vector2D) type, plus `a * v` for the scalar.
///
/// # Panics
///
/// The generated `v / a` and `v /= a` panic when `a` is exactly zero.
#[macro_export]
macro_rules! impl_vector_ops {
    (@left $ty:ty, $s:ty) => {
        impl ::core::ops::Mul<$ty> for $s {
            type Output = $ty;

            #[inline]
            fn mul(self, v: $ty) -> $ty {
                <$ty as $crate::Vector>::scale(self, v)
            }
        }
    };

    ($name:ident < $s:ident >) => {
        impl<$s: $crate::Scalar> ::core::ops::Add for $name<$s> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $crate::Vector::plus(self, rhs)
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::Sub for $name<$s> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $crate::Vector::minus(self, rhs)
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::Neg for $name<$s> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $crate::Vector::negated(self)
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::Mul<$s> for $name<$s> {
            type Output = Self;

            #[inline]
            fn mul(self, a: $s) -> Self {
                $crate::Vector::times(self, a)
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::Div<$s> for $name<$s> {
            type Output = Self;

            #[inline]
            fn div(self, a: $s) -> Self {
                match $crate::Vector::checked_div(self, a) {
                    Ok(v) => v,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::AddAssign for $name<$s> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::SubAssign for $name<$s> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::MulAssign<$s> for $name<$s> {
            #[inline]
            fn mul_assign(&mut self, a: $s) {
                *self = *self * a;
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::DivAssign<$s> for $name<$s> {
            #[inline]
            fn div_assign(&mut self, a: $s) {
                *self = *self / a;
            }
        }

        $crate::impl_vector_ops!(@left $name<f32>, f32);
        $crate::impl_vector_ops!(@left $name<f64>, f64);
    };

    ($ty:ty, $s:ty) => {
        impl ::core::ops::Add for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $crate::Vector::plus(self, rhs)
            }
        }

        impl ::core::ops::Sub for $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $crate::Vector::minus(self, rhs)
            }
        }

        impl ::core::ops::Neg for $ty {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                $crate::Vector::negated(self)
            }
        }

        impl ::core::ops::Mul<$s> for $ty {
            type Output = $ty;

            #[inline]
            fn mul(self, a: $s) -> $ty {
                $crate::Vector::times(self, a)
            }
        }

        impl ::core::ops::Div<$s> for $ty {
            type Output = $ty;

            #[inline]
            fn div(self, a: $s) -> $ty {
                match $crate::Vector::checked_div(self, a) {
                    Ok(v) => v,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl ::core::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                *self = *self + rhs;
            }
        }

        impl ::core::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                *self = *self - rhs;
            }
        }

        impl ::core::ops::MulAssign<$s> for $ty {
            #[inline]
            fn mul_assign(&mut self, a: $s) {
                *self = *self * a;
            }
        }

        impl ::core::ops::DivAssign<$s> for $ty {
            #[inline]
            fn div_assign(&mut self, a: $s) {
                *self = *self / a;
            }
        }

        $crate::impl_vector_ops!(@left $ty, $s);
    };
}

/// Implement complex `u * v`, `u / v`, real `v + a`, `v - a` and the
/// left-scalar forms `a + v`, `a - v`, `a / v` for a
/// [`ComplexNumber`](crate::ComplexNumber) type.
///
/// A bare scalar stands for `(a, 0)`.
///
/// The generic form implements the left-scalar operators for both `f32` and
/// `f64`, so `10.0 / v` with an untyped literal needs the scalar type
/// spelled out (`10.0_f64 / v`) unless `v`'s type is already known.
///
/// # Panics
///
/// The generated `u / v`, `u /= v` and `a / v` panic when `v` is the zero
/// vector.
#[macro_export]
macro_rules! impl_complex_ops {
    (@left $ty:ty, $s:ty) => {
        impl ::core::ops::Add<$ty> for $s {
            type Output = $ty;

            #[inline]
            fn add(self, v: $ty) -> $ty {
                $crate::ComplexNumber::add_real(v, self)
            }
        }

        impl ::core::ops::Sub<$ty> for $s {
            type Output = $ty;

            #[inline]
            fn sub(self, v: $ty) -> $ty {
                $crate::ComplexNumber::subtract_from_real(v, self)
            }
        }

        impl ::core::ops::Div<$ty> for $s {
            type Output = $ty;

            #[inline]
            fn div(self, v: $ty) -> $ty {
                match $crate::ComplexNumber::checked_real_div(v, self) {
                    Ok(q) => q,
                    Err(err) => panic!("{}", err),
                }
            }
        }
    };

    ($name:ident < $s:ident >) => {
        impl<$s: $crate::Scalar> ::core::ops::Mul for $name<$s> {
            type Output = Self;

            #[inline]
            fn mul(self, v: Self) -> Self {
                $crate::ComplexNumber::complex_mul(self, v)
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::Div for $name<$s> {
            type Output = Self;

            #[inline]
            fn div(self, v: Self) -> Self {
                match $crate::ComplexNumber::checked_complex_div(self, v) {
                    Ok(q) => q,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::MulAssign for $name<$s> {
            #[inline]
            fn mul_assign(&mut self, v: Self) {
                *self = *self * v;
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::DivAssign for $name<$s> {
            #[inline]
            fn div_assign(&mut self, v: Self) {
                *self = *self / v;
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::Add<$s> for $name<$s> {
            type Output = Self;

            #[inline]
            fn add(self, a: $s) -> Self {
                $crate::ComplexNumber::add_real(self, a)
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::Sub<$s> for $name<$s> {
            type Output = Self;

            #[inline]
            fn sub(self, a: $s) -> Self {
                $crate::ComplexNumber::sub_real(self, a)
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::AddAssign<$s> for $name<$s> {
            #[inline]
            fn add_assign(&mut self, a: $s) {
                *self = $crate::ComplexNumber::add_real(*self, a);
            }
        }

        impl<$s: $crate::Scalar> ::core::ops::SubAssign<$s> for $name<$s> {
            #[inline]
            fn sub_assign(&mut self, a: $s) {
                *self = $crate::ComplexNumber::sub_real(*self, a);
            }
        }

        $crate::impl_complex_ops!(@left $name<f32>, f32);
        $crate::impl_complex_ops!(@left $name<f64>, f64);
    };

    ($ty:ty, $s:ty) => {
        impl ::core::ops::Mul for $ty {
            type Output = $ty;

            #[inline]
            fn mul(self, v: $ty) -> $ty {
                $crate::ComplexNumber::complex_mul(self, v)
            }
        }

        impl ::core::ops::Div for $ty {
            type Output = $ty;

            #[inline]
            fn div(self, v: $ty) -> $ty {
                match $crate::ComplexNumber::checked_complex_div(self, v) {
                    Ok(q) => q,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl ::core::ops::MulAssign for $ty {
            #[inline]
            fn mul_assign(&mut self, v: $ty) {
                *self = *self * v;
            }
        }

        impl ::core::ops::DivAssign for $ty {
            #[inline]
            fn div_assign(&mut self, v: $ty) {
                *self = *self / v;
            }
        }

        impl ::core::ops::Add<$s> for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, a: $s) -> $ty {
                $crate::ComplexNumber::add_real(self, a)
            }
        }

        impl ::core::ops::Sub<$s> for $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, a: $s) -> $ty {
                $crate::ComplexNumber::sub_real(self, a)
            }
        }

        impl ::core::ops::AddAssign<$s> for $ty {
            #[inline]
            fn add_assign(&mut self, a: $s) {
                *self = $crate::ComplexNumber::add_real(*self, a);
            }
        }

        impl ::core::ops::SubAssign<$s> for $ty {
            #[inline]
            fn sub_assign(&mut self, a: $s) {
                *self = $crate::ComplexNumber::sub_real(*self, a);
            }
        }

        $crate::impl_complex_ops!(@left $ty, $s);
    };
}
