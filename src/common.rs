// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("vecpath requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn atan2(self, other: Self) -> Self => atan2;
    fn ceil(self) -> Self => ceil;
    fn cos(self) -> Self => cos;
    fn sin(self) -> Self => sin;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// Tolerance under which two lengths are treated as equal by the arc solver.
pub const ARC_EPSILON: f64 = 1e-5;

/// Returns `true` if `a` and `b` differ by at most `epsilon`.
///
/// # Examples
///
/// ```
/// use vecpath::common::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!approx_eq(1.0, 1.1, 1e-3));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Signed area of a closed polygon given by its vertices, by the shoelace
/// formula.
///
/// The polygon is closed implicitly from the last vertex back to the first.
/// The sign is positive when the vertices run in the positive angular
/// direction (counter-clockwise in a y-up space).
pub fn polygon_signed_area(vertices: impl IntoIterator<Item = crate::Point>) -> f64 {
    let mut iter = vertices.into_iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let mut last = first;
    let mut sum = 0.0;
    for p in iter {
        sum += last.to_vec2().cross(p.to_vec2());
        last = p;
    }
    sum += last.to_vec2().cross(first.to_vec2());
    0.5 * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn shoelace_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert!(approx_eq(polygon_signed_area(square), 4.0, 1e-12));
        assert!(approx_eq(
            polygon_signed_area(square.iter().rev().copied()),
            -4.0,
            1e-12
        ));
    }

    #[test]
    fn shoelace_degenerate() {
        assert_eq!(polygon_signed_area(core::iter::empty()), 0.0);
        assert_eq!(polygon_signed_area([Point::new(3.0, 4.0)]), 0.0);
    }
}
