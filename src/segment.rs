// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments.

use core::f64::consts::PI;
use core::ops::Mul;

use crate::{Affine, Arc, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single drawing command of a [`Path`](crate::Path).
///
/// Every variant ends at an anchor point, the pen position after the
/// command runs (see [`Segment::end_point`]). The start of a drawing
/// segment is the end point of the segment before it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// A straight line to the given point.
    LineTo(Point),
    /// A quadratic Bézier curve with control point and end point.
    QuadTo(Point, Point),
    /// A cubic Bézier curve with two control points and an end point.
    CurveTo(Point, Point, Point),
    /// An elliptical arc, stored with its center parameterization.
    ArcTo(EllipticalArc),
}

/// The payload of [`Segment::ArcTo`].
///
/// This keeps both the resolved center form (used to generate geometry) and
/// the flags of the endpoint form (used to write the segment back out as a
/// path command).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticalArc {
    /// The end point of the arc.
    pub to: Point,
    /// The center of the ellipse.
    pub center: Point,
    /// The radii of the ellipse, after any out-of-range correction.
    pub radii: Vec2,
    /// Rotation of the ellipse's x axis, in radians.
    pub x_rotation: f64,
    /// Angle at which the arc starts, in radians.
    pub start_angle: f64,
    /// Signed angular extent of the arc, in radians.
    pub sweep_angle: f64,
    /// Whether the arc is the larger of the two candidate arcs.
    pub large_arc: bool,
    /// Whether the arc runs towards positive angles.
    pub sweep: bool,
}

impl EllipticalArc {
    /// Build the segment payload for a center-form arc ending at `to`.
    ///
    /// The flags are derived from the sweep angle.
    pub fn from_arc(arc: Arc, to: Point) -> EllipticalArc {
        EllipticalArc {
            to,
            center: arc.center,
            radii: arc.radii,
            x_rotation: arc.x_rotation,
            start_angle: arc.start_angle,
            sweep_angle: arc.sweep_angle,
            large_arc: arc.sweep_angle.abs() > PI,
            sweep: arc.sweep_angle > 0.0,
        }
    }

    /// The center parameterization of this arc.
    #[inline]
    pub fn arc(&self) -> Arc {
        Arc::new(
            self.center,
            self.radii,
            self.start_angle,
            self.sweep_angle,
            self.x_rotation,
        )
    }

    /// The same arc traversed backwards, ending at `from`.
    ///
    /// `from` is the point the arc originally started at, which is not
    /// stored in the segment.
    #[must_use]
    pub fn reversed(&self, from: Point) -> EllipticalArc {
        EllipticalArc {
            to: from,
            start_angle: self.start_angle + self.sweep_angle,
            sweep_angle: -self.sweep_angle,
            sweep: !self.sweep,
            ..*self
        }
    }
}

impl Segment {
    /// The pen position after this segment.
    #[inline]
    pub fn end_point(&self) -> Point {
        match *self {
            Segment::MoveTo(p)
            | Segment::LineTo(p)
            | Segment::QuadTo(_, p)
            | Segment::CurveTo(_, _, p) => p,
            Segment::ArcTo(arc) => arc.to,
        }
    }

    /// Is this a [`Segment::MoveTo`]?
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Segment::MoveTo(_))
    }
}

impl Mul<EllipticalArc> for Affine {
    type Output = EllipticalArc;

    /// Maps the ellipse, not just the anchor points.
    ///
    /// The image of an ellipse under an affine map is an ellipse whose axes
    /// come from the singular value decomposition of the composed linear
    /// part. The start angle is recovered from the mapped start point, and
    /// the sweep changes sign when the map mirrors.
    fn mul(self, arc: EllipticalArc) -> EllipticalArc {
        let [a, b, c, d, _, _] = self.as_coeffs();
        let linear = Affine::new([a, b, c, d, 0.0, 0.0])
            * Affine::rotate(arc.x_rotation)
            * Affine::scale_non_uniform(arc.radii.x, arc.radii.y);
        let (radii, x_rotation) = linear.svd();
        let center = self * arc.center;
        let start = self * arc.arc().start_point();
        let local = (start - center).rotate(-x_rotation);
        let start_angle = (local.y * radii.x).atan2(local.x * radii.y);
        let sweep_angle = if self.determinant() < 0.0 {
            -arc.sweep_angle
        } else {
            arc.sweep_angle
        };
        EllipticalArc {
            to: self * arc.to,
            center,
            radii,
            x_rotation,
            start_angle,
            sweep_angle,
            large_arc: arc.large_arc,
            sweep: sweep_angle > 0.0,
        }
    }
}

impl Mul<Segment> for Affine {
    type Output = Segment;

    fn mul(self, other: Segment) -> Segment {
        match other {
            Segment::MoveTo(p) => Segment::MoveTo(self * p),
            Segment::LineTo(p) => Segment::LineTo(self * p),
            Segment::QuadTo(p1, p2) => Segment::QuadTo(self * p1, self * p2),
            Segment::CurveTo(p1, p2, p3) => Segment::CurveTo(self * p1, self * p2, self * p3),
            Segment::ArcTo(arc) => Segment::ArcTo(self * arc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    fn assert_near(p0: Point, p1: Point) {
        assert!(p0.distance(p1) < 1e-9, "{p0:?} != {p1:?}");
    }

    fn quarter_arc() -> EllipticalArc {
        let arc = Arc::new((0.0, 0.0), (2.0, 1.0), 0.0, FRAC_PI_2, 0.0);
        EllipticalArc::from_arc(arc, arc.end_point())
    }

    #[test]
    fn end_points() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(3.0, 4.0);
        assert_eq!(Segment::MoveTo(p).end_point(), p);
        assert_eq!(Segment::LineTo(p).end_point(), p);
        assert_eq!(Segment::QuadTo(q, p).end_point(), p);
        assert_eq!(Segment::CurveTo(q, q, p).end_point(), p);
        assert_near(Segment::ArcTo(quarter_arc()).end_point(), Point::new(0.0, 1.0));
        assert!(Segment::MoveTo(p).is_move());
        assert!(!Segment::LineTo(p).is_move());
    }

    #[test]
    fn flags_follow_sweep_angle() {
        let arc = quarter_arc();
        assert!(arc.sweep);
        assert!(!arc.large_arc);
        let big = EllipticalArc::from_arc(Arc::new((0.0, 0.0), (1.0, 1.0), 0.0, -4.0, 0.0), Point::ORIGIN);
        assert!(!big.sweep);
        assert!(big.large_arc);
    }

    #[test]
    fn reversed_arc() {
        let arc = quarter_arc();
        let start = arc.arc().start_point();
        let rev = arc.reversed(start);
        assert_eq!(rev.to, start);
        assert!(!rev.sweep);
        assert_near(rev.arc().start_point(), arc.to);
        assert_near(rev.arc().end_point(), start);
    }

    #[test]
    fn transform_arc_follows_samples() {
        let arc = quarter_arc();
        let transforms = [
            Affine::IDENTITY,
            Affine::translate((3.0, -2.0)),
            Affine::rotate(0.7),
            Affine::scale_non_uniform(3.0, 0.5),
            Affine::FLIP_Y,
            Affine::new([1.0, 0.4, -0.3, 2.0, 5.0, 6.0]),
            Affine::skew(0.5, 0.0),
        ];
        for a in transforms {
            let mapped = a * arc;
            let src = arc.arc();
            let dst = mapped.arc();
            for i in 0..=8 {
                let t = f64::from(i) / 8.0;
                let expected = a * src.sample(src.start_angle + t * src.sweep_angle);
                let got = dst.sample(dst.start_angle + t * dst.sweep_angle);
                assert!(expected.distance(got) < 1e-9, "{a:?} t={t}: {expected:?} != {got:?}");
            }
            assert_near(mapped.to, a * arc.to);
            assert_eq!(mapped.sweep, mapped.sweep_angle > 0.0);
        }
    }
}
