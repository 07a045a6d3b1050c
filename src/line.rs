// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::Mul;

use crate::{Affine, Point, Vec2};

/// A single straight line, the unit of a path's split lines.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` pointing in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Line::new(self.p1, self.p0)
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The displacement from start to end.
    #[inline]
    pub fn direction(self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// The point at parameter `t`, `0` being the start and `1` the end.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    /// Computes the point where two lines, if extended to infinity, would cross.
    ///
    /// Returns `None` for parallel lines.
    pub fn crossing_point(self, other: Line) -> Option<Point> {
        let ab = self.p1 - self.p0;
        let cd = other.p1 - other.p0;
        let pcd = ab.cross(cd);
        if pcd == 0.0 {
            return None;
        }
        let h = ab.cross(self.p0 - other.p0) / pcd;
        Some(other.p0 + cd * h)
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to(self, p: Point) -> f64 {
        let d = self.direction();
        let len2 = d.hypot2();
        if len2 == 0.0 {
            return p.distance(self.p0);
        }
        let t = ((p - self.p0).dot(d) / len2).clamp(0.0, 1.0);
        p.distance(self.eval(t))
    }

    /// Signed area between the line and the origin.
    ///
    /// Summed over a closed polyline this gives the enclosed area.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * self.p0.to_vec2().cross(self.p1.to_vec2())
    }

    /// Winding contribution of this line for a ray cast from `p` towards
    /// negative x.
    ///
    /// Upward and downward crossings count with opposite signs, so the sum
    /// over a closed polyline is its winding number around `p`.
    pub fn winding(&self, p: Point) -> i32 {
        let (start, end) = (self.p0, self.p1);
        let sign = if end.y > start.y {
            if p.y < start.y || p.y >= end.y {
                return 0;
            }
            -1
        } else if end.y < start.y {
            if p.y < end.y || p.y >= start.y {
                return 0;
            }
            1
        } else {
            return 0;
        };
        if p.x < start.x.min(end.x) {
            return 0;
        }
        if p.x >= start.x.max(end.x) {
            return sign;
        }
        // line equation ax + by = c
        let a = end.y - start.y;
        let b = start.x - end.x;
        let c = a * start.x + b * start.y;
        // Count the line only if it passes to the left of `p`.
        if (a * p.x + b * p.y - c) * f64::from(sign) <= 0.0 {
            sign
        } else {
            0
        }
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl Mul<Line> for Affine {
    type Output = Line;

    #[inline]
    fn mul(self, other: Line) -> Line {
        Line::new(self * other.p0, self * other.p1)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Affine, Line, Point};

    #[test]
    fn line_crossing() {
        let l1 = Line::new((0.0, 0.0), (1.0, 1.0));
        let l2 = Line::new((4.0, 0.0), (3.0, 1.0));
        assert_eq!(l1.crossing_point(l2), Some(Point::new(2.0, 2.0)));
        let l3 = Line::new((0.0, 1.0), (1.0, 2.0));
        assert_eq!(l1.crossing_point(l3), None);
    }

    #[test]
    fn distance_to_clamps() {
        let l = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(l.distance_to(Point::new(5.0, 3.0)), 3.0);
        assert_eq!(l.distance_to(Point::new(-3.0, 4.0)), 5.0);
        assert_eq!(l.distance_to(Point::new(13.0, -4.0)), 5.0);
        let dot = Line::new((1.0, 1.0), (1.0, 1.0));
        assert_eq!(dot.distance_to(Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn square_winding_and_area() {
        let pts = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let lines: Vec<Line> = (0..4)
            .map(|i| Line::new(pts[i], pts[(i + 1) % 4]))
            .collect();
        let area: f64 = lines.iter().map(Line::signed_area).sum();
        assert_eq!(area, 16.0);
        let inside: i32 = lines.iter().map(|l| l.winding(Point::new(2.0, 2.0))).sum();
        assert_eq!(inside.abs(), 1);
        let outside: i32 = lines.iter().map(|l| l.winding(Point::new(5.0, 2.0))).sum();
        assert_eq!(outside, 0);
        let reversed: i32 = lines
            .iter()
            .map(|l| l.reversed().winding(Point::new(2.0, 2.0)))
            .sum();
        assert_eq!(reversed, -inside);
    }

    fn closed_winding(points: &[(f64, f64)], p: Point) -> i32 {
        (0..points.len())
            .map(|i| Line::new(points[i], points[(i + 1) % points.len()]).winding(p))
            .sum()
    }

    #[test]
    fn slanted_edges_winding() {
        let diamond = [(0.0, -10.0), (10.0, 0.0), (0.0, 10.0), (-10.0, 0.0)];
        for inside in [(0.0, 0.0), (6.0, 1.0), (-6.0, 1.0), (0.5, -9.0)] {
            let w = closed_winding(&diamond, Point::new(inside.0, inside.1));
            assert_eq!(w.abs(), 1, "{inside:?}");
        }
        for outside in [(9.0, 9.0), (-9.0, 9.0), (6.0, -6.0), (11.0, 0.5), (-20.0, 0.5)] {
            let w = closed_winding(&diamond, Point::new(outside.0, outside.1));
            assert_eq!(w, 0, "{outside:?}");
        }

        // A single slanted line counts only when it is left of the point.
        let l = Line::new((0.0, 0.0), (10.0, 10.0));
        assert_ne!(l.winding(Point::new(7.0, 5.0)), 0);
        assert_eq!(l.winding(Point::new(3.0, 5.0)), 0);
        assert_eq!(l.winding(Point::new(7.0, 5.0)), -l.reversed().winding(Point::new(7.0, 5.0)));

        let triangle = [(0.0, 0.0), (4.0, 0.0), (1.0, 5.0)];
        assert_eq!(closed_winding(&triangle, Point::new(1.5, 1.5)).abs(), 1);
        assert_eq!(closed_winding(&triangle, Point::new(3.5, 3.0)), 0);
        assert_eq!(closed_winding(&triangle, Point::new(0.2, 3.0)), 0);
    }

    #[test]
    fn transform_line() {
        let l = Line::new((1.0, 2.0), (3.0, 4.0));
        let moved = Affine::translate((1.0, -1.0)) * l;
        assert_eq!(moved, Line::new((2.0, 1.0), (4.0, 3.0)));
    }
}
