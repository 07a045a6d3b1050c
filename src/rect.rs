// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;

use crate::Point;

/// An axis-aligned rectangle.
///
/// This is what [`Path::bounding_box`](crate::Path::bounding_box) returns.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from minimum and maximum coordinates.
    #[inline(always)]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A zero-area rectangle containing only `p`.
    #[inline]
    pub const fn from_point(p: Point) -> Rect {
        Rect::new(p.x, p.y, p.x, p.y)
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x.min(p1.x), p0.y.min(p1.y), p0.x.max(p1.x), p0.y.max(p1.y))
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The top-left corner in a y-down space.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// Grow the rectangle to include `pt`.
    ///
    /// Zero-area rectangles keep their corner, so a succession of
    /// `union_pt` calls starting from [`Rect::from_point`] yields the
    /// enclosing rectangle of all the points.
    #[inline]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// The smallest rectangle enclosing two rectangles.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Returns `true` if `point` lies within `self`, edges included.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    /// Expand the rectangle by `amount` on every side.
    #[inline]
    #[must_use]
    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x0 - amount,
            self.y0 - amount,
            self.x1 + amount,
            self.y1 + amount,
        )
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "Rect {{ origin: {:?}, size: ({:?}, {:?}) }}",
                self.origin(),
                self.width(),
                self.height()
            )
        } else {
            write!(
                f,
                "Rect {{ x0: {:?}, y0: {:?}, x1: {:?}, y1: {:?} }}",
                self.x0, self.y0, self.x1, self.y1
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_at_origin() {
        assert_eq!(Rect::ZERO.area(), 0.0);
        assert_eq!(Rect::ZERO.origin(), Point::ORIGIN);
        assert!(Rect::ZERO.contains(Point::ORIGIN));
    }

    #[test]
    fn union_pt_accumulates() {
        let pts = [(3.0, -1.0), (-2.0, 4.0), (0.5, 0.5)];
        let mut r = Rect::from_point(Point::new(1.0, 1.0));
        for p in pts {
            r = r.union_pt(p.into());
        }
        assert_eq!(r, Rect::new(-2.0, -1.0, 3.0, 4.0));
        assert_eq!(r, Rect::from_points((3.0, 4.0), (-2.0, -1.0)));
    }

    #[test]
    fn contains_edges() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);
        assert!(r.contains(Point::new(2.0, 1.0)));
        assert!(!r.contains(Point::new(2.0, 1.0 + 1e-9)));
        assert!(r.inflate(1e-6).contains(Point::new(2.0, 1.0 + 1e-9)));
    }

    #[test]
    fn debug_formats() {
        let r = Rect::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(
            format!("{r:?}"),
            "Rect { x0: 1.0, y0: 2.0, x1: 4.0, y1: 8.0 }"
        );
        assert_eq!(
            format!("{r:#?}"),
            "Rect { origin: (1.0, 2.0), size: (3.0, 6.0) }"
        );
    }
}
