// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening of curves and arcs into lines.
//!
//! Bézier curves are flattened by adaptive subdivision. Each curve is halved
//! with de Casteljau's construction until a cheap flatness test says the
//! chord is within tolerance of the curve; the halves wait on a
//! fixed-capacity stack instead of the call stack. Arcs are sampled at a
//! uniform angular step chosen so that the sagitta of each chord is within
//! tolerance.
//!
//! The bounding box is accumulated in the same pass, from the points that are
//! actually emitted, so it always contains the flattened geometry.

use core::iter::FusedIterator;

use alloc::vec::Vec;
use arrayvec::ArrayVec;

use crate::common::polygon_signed_area;
use crate::{EllipticalArc, Line, Point, Rect, Segment};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The tolerance used for a path's cached flattening, in user space units.
///
/// This is half a device pixel when user space is device space.
pub const FLATTEN_TOLERANCE: f64 = 0.5;

/// Subdivision depth after which a curve piece is emitted as is.
///
/// Each level halves the parameter range, so this is reached only for
/// extremely large curves or non-finite control points.
const MAX_DEPTH: usize = 16;

/// Upper bound on the number of lines a single arc is sampled into.
const MAX_ARC_STEPS: usize = 1 << 16;

/// The result of flattening a sequence of segments.
///
/// This holds the split lines of every subpath, in order, along with the
/// indices where each subpath's polyline starts, and the bounding box of all
/// the points produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flattened {
    lines: Vec<Line>,
    starts: Vec<usize>,
    bbox: Rect,
}

impl Flattened {
    /// All the split lines, subpath after subpath.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The rectangle spanned by every emitted point.
    ///
    /// This is [`Rect::ZERO`] when nothing was emitted.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.bbox
    }

    /// Returns `true` if there are no split lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate the polylines, one per subpath that produced lines.
    ///
    /// Consecutive lines within a polyline are connected: each starts where
    /// the previous one ends.
    pub fn polylines(&self) -> Polylines<'_> {
        Polylines {
            flattened: self,
            ix: 0,
        }
    }

    /// Signed area of the polylines, each closed implicitly.
    ///
    /// This is the area a nonzero fill would cover if no polyline
    /// overlapped itself or another one; it is positive for polylines
    /// running towards positive angles.
    pub fn signed_area(&self) -> f64 {
        self.polylines()
            .map(|lines| {
                let start = lines.first().map(|l| l.p0);
                polygon_signed_area(start.into_iter().chain(lines.iter().map(|l| l.p1)))
            })
            .sum()
    }

    /// Winding number of the polylines around `p`, each closed implicitly.
    pub fn winding(&self, p: Point) -> i32 {
        self.polylines()
            .map(|lines| {
                let closing = match (lines.first(), lines.last()) {
                    (Some(first), Some(last)) => Line::new(last.p1, first.p0).winding(p),
                    _ => 0,
                };
                lines.iter().map(|l| l.winding(p)).sum::<i32>() + closing
            })
            .sum()
    }
}

/// Iterator over the polylines of a [`Flattened`].
///
/// Created by [`Flattened::polylines`].
#[derive(Clone, Debug)]
pub struct Polylines<'a> {
    flattened: &'a Flattened,
    ix: usize,
}

impl<'a> Iterator for Polylines<'a> {
    type Item = &'a [Line];

    fn next(&mut self) -> Option<&'a [Line]> {
        let Flattened { lines, starts, .. } = self.flattened;
        while self.ix < starts.len() {
            let start = starts[self.ix];
            let end = starts.get(self.ix + 1).copied().unwrap_or(lines.len());
            self.ix += 1;
            if end > start {
                return Some(&lines[start..end]);
            }
        }
        None
    }
}

impl FusedIterator for Polylines<'_> {}

/// Flatten `segments` into lines, within `tolerance`.
///
/// The pen starts at the origin, so drawing segments before the first
/// [`Segment::MoveTo`] start there. Every move point is included in the
/// bounding box, even when no line leaves from it.
///
/// # Examples
///
/// ```
/// use vecpath::{flatten, Point, Rect, Segment};
///
/// let segments = [
///     Segment::MoveTo(Point::new(0.0, 0.0)),
///     Segment::QuadTo(Point::new(10.0, 10.0), Point::new(20.0, 0.0)),
/// ];
/// let flattened = flatten(&segments, 0.1);
/// assert!(flattened.lines().len() > 1);
/// let bbox = flattened.bounding_box();
/// assert!(bbox.y1 <= 5.0 && bbox.y1 > 4.9);
/// assert_eq!(bbox.x1, 20.0);
/// ```
pub fn flatten(segments: &[Segment], tolerance: f64) -> Flattened {
    debug_assert!(tolerance > 0.0, "flattening tolerance must be positive");
    let mut flattener = Flattener::new(tolerance);
    for segment in segments {
        match *segment {
            Segment::MoveTo(p) => flattener.move_to(p),
            Segment::LineTo(p) => flattener.line_to(p),
            Segment::QuadTo(p1, p2) => flattener.quad_to(p1, p2),
            Segment::CurveTo(p1, p2, p3) => flattener.curve_to(p1, p2, p3),
            Segment::ArcTo(arc) => flattener.arc_to(&arc),
        }
    }
    let flattened = flattener.finish();
    log::trace!(
        "flattened {} segments into {} lines",
        segments.len(),
        flattened.lines.len()
    );
    flattened
}

struct Flattener {
    tolerance: f64,
    cursor: Point,
    lines: Vec<Line>,
    starts: Vec<usize>,
    bbox: Option<Rect>,
}

impl Flattener {
    fn new(tolerance: f64) -> Self {
        Flattener {
            tolerance,
            cursor: Point::ORIGIN,
            lines: Vec::new(),
            starts: alloc::vec![0],
            bbox: None,
        }
    }

    fn include(&mut self, p: Point) {
        self.bbox = Some(match self.bbox {
            Some(bbox) => bbox.union_pt(p),
            None => Rect::from_point(p),
        });
    }

    fn move_to(&mut self, p: Point) {
        if self.starts.last() != Some(&self.lines.len()) {
            self.starts.push(self.lines.len());
        }
        self.include(p);
        self.cursor = p;
    }

    fn line_to(&mut self, p: Point) {
        let p0 = self.cursor;
        self.include(p0);
        self.include(p);
        self.lines.push(Line::new(p0, p));
        self.cursor = p;
    }

    fn quad_to(&mut self, p1: Point, p2: Point) {
        let threshold = 16.0 * self.tolerance * self.tolerance;
        let mut stack: ArrayVec<([Point; 3], usize), { MAX_DEPTH + 1 }> = ArrayVec::new();
        stack.push(([self.cursor, p1, p2], 0));
        while let Some(([q0, q1, q2], depth)) = stack.pop() {
            let dd = q0.to_vec2() - 2.0 * q1.to_vec2() + q2.to_vec2();
            // Negated so that NaN counts as flat.
            if depth >= MAX_DEPTH || !(dd.hypot2() > threshold) {
                self.line_to(q2);
                continue;
            }
            let l1 = q0.midpoint(q1);
            let r1 = q1.midpoint(q2);
            let m = l1.midpoint(r1);
            stack.push(([m, r1, q2], depth + 1));
            stack.push(([q0, l1, m], depth + 1));
        }
    }

    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
        let threshold = 16.0 * self.tolerance * self.tolerance;
        let mut stack: ArrayVec<([Point; 4], usize), { MAX_DEPTH + 1 }> = ArrayVec::new();
        stack.push(([self.cursor, p1, p2, p3], 0));
        while let Some(([c0, c1, c2, c3], depth)) = stack.pop() {
            // Distance bound between a cubic and its chord.
            let u = 3.0 * c1.to_vec2() - 2.0 * c0.to_vec2() - c3.to_vec2();
            let v = 3.0 * c2.to_vec2() - c0.to_vec2() - 2.0 * c3.to_vec2();
            let flatness = (u.x * u.x).max(v.x * v.x) + (u.y * u.y).max(v.y * v.y);
            if depth >= MAX_DEPTH || !(flatness > threshold) {
                self.line_to(c3);
                continue;
            }
            let ab = c0.midpoint(c1);
            let bc = c1.midpoint(c2);
            let cd = c2.midpoint(c3);
            let abc = ab.midpoint(bc);
            let bcd = bc.midpoint(cd);
            let m = abc.midpoint(bcd);
            stack.push(([m, bcd, cd, c3], depth + 1));
            stack.push(([c0, ab, abc, m], depth + 1));
        }
    }

    fn arc_to(&mut self, arc: &EllipticalArc) {
        let r = arc.radii.x.abs().max(arc.radii.y.abs());
        let n = arc_steps(r, arc.sweep_angle, self.tolerance);
        let center_arc = arc.arc();
        for i in 1..n {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / n as f64;
            self.line_to(center_arc.sample(arc.start_angle + t * arc.sweep_angle));
        }
        // The last step lands exactly on the stored end point.
        self.line_to(arc.to);
    }

    fn finish(self) -> Flattened {
        Flattened {
            lines: self.lines,
            starts: self.starts,
            bbox: self.bbox.unwrap_or(Rect::ZERO),
        }
    }
}

/// Number of lines to approximate an arc of radius `r` sweeping `sweep`
/// radians.
///
/// A chord spanning `step` radians deviates from the circle by
/// `r (1 - cos(step / 2))`, which is held at `tolerance`.
#[allow(clippy::cast_possible_truncation)]
fn arc_steps(r: f64, sweep: f64, tolerance: f64) -> usize {
    let step = 2.0 * (1.0 - tolerance / r).clamp(-1.0, 1.0).acos();
    let n = (sweep.abs() / step).ceil();
    if n.is_nan() || n < 1.0 {
        1
    } else if n >= MAX_ARC_STEPS as f64 {
        MAX_ARC_STEPS
    } else {
        n as usize
    }
}
