// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of stroked paths into fillable outlines.

use core::f64::consts::PI;

use alloc::vec::Vec;

use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{Arc, EllipticalArc, Line, Path, Point, Segment, Vec2};

/// Defines the connection between two segments of a stroke.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Join {
    /// A straight line connecting the segments.
    Bevel,
    /// The segments are extended to their natural intersection point.
    Miter,
    /// An arc between the segments.
    Round,
}

/// Defines the shape to be drawn at the ends of a stroke.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cap {
    /// Flat cap.
    Butt,
    /// Square cap with dimensions equal to half the stroke width.
    Square,
    /// Rounded cap with radius equal to half the stroke width.
    Round,
}

/// Describes the visual style of a stroke.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// Width of the stroke.
    pub width: f64,
    /// Style for connecting segments of the stroke.
    pub join: Join,
    /// Limit for miter joins.
    ///
    /// This bounds the ratio of the miter length to the stroke width,
    /// `1 / sin(θ / 2)` for an angle `θ` between the segments.
    pub miter_limit: f64,
    /// Style for capping the beginning of an open subpath.
    pub start_cap: Cap,
    /// Style for capping the end of an open subpath.
    pub end_cap: Cap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            join: Join::Round,
            miter_limit: 4.0,
            start_cap: Cap::Butt,
            end_cap: Cap::Butt,
        }
    }
}

impl Stroke {
    /// Creates a new stroke with the specified width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Builder method for setting the join style.
    #[must_use]
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }

    /// Builder method for setting the limit for miter joins.
    #[must_use]
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    /// Builder method for setting the cap style for the start of the stroke.
    #[must_use]
    pub fn with_start_cap(mut self, cap: Cap) -> Self {
        self.start_cap = cap;
        self
    }

    /// Builder method for setting the cap style for the end of the stroke.
    #[must_use]
    pub fn with_end_cap(mut self, cap: Cap) -> Self {
        self.end_cap = cap;
        self
    }

    /// Builder method for setting the cap style.
    #[must_use]
    pub fn with_caps(mut self, cap: Cap) -> Self {
        self.start_cap = cap;
        self.end_cap = cap;
        self
    }
}

/// Distance below which a join is left out.
const JOIN_TOLERANCE: f64 = 1e-3;

/// Offset polyline under construction.
type Side = SmallVec<[Segment; 16]>;

/// Internal structure used for creating strokes.
struct StrokeCtx<'a> {
    style: &'a Stroke,
    output: Vec<Segment>,
    forward_path: Side,
    backward_path: Side,
    start_pt: Point,
    start_norm: Vec2,
    start_tan: Vec2,
    last_pt: Point,
    last_norm: Vec2,
    last_tan: Vec2,
    // joins turning by less than asin(join_thresh) are omitted
    join_thresh: f64,
}

/// Expand a stroke into a fill.
///
/// The result is a path whose fill under the nonzero rule covers what
/// stroking `path` with `style` would paint. Every subpath of the flattened
/// input becomes one closed contour. Contours overlap themselves at joins and
/// where segments cross, with every piece winding the same way, so an
/// even-odd fill leaves holes there. A stroke of zero (or
/// negative, or NaN) width paints nothing, so the result is empty.
///
/// # Examples
///
/// ```
/// use vecpath::{stroke, Path, Rect, Stroke};
///
/// let mut path = Path::new();
/// path.move_to((0.0, 0.0));
/// path.line_to((10.0, 0.0));
/// let outline = stroke(&path, &Stroke::new(2.0));
/// assert_eq!(outline.bounding_box(), Rect::new(0.0, -1.0, 10.0, 1.0));
/// assert_eq!(outline.signed_area(), 20.0);
/// ```
pub fn stroke(path: &Path, style: &Stroke) -> Path {
    if !(style.width > 0.0) {
        return Path::new();
    }
    let mut ctx = StrokeCtx {
        style,
        output: Vec::new(),
        forward_path: SmallVec::new(),
        backward_path: SmallVec::new(),
        start_pt: Point::ORIGIN,
        start_norm: Vec2::ZERO,
        start_tan: Vec2::ZERO,
        last_pt: Point::ORIGIN,
        last_norm: Vec2::ZERO,
        last_tan: Vec2::ZERO,
        join_thresh: 2.0 * JOIN_TOLERANCE / style.width,
    };
    let flattened = path.flattened();
    for polyline in flattened.polylines() {
        ctx.stroke_polyline(polyline);
    }
    log::trace!(
        "stroked {} lines into {} segments",
        flattened.lines().len(),
        ctx.output.len()
    );
    Path::from_vec(ctx.output)
}

/// A circular arc around `center`, from `center + norm` turning by `angle`,
/// ending exactly at `end`.
fn arc_segment(center: Point, norm: Vec2, angle: f64, end: Point) -> Segment {
    let r = norm.hypot();
    let arc = Arc::new(center, (r, r), norm.atan2(), angle, 0.0);
    Segment::ArcTo(EllipticalArc::from_arc(arc, end))
}

/// Draw a cap with the pen at `center + norm`, ending at `center - norm`.
fn add_cap(out: &mut Vec<Segment>, cap: Cap, center: Point, norm: Vec2) {
    let end = center - norm;
    match cap {
        Cap::Butt => out.push(Segment::LineTo(end)),
        Cap::Round => out.push(arc_segment(center, norm, PI, end)),
        Cap::Square => {
            let ext = norm.turn_90();
            out.push(Segment::LineTo(center + norm + ext));
            out.push(Segment::LineTo(center - norm + ext));
            out.push(Segment::LineTo(end));
        }
    }
}

fn extend_reversed(out: &mut Vec<Segment>, elements: &[Segment]) {
    for i in (1..elements.len()).rev() {
        let end = elements[i - 1].end_point();
        match elements[i] {
            Segment::ArcTo(arc) => out.push(Segment::ArcTo(arc.reversed(end))),
            _ => out.push(Segment::LineTo(end)),
        }
    }
}

impl StrokeCtx<'_> {
    fn stroke_polyline(&mut self, lines: &[Line]) {
        let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
            return;
        };
        let closed = lines.len() >= 2 && first.p0 == last.p1;
        self.start_pt = first.p0;
        self.last_pt = first.p0;
        for line in lines {
            let p1 = line.p1;
            if p1 != self.last_pt {
                let tangent = p1 - self.last_pt;
                self.do_join(tangent);
                self.last_tan = tangent;
                self.do_line(tangent, p1);
            }
        }
        if closed {
            self.finish_closed();
        } else {
            self.finish();
        }
    }

    /// Append forward and backward paths to output, joined by caps.
    fn finish(&mut self) {
        let Some(&Segment::MoveTo(start)) = self.forward_path.first() else {
            return;
        };
        self.output.extend_from_slice(&self.forward_path);
        add_cap(
            &mut self.output,
            self.style.end_cap,
            self.last_pt,
            -self.last_norm,
        );
        extend_reversed(&mut self.output, &self.backward_path);
        add_cap(
            &mut self.output,
            self.style.start_cap,
            self.start_pt,
            self.start_norm,
        );
        debug_assert_eq!(
            self.output.last().map(Segment::end_point),
            Some(start),
            "open stroke contour must end where it starts"
        );
        self.forward_path.clear();
        self.backward_path.clear();
    }

    /// Finish a closed polyline.
    ///
    /// The forward loop and the reversed backward loop become one contour,
    /// connected by a line that is walked once in each direction.
    fn finish_closed(&mut self) {
        let Some(&Segment::MoveTo(start)) = self.forward_path.first() else {
            return;
        };
        self.do_join(self.start_tan);
        self.output.extend_from_slice(&self.forward_path);
        if let Some(back_end) = self.backward_path.last().map(Segment::end_point) {
            self.output.push(Segment::LineTo(back_end));
        }
        extend_reversed(&mut self.output, &self.backward_path);
        self.output.push(Segment::LineTo(start));
        self.forward_path.clear();
        self.backward_path.clear();
    }

    fn do_join(&mut self, tan0: Vec2) {
        let scale = 0.5 * self.style.width / tan0.hypot();
        let norm = scale * tan0.turn_90();
        let p0 = self.last_pt;
        if self.forward_path.is_empty() {
            self.forward_path.push(Segment::MoveTo(p0 - norm));
            self.backward_path.push(Segment::MoveTo(p0 + norm));
            self.start_tan = tan0;
            self.start_norm = norm;
            return;
        }
        let ab = self.last_tan;
        let cd = tan0;
        let cross = ab.cross(cd);
        let dot = ab.dot(cd);
        let hypot = Vec2::new(cross, dot).hypot();
        if dot > 0.0 && cross.abs() < hypot * self.join_thresh {
            return;
        }
        let last_norm = self.last_norm;
        match self.style.join {
            Join::Bevel => {
                self.forward_path.push(Segment::LineTo(p0 - norm));
                self.backward_path.push(Segment::LineTo(p0 + norm));
            }
            Join::Miter => {
                if 2.0 * hypot < (hypot + dot) * self.style.miter_limit * self.style.miter_limit {
                    if cross > 0.0 {
                        let fp_last = p0 - last_norm;
                        let fp_this = p0 - norm;
                        let h = ab.cross(fp_this - fp_last) / cross;
                        let miter_pt = fp_this - cd * h;
                        self.forward_path.push(Segment::LineTo(miter_pt));
                    } else if cross < 0.0 {
                        let fp_last = p0 + last_norm;
                        let fp_this = p0 + norm;
                        let h = ab.cross(fp_this - fp_last) / cross;
                        let miter_pt = fp_this - cd * h;
                        self.backward_path.push(Segment::LineTo(miter_pt));
                    }
                }
                self.forward_path.push(Segment::LineTo(p0 - norm));
                self.backward_path.push(Segment::LineTo(p0 + norm));
            }
            Join::Round => {
                let angle = cross.atan2(dot);
                if cross > 0.0 {
                    self.backward_path.push(Segment::LineTo(p0 + norm));
                    self.forward_path
                        .push(arc_segment(p0, -last_norm, angle, p0 - norm));
                } else {
                    // A full reversal turns clockwise, around the far side.
                    self.forward_path.push(Segment::LineTo(p0 - norm));
                    self.backward_path
                        .push(arc_segment(p0, last_norm, -angle.abs(), p0 + norm));
                }
            }
        }
    }

    fn do_line(&mut self, tangent: Vec2, p1: Point) {
        let scale = 0.5 * self.style.width / tangent.hypot();
        let norm = scale * tangent.turn_90();
        self.forward_path.push(Segment::LineTo(p1 - norm));
        self.backward_path.push(Segment::LineTo(p1 + norm));
        self.last_pt = p1;
        self.last_norm = norm;
    }
}
