// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths made of segments, with a lazily flattened view.

use core::cell::OnceCell;
use core::fmt;
use core::ops::Mul;

use alloc::vec::Vec;

use crate::{
    flatten, stroke, Affine, Arc, EllipticalArc, Flattened, Line, Point, Rect, Segment, Stroke,
    SvgArc, Vec2, FLATTEN_TOLERANCE,
};

/// A path made of [`Segment`]s, possibly with multiple subpaths.
///
/// A subpath is the run of segments from one [`Segment::MoveTo`] up to the
/// next one. The path lazily computes its flattened form (split lines and
/// bounding box) on first access and keeps it until the next mutation.
///
/// The cache uses a [`OnceCell`], so a `Path` can be sent to another thread
/// but not shared between threads.
#[derive(Clone, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    segments: Vec<Segment>,
    #[cfg_attr(feature = "serde", serde(skip))]
    #[cfg_attr(feature = "schemars", schemars(skip))]
    cache: OnceCell<Flattened>,
}

impl Path {
    /// Create a new, empty path.
    pub fn new() -> Path {
        Path::default()
    }

    /// Create a path from a vector of segments.
    pub fn from_vec(segments: Vec<Segment>) -> Path {
        Path {
            segments,
            cache: OnceCell::new(),
        }
    }

    /// Push a segment onto the path.
    pub fn push(&mut self, segment: Segment) {
        self.invalidate();
        self.segments.push(segment);
    }

    /// Start a new subpath at `p`.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(Segment::MoveTo(p.into()));
    }

    /// Push a straight line from the pen position to `p`.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(Segment::LineTo(p.into()));
    }

    /// Push a horizontal line ending at `x`.
    ///
    /// The y coordinate is taken from the end of the last segment, or `0` if
    /// the path is empty.
    pub fn horizontal_line_to(&mut self, x: f64) {
        let y = self.current_point().map_or(0.0, |p| p.y);
        self.line_to((x, y));
    }

    /// Push a vertical line ending at `y`.
    ///
    /// The x coordinate is taken from the end of the last segment, or `0` if
    /// the path is empty.
    pub fn vertical_line_to(&mut self, y: f64) {
        let x = self.current_point().map_or(0.0, |p| p.x);
        self.line_to((x, y));
    }

    /// Push a quadratic Bézier curve with control point `through`.
    pub fn quadratic_bezier_curve_to<P: Into<Point>>(&mut self, through: P, p: P) {
        self.push(Segment::QuadTo(through.into(), p.into()));
    }

    /// Push a cubic Bézier curve with control points `c1` and `c2`.
    pub fn cubic_bezier_curve_to<P: Into<Point>>(&mut self, c1: P, c2: P, p: P) {
        self.push(Segment::CurveTo(c1.into(), c2.into(), p.into()));
    }

    /// Push an elliptical arc from the pen position to `p`.
    ///
    /// The arc is given in endpoint form, as in SVG path data, and resolved to
    /// its center form right away (see [`Arc::from_svg_arc`]). If the arc is
    /// degenerate (zero radius, or ending where it starts) a straight line to
    /// `p` is pushed instead.
    pub fn elliptical_arc_to<P: Into<Point>, V: Into<Vec2>>(
        &mut self,
        p: P,
        radii: V,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) {
        let to = p.into();
        let svg_arc = SvgArc {
            from: self.current_point().unwrap_or(Point::ORIGIN),
            to,
            radii: radii.into(),
            x_rotation: x_axis_rotation,
            large_arc,
            sweep,
        };
        match Arc::from_svg_arc(&svg_arc) {
            Some(arc) => self.push(Segment::ArcTo(EllipticalArc {
                to,
                center: arc.center,
                radii: arc.radii,
                x_rotation: arc.x_rotation,
                start_angle: arc.start_angle,
                sweep_angle: arc.sweep_angle,
                large_arc,
                sweep,
            })),
            None => {
                log::debug!("degenerate arc {svg_arc:?} replaced by a line");
                self.line_to(to);
            }
        }
    }

    /// Push a circular arc of radius `radius` from the pen position to `p`.
    pub fn arc_to<P: Into<Point>>(&mut self, p: P, radius: f64, large_arc: bool, sweep: bool) {
        self.elliptical_arc_to(p, (radius, radius), 0.0, large_arc, sweep);
    }

    /// Push an arc that is already in center form.
    ///
    /// No validation is done: the arc is expected to start at the pen
    /// position.
    pub fn elliptical_arc_with_center(&mut self, arc: EllipticalArc) {
        self.push(Segment::ArcTo(arc));
    }

    /// Close the current subpath.
    ///
    /// If the pen is away from the point of the last [`Segment::MoveTo`], a
    /// line back to it is pushed. Nothing happens if the pen is already
    /// there, if the path has no move, or if it has at most one segment, so
    /// closing twice is the same as closing once.
    pub fn close(&mut self) {
        if self.segments.len() <= 1 {
            return;
        }
        let Some(start) = self.segments.iter().rev().find_map(|s| match s {
            Segment::MoveTo(p) => Some(*p),
            _ => None,
        }) else {
            return;
        };
        if self.current_point() != Some(start) {
            self.line_to(start);
        }
    }

    /// Close every subpath, as [`close`](Path::close) does for the last one.
    ///
    /// The closing lines are inserted at the end of their own subpath, so
    /// existing segments keep their relative order.
    pub fn close_all_subpaths(&mut self) {
        let mut closed = Vec::with_capacity(self.segments.len());
        let mut subpath_start = None;
        let mut subpath_len = 0;
        for &segment in &self.segments {
            if let Segment::MoveTo(p) = segment {
                close_subpath(&mut closed, subpath_start, subpath_len);
                subpath_start = Some(p);
                subpath_len = 0;
            }
            subpath_len += 1;
            closed.push(segment);
        }
        close_subpath(&mut closed, subpath_start, subpath_len);
        if closed.len() != self.segments.len() {
            self.invalidate();
            self.segments = closed;
        }
    }

    /// Push all the segments of `other` onto this path, unmodified.
    pub fn append_path(&mut self, other: &Path) {
        self.invalidate();
        self.segments.extend_from_slice(&other.segments);
    }

    /// Push all the segments of `other` onto this path.
    ///
    /// This is the same as [`append_path`](Path::append_path).
    pub fn add_path(&mut self, other: &Path) {
        self.append_path(other);
    }

    /// A new path with every segment of this one mapped through `affine`.
    ///
    /// Arcs are mapped as ellipses, so the result traces the image of the
    /// original geometry. The new path's flattening is computed afresh.
    #[must_use]
    pub fn copy_transformed(&self, affine: Affine) -> Path {
        self.segments.iter().map(|&s| affine * s).collect()
    }

    /// Apply an affine transform to the path in place.
    pub fn apply_affine(&mut self, affine: Affine) {
        self.invalidate();
        for segment in &mut self.segments {
            *segment = affine * *segment;
        }
    }

    /// Remove every segment.
    pub fn clear(&mut self) {
        self.invalidate();
        self.segments.clear();
    }

    /// The segments of the path, in order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path contains no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The pen position: the end point of the last segment.
    pub fn current_point(&self) -> Option<Point> {
        self.segments.last().map(Segment::end_point)
    }

    /// The flattened form of the path at [`FLATTEN_TOLERANCE`].
    ///
    /// This is computed on first use and cached until the path changes.
    pub fn flattened(&self) -> &Flattened {
        self.cache
            .get_or_init(|| flatten(&self.segments, FLATTEN_TOLERANCE))
    }

    /// The cached flattening, if it has been computed since the last change.
    #[inline]
    pub fn cached_flattening(&self) -> Option<&Flattened> {
        self.cache.get()
    }

    /// Flatten at a caller-chosen tolerance.
    ///
    /// The result is not cached.
    pub fn flatten_with_tolerance(&self, tolerance: f64) -> Flattened {
        flatten(&self.segments, tolerance)
    }

    /// The lines approximating the path, subpath after subpath.
    ///
    /// Use [`Flattened::polylines`] on [`flattened`](Path::flattened) to see
    /// where subpaths break.
    pub fn split_lines(&self) -> &[Line] {
        self.flattened().lines()
    }

    /// The bounding box of the flattened path.
    ///
    /// This is [`Rect::ZERO`] for an empty path.
    pub fn bounding_box(&self) -> Rect {
        self.flattened().bounding_box()
    }

    /// Signed area enclosed by the path, each subpath closed implicitly.
    pub fn signed_area(&self) -> f64 {
        self.flattened().signed_area()
    }

    /// Winding number of the path around `p`, each subpath closed
    /// implicitly.
    pub fn winding(&self, p: Point) -> i32 {
        self.flattened().winding(p)
    }

    /// A path whose fill covers what stroking this one with `thickness` does.
    ///
    /// This uses round joins and butt caps; call [`stroke`] for other styles.
    #[must_use]
    pub fn stroke_to_fill(&self, thickness: f64) -> Path {
        stroke(self, &Stroke::new(thickness))
    }

    fn invalidate(&mut self) {
        self.cache.take();
    }
}

/// Push the closing line of a subpath that starts at `start` and has `len`
/// segments, the last of which is the last element of `segments`.
fn close_subpath(segments: &mut Vec<Segment>, start: Option<Point>, len: usize) {
    let Some(start) = start else {
        return;
    };
    if len <= 1 {
        return;
    }
    if segments.last().map(Segment::end_point) != Some(start) {
        segments.push(Segment::LineTo(start));
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Path) -> bool {
        self.segments == other.segments
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("segments", &self.segments)
            .field("cached", &self.cache.get().is_some())
            .finish()
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Path::from_vec(iter.into_iter().collect())
    }
}

impl Extend<Segment> for Path {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        self.invalidate();
        self.segments.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Mul<Path> for Affine {
    type Output = Path;

    fn mul(self, mut other: Path) -> Path {
        other.apply_affine(self);
        other
    }
}

impl Mul<&Path> for Affine {
    type Output = Path;

    fn mul(self, other: &Path) -> Path {
        other.copy_transformed(self)
    }
}
