// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized checks of the path invariants.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecpath::{Affine, Cap, Line, Path, Point, Rect, Segment, Stroke, Vec2};

const CASES: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_cafe)
}

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
}

/// A path with every kind of segment, starting with a move.
fn random_path(rng: &mut StdRng, with_arcs: bool) -> Path {
    let mut path = Path::new();
    path.move_to(random_point(rng));
    let len = rng.random_range(1..12);
    for _ in 0..len {
        let kinds = if with_arcs { 6 } else { 5 };
        match rng.random_range(0..kinds) {
            0 => path.move_to(random_point(rng)),
            1 => path.line_to(random_point(rng)),
            2 => path.quadratic_bezier_curve_to(random_point(rng), random_point(rng)),
            3 => path.cubic_bezier_curve_to(random_point(rng), random_point(rng), random_point(rng)),
            4 => path.close(),
            _ => path.elliptical_arc_to(
                random_point(rng),
                (rng.random_range(1.0..80.0), rng.random_range(1.0..80.0)),
                rng.random_range(-PI..PI),
                rng.random_bool(0.5),
                rng.random_bool(0.5),
            ),
        }
    }
    path
}

fn assert_near(p0: Point, p1: Point, eps: f64) {
    assert!(p0.distance(p1) <= eps, "{p0:?} != {p1:?}");
}

#[test]
fn bounding_box_contains_split_lines() {
    let mut rng = rng();
    for _ in 0..CASES {
        let path = random_path(&mut rng, true);
        let bbox = path.bounding_box();
        for line in path.split_lines() {
            assert!(bbox.contains(line.p0), "{line:?} outside {bbox:?}");
            assert!(bbox.contains(line.p1), "{line:?} outside {bbox:?}");
        }
    }
}

#[test]
fn bounding_box_is_tight() {
    let mut rng = rng();
    for _ in 0..CASES {
        let path = random_path(&mut rng, true);
        let bbox = path.bounding_box();
        let mut points: Vec<Point> = path
            .split_lines()
            .iter()
            .flat_map(|l| [l.p0, l.p1])
            .collect();
        points.extend(path.segments().iter().filter(|s| s.is_move()).map(Segment::end_point));
        let tight = points
            .iter()
            .fold(Rect::from_point(points[0]), |r, &p| r.union_pt(p));
        assert_eq!(bbox, tight);
    }
}

#[test]
fn flattening_distributes_over_concatenation() {
    let mut rng = rng();
    for _ in 0..CASES {
        let a = random_path(&mut rng, true);
        let b = random_path(&mut rng, true);
        let mut ab = a.clone();
        ab.append_path(&b);
        let expected: Vec<Line> = a
            .split_lines()
            .iter()
            .chain(b.split_lines())
            .copied()
            .collect();
        assert_eq!(ab.split_lines(), &expected[..]);
        assert_eq!(ab.bounding_box(), a.bounding_box().union(b.bounding_box()));
    }
}

#[test]
fn identity_transform_reproduces_geometry() {
    let mut rng = rng();
    for _ in 0..CASES {
        let path = random_path(&mut rng, true);
        let copy = path.copy_transformed(Affine::IDENTITY);
        assert_eq!(copy.len(), path.len());
        for (s0, s1) in path.segments().iter().zip(copy.segments()) {
            assert_eq!(
                core::mem::discriminant(s0),
                core::mem::discriminant(s1),
                "segment kind changed"
            );
            match (s0, s1) {
                (Segment::ArcTo(_), Segment::ArcTo(_)) => {
                    assert_near(s0.end_point(), s1.end_point(), 1e-9);
                }
                _ => assert_eq!(s0, s1),
            }
        }
        assert_eq!(copy.split_lines().len(), path.split_lines().len());
        for (l0, l1) in path.split_lines().iter().zip(copy.split_lines()) {
            assert_near(l0.p0, l1.p0, 1e-6);
            assert_near(l0.p1, l1.p1, 1e-6);
        }
    }
}

#[test]
fn transformed_area_scales_with_determinant() {
    let mut rng = rng();
    for _ in 0..50 {
        let mut path = random_path(&mut rng, true);
        path.close_all_subpaths();
        let affine = Affine::new([
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
        ]);
        let tolerance = 1e-3;
        let flat = path.flatten_with_tolerance(tolerance);
        let moved = path.copy_transformed(affine).flatten_with_tolerance(tolerance);
        let expected = affine.determinant() * flat.signed_area();
        // Each chord cuts off at most its length times the tolerance.
        let bound = tolerance
            * (perimeter(moved.lines()) + affine.determinant().abs() * perimeter(flat.lines()));
        assert!(
            (moved.signed_area() - expected).abs() <= 2.0 * bound + 1e-6,
            "{} != {expected} for {affine:?}",
            moved.signed_area()
        );
    }
}

fn perimeter(lines: &[Line]) -> f64 {
    lines.iter().map(|l| l.length()).sum()
}

#[test]
fn close_is_idempotent() {
    let mut path = Path::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    path.line_to((10.0, 10.0));
    path.close();
    assert_eq!(path.segments().last(), Some(&Segment::LineTo(Point::new(0.0, 0.0))));
    let closed = path.clone();
    path.close();
    assert_eq!(path, closed);

    let mut rng = rng();
    for _ in 0..CASES {
        let mut path = random_path(&mut rng, true);
        path.close();
        let once = path.clone();
        path.close();
        assert_eq!(path, once);
        path.close_all_subpaths();
        let all = path.clone();
        path.close_all_subpaths();
        assert_eq!(path, all);
    }
}

#[test]
fn horizontal_line_on_empty_path() {
    let mut path = Path::new();
    path.horizontal_line_to(5.0);
    let mut expected = Path::new();
    expected.line_to((5.0, 0.0));
    assert_eq!(path, expected);
    assert_eq!(path.split_lines(), expected.split_lines());
}

#[test]
fn half_circle_points_on_circle() {
    let mut rng = rng();
    for _ in 0..CASES {
        let from = random_point(&mut rng);
        let r = rng.random_range(0.5..60.0);
        let dir = Vec2::from_angle(rng.random_range(-PI..PI));
        let to = from + 2.0 * r * dir;
        let mut path = Path::new();
        path.move_to(from);
        path.arc_to(to, r, rng.random_bool(0.5), rng.random_bool(0.5));
        let Segment::ArcTo(arc) = path.segments()[1] else {
            panic!("expected an arc, got {:?}", path.segments()[1]);
        };
        assert_near(arc.center, from.midpoint(to), 1e-6 * (1.0 + r));
        for line in path.split_lines() {
            for p in [line.p0, line.p1] {
                let d = p.distance(arc.center);
                assert!((d - r).abs() <= 1e-9 * (1.0 + r), "{p:?} at {d}, radius {r}");
            }
        }
    }
}

#[test]
fn zero_width_stroke_has_no_area() {
    let mut rng = rng();
    for _ in 0..CASES {
        let path = random_path(&mut rng, true);
        let outline = path.stroke_to_fill(0.0);
        assert!(outline.is_empty());
        assert_eq!(outline.signed_area(), 0.0);
        assert_eq!(outline.bounding_box(), Rect::ZERO);
    }
}

#[test]
fn butt_line_strokes_to_rectangle() {
    let mut rng = rng();
    for _ in 0..CASES {
        let from = random_point(&mut rng);
        let len = rng.random_range(0.5..100.0);
        let t = rng.random_range(0.1..20.0);
        let dir = Vec2::from_angle(rng.random_range(-PI..PI));
        let mut path = Path::new();
        path.move_to(from);
        path.line_to(from + len * dir);
        let outline = path.stroke_to_fill(t);
        let segments = outline.segments();
        assert_eq!(segments.len(), 5);
        let corners: Vec<Point> = segments.iter().map(Segment::end_point).collect();
        assert_eq!(corners[0], corners[4]);
        let sides: Vec<f64> = (0..4).map(|i| corners[i].distance(corners[i + 1])).collect();
        let eps = 1e-9 * (1.0 + len + t);
        assert!((sides[0] - len).abs() <= eps);
        assert!((sides[1] - t).abs() <= eps);
        assert!((sides[2] - len).abs() <= eps);
        assert!((sides[3] - t).abs() <= eps);
        let diagonal = corners[0].distance(corners[2]);
        assert!((diagonal - len.hypot(t)).abs() <= eps);
        assert!((outline.signed_area() - len * t).abs() <= 1e-6 * len * t);
    }
}

#[test]
fn stroke_covers_centerline() {
    let mut rng = rng();
    for _ in 0..50 {
        let mut path = Path::new();
        path.move_to(random_point(&mut rng));
        for _ in 0..rng.random_range(1..6) {
            path.line_to(random_point(&mut rng));
        }
        let width = rng.random_range(1.0..10.0);
        let outline = vecpath::stroke(&path, &Stroke::new(width).with_caps(Cap::Round));
        let centerline = path.split_lines();
        let distance = |p: Point| {
            centerline
                .iter()
                .map(|l| l.distance_to(p))
                .fold(f64::INFINITY, f64::min)
        };
        // Skip points where the outline itself passes.
        let on_edge = |p: Point| {
            outline
                .split_lines()
                .iter()
                .any(|l| l.distance_to(p) < 1e-6)
        };
        for line in centerline {
            let mid = line.midpoint();
            if !on_edge(mid) {
                assert_ne!(outline.winding(mid), 0, "{mid:?} not covered");
            }
            // Points well off the stroke stay unpainted.
            let normal = line.direction().turn_90() / line.length();
            for side in [-1.0, 1.0] {
                let p = mid + side * (0.5 * width + 1.0) * normal;
                if distance(p) > 0.5 * width + 0.5 {
                    assert_eq!(outline.winding(p), 0, "{p:?} covered");
                }
            }
        }
    }
}

#[test]
fn text_round_trip() {
    let mut rng = rng();
    for _ in 0..CASES {
        let path = random_path(&mut rng, false);
        let text = path.to_string();
        let parsed: Path = text.parse().unwrap();
        assert_eq!(parsed, path, "{text}");
    }
    for _ in 0..CASES {
        let path = random_path(&mut rng, true);
        let text = path.to_string();
        let parsed: Path = text.parse().unwrap();
        assert_eq!(parsed.len(), path.len(), "{text}");
        for (s0, s1) in path.segments().iter().zip(parsed.segments()) {
            match (s0, s1) {
                (Segment::ArcTo(a0), Segment::ArcTo(a1)) => {
                    assert_eq!(a0.to, a1.to);
                    assert_eq!((a0.large_arc, a0.sweep), (a1.large_arc, a1.sweep));
                    let eps = 1e-6 * (1.0 + a0.radii.hypot());
                    assert_near(a0.center, a1.center, eps);
                    assert!((a0.sweep_angle - a1.sweep_angle).abs() <= 1e-6);
                }
                _ => assert_eq!(s0, s1),
            }
        }
    }
}
