// Host-side tests for the perimeter sampler.

use cardswarm_core::perimeter::{sample, Polygon};
use cardswarm_core::ShapeId;
use glam::{Vec2, Vec3};

/// Arc length (on the outline scaled by `scale`) of the outline point
/// closest to `p`.
fn arc_of(poly: &Polygon, scale: f32, p: Vec3) -> f32 {
    let p = p.truncate();
    let pts = poly.points();
    let mut best = (f32::MAX, 0.0);
    let mut start = 0.0;
    for w in pts.windows(2) {
        let a = w[0] * scale;
        let b = w[1] * scale;
        let ab = b - a;
        let len = ab.length();
        let t = if len > 0.0 {
            ((p - a).dot(ab) / (len * len)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let d = p.distance(a + ab * t);
        if d < best.0 {
            best = (d, start + t * len);
        }
        start += len;
    }
    best.1
}

fn square(side: f32) -> Polygon {
    Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(side, 0.0),
        Vec2::new(side, side),
        Vec2::new(0.0, side),
    ])
    .unwrap()
}

fn pentagon() -> Polygon {
    Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(3.0, 0.2),
        Vec2::new(3.4, 2.0),
        Vec2::new(1.2, 3.1),
        Vec2::new(-0.6, 1.8),
    ])
    .unwrap()
}

#[test]
fn four_equal_spans_on_unit_perimeter() {
    let poly = square(0.25);
    assert!((poly.perimeter() - 1.0).abs() < 1e-6);

    let pts = sample(&poly, &[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(pts.len(), 4);

    // scale = 4, the walk starts at the top-right corner (first max-Y vertex)
    let expected = [
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(1.0, 0.5, 0.0),
    ];
    for (got, want) in pts.iter().zip(expected) {
        assert!(got.distance(want) < 1e-4, "got {got:?}, want {want:?}");
    }

    // each midpoint sits at 0.125, 0.375, 0.625, 0.875 of the walk
    let total = 4.0;
    let anchor = poly.anchor_offset() * 4.0;
    for (i, p) in pts.iter().enumerate() {
        let frac = (arc_of(&poly, 4.0, *p) - anchor).rem_euclid(total) / total;
        let want = 0.125 + 0.25 * i as f32;
        assert!((frac - want).abs() < 1e-4, "point {i}: frac {frac}");
    }
}

#[test]
fn slots_tile_the_perimeter_without_gaps() {
    let poly = pentagon();
    let spans = [0.3, 1.2, 0.7, 0.5, 2.0, 0.9, 0.4];
    let total: f32 = spans.iter().sum();
    let scale = poly.fit_scale(total);
    let pts = sample(&poly, &spans);
    assert_eq!(pts.len(), spans.len());

    // scaled perimeter equals the span sum
    assert!((poly.perimeter() * scale - total).abs() < 1e-4);

    for i in 0..spans.len() {
        let j = (i + 1) % spans.len();
        let a = arc_of(&poly, scale, pts[i]);
        let b = arc_of(&poly, scale, pts[j]);
        let gap = (b - a).rem_euclid(total);
        let want = (spans[i] + spans[j]) * 0.5;
        assert!(
            (gap - want).abs() < 1e-3,
            "slots {i}->{j}: midpoint distance {gap}, expected {want}"
        );
    }
}

#[test]
fn first_slot_starts_at_the_top_vertex() {
    let poly = pentagon();
    let spans = [0.8, 0.4, 1.1, 0.6];
    let total: f32 = spans.iter().sum();
    let scale = poly.fit_scale(total);
    let pts = sample(&poly, &spans);
    let anchor = poly.anchor_offset() * scale;
    let offset = (arc_of(&poly, scale, pts[0]) - anchor).rem_euclid(total);
    assert!((offset - spans[0] * 0.5).abs() < 1e-3, "offset {offset}");
}

#[test]
fn first_point_is_next_to_anchor_for_every_shape() {
    for shape in [ShapeId::Heart, ShapeId::Star, ShapeId::Hourglass] {
        let poly = shape.outline().unwrap();
        for spans in [vec![0.7; 12], vec![0.5, 1.5, 0.9, 1.0, 0.6, 1.2]] {
            let total: f32 = spans.iter().sum();
            let scale = poly.fit_scale(total);
            let pts = sample(&poly, &spans);
            let anchor = (poly.anchor() * scale).extend(0.0);
            // a chord is never longer than its arc
            assert!(
                pts[0].distance(anchor) <= spans[0] * 0.5 + 1e-3,
                "{}: first point too far from anchor",
                shape.name()
            );
        }
    }
}

#[test]
fn doubling_spans_doubles_positions() {
    let poly = ShapeId::Star.outline().unwrap();
    let spans = [0.4, 0.9, 0.6, 1.3, 0.5, 0.8];
    let doubled: Vec<f32> = spans.iter().map(|s| s * 2.0).collect();
    let a = sample(&poly, &spans);
    let b = sample(&poly, &doubled);
    for (p, q) in a.iter().zip(&b) {
        assert!((*p * 2.0).distance(*q) < 1e-3, "{p:?} vs {q:?}");
    }
}

#[test]
fn bad_spans_are_clamped_not_fatal() {
    let poly = square(1.0);
    let pts = sample(&poly, &[0.0, -2.0, f32::NAN, 1.0]);
    assert_eq!(pts.len(), 4);
    assert!(pts.iter().all(|p| p.is_finite()));
}

#[test]
fn empty_span_list_gives_no_points() {
    assert!(sample(&square(1.0), &[]).is_empty());
}

#[test]
fn single_span_wraps_whole_outline() {
    let poly = square(1.0);
    let pts = sample(&poly, &[2.0]);
    assert_eq!(pts.len(), 1);
    // scale 0.5: half of the perimeter past the top-right corner is the bottom-left
    assert!(pts[0].distance(Vec3::ZERO) < 1e-4, "{:?}", pts[0]);
}

#[test]
fn all_points_lie_in_the_local_plane() {
    let poly = ShapeId::Heart.outline().unwrap();
    let pts = sample(&poly, &[0.6; 40]);
    assert!(pts.iter().all(|p| p.z == 0.0));
}
