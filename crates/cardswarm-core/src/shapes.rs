use crate::constants::{HEART_SEGMENTS, STAR_INNER_RADIUS, STAR_OUTER_RADIUS};
use crate::perimeter::{OutlineError, Polygon};
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Heart,
    Star,
    Hourglass,
}

impl ShapeId {
    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Heart => "heart",
            ShapeId::Star => "star",
            ShapeId::Hourglass => "hourglass",
        }
    }

    /// Unscaled outline in the shape's own canonical units.
    pub fn outline(self) -> Result<Polygon, OutlineError> {
        match self {
            ShapeId::Heart => Polygon::new(heart_points(HEART_SEGMENTS)),
            ShapeId::Star => Polygon::new(star_points(5, STAR_OUTER_RADIUS, STAR_INNER_RADIUS)),
            ShapeId::Hourglass => Polygon::new(hourglass_points()),
        }
    }
}

/// Classic parametric heart, sampled at `segments` uniform steps of t.
pub fn heart_points(segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let t = TAU * i as f32 / segments as f32;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            Vec2::new(x, y)
        })
        .collect()
}

/// Star polygon alternating outer and inner radius, first tip pointing up.
pub fn star_points(tips: usize, outer: f32, inner: f32) -> Vec<Vec2> {
    let n = tips.max(2) * 2;
    let mut pts: Vec<Vec2> = (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = FRAC_PI_2 + PI * i as f32 / tips.max(2) as f32;
            Vec2::new(r * a.cos(), r * a.sin())
        })
        .collect();
    pts.push(pts[0]);
    pts
}

/// Bow-tie quad: TL -> TR -> BL -> BR -> TL. Crosses itself at the origin.
pub fn hourglass_points() -> Vec<Vec2> {
    vec![
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, 1.0),
    ]
}

/// Round-robin over the available outlines, owned by whoever runs the
/// simulation rather than shared globally.
#[derive(Clone, Debug)]
pub struct ShapeRegistry {
    order: SmallVec<[ShapeId; 4]>,
    current: usize,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new(&[ShapeId::Heart, ShapeId::Star, ShapeId::Hourglass])
    }
}

impl ShapeRegistry {
    pub fn new(order: &[ShapeId]) -> Self {
        let mut order: SmallVec<[ShapeId; 4]> = order.iter().copied().collect();
        if order.is_empty() {
            order.push(ShapeId::Heart);
        }
        Self { order, current: 0 }
    }

    pub fn current_shape(&self) -> ShapeId {
        self.order[self.current]
    }

    pub fn cycle_shape(&mut self) -> ShapeId {
        self.current = (self.current + 1) % self.order.len();
        self.current_shape()
    }

    pub fn outline_for(&self, id: ShapeId) -> Result<Polygon, OutlineError> {
        id.outline()
    }
}
