//! Closed outlines and the variable-span perimeter sampler.
//!
//! [`sample`] rescales an outline so its perimeter equals the sum of the
//! requested spans, then hands out contiguous arc-length slots starting at
//! the topmost vertex. Each returned point is the midpoint of its slot.

use crate::constants::SPAN_EPSILON;
use glam::{Vec2, Vec3};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OutlineError {
    #[error("outline needs at least 3 distinct vertices")]
    TooFewVertices,
    #[error("outline perimeter is zero")]
    ZeroPerimeter,
    #[error("outline contains a non-finite vertex")]
    NonFinite,
}

/// A closed polyline; the first point is repeated as the last.
#[derive(Clone, Debug)]
pub struct Polygon {
    points: Vec<Vec2>,
    seg_lengths: Vec<f32>,
    // cumulative arc length at the start of each segment
    seg_starts: Vec<f32>,
    perimeter: f32,
    anchor_offset: f32,
}

impl Polygon {
    /// Build and validate an outline. The polyline is closed if the caller
    /// did not repeat the first point.
    pub fn new(mut points: Vec<Vec2>) -> Result<Self, OutlineError> {
        if points.iter().any(|p| !p.is_finite()) {
            return Err(OutlineError::NonFinite);
        }
        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
            if first != last {
                points.push(first);
            }
        }
        let mut distinct: Vec<Vec2> = Vec::new();
        for p in &points {
            if !distinct.contains(p) {
                distinct.push(*p);
                if distinct.len() >= 3 {
                    break;
                }
            }
        }
        if distinct.len() < 3 {
            return Err(OutlineError::TooFewVertices);
        }

        let seg_lengths: Vec<f32> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
        let mut seg_starts = Vec::with_capacity(seg_lengths.len());
        let mut acc = 0.0;
        for len in &seg_lengths {
            seg_starts.push(acc);
            acc += len;
        }
        if acc <= 0.0 {
            return Err(OutlineError::ZeroPerimeter);
        }

        // topmost vertex, first one wins on ties
        let mut anchor_index = 0;
        for (i, p) in points.iter().enumerate().take(seg_lengths.len()) {
            if p.y > points[anchor_index].y {
                anchor_index = i;
            }
        }

        Ok(Self {
            anchor_offset: seg_starts[anchor_index],
            points,
            seg_lengths,
            seg_starts,
            perimeter: acc,
        })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Unscaled perimeter length.
    pub fn perimeter(&self) -> f32 {
        self.perimeter
    }

    /// Unscaled arc length from the first point to the topmost vertex.
    pub fn anchor_offset(&self) -> f32 {
        self.anchor_offset
    }

    pub fn anchor(&self) -> Vec2 {
        self.point_at(self.anchor_offset)
    }

    /// Scale that makes the perimeter equal `total_span`.
    pub fn fit_scale(&self, total_span: f32) -> f32 {
        total_span / self.perimeter
    }

    /// Point at an unscaled arc length, wrapping around the outline.
    pub fn point_at(&self, arc: f32) -> Vec2 {
        let arc = arc.rem_euclid(self.perimeter);
        let last = self.seg_lengths.len() - 1;
        let idx = self
            .seg_starts
            .partition_point(|start| *start <= arc)
            .saturating_sub(1)
            .min(last);
        let len = self.seg_lengths[idx];
        let t = if len > f32::EPSILON {
            ((arc - self.seg_starts[idx]) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.points[idx].lerp(self.points[idx + 1], t)
    }
}

fn sanitize_span(span: f32) -> f32 {
    if span.is_finite() && span > SPAN_EPSILON {
        span
    } else {
        SPAN_EPSILON
    }
}

/// Place one point per span along `outline`, rescaled so the slots tile the
/// whole perimeter. Points are in shape-local space with Z = 0.
pub fn sample(outline: &Polygon, spans: &[f32]) -> Vec<Vec3> {
    if spans.is_empty() {
        return Vec::new();
    }
    let spans: Vec<f32> = spans.iter().copied().map(sanitize_span).collect();
    let total: f32 = spans.iter().sum();
    let scale = outline.fit_scale(total);

    let mut out = Vec::with_capacity(spans.len());
    let mut cursor = outline.anchor_offset() * scale;
    for (i, span) in spans.iter().enumerate() {
        if i > 0 {
            cursor += spans[i - 1];
        }
        let along = (cursor + span * 0.5).rem_euclid(total);
        let p = outline.point_at(along / scale) * scale;
        out.push(p.extend(0.0));
    }
    out
}
