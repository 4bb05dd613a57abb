//! Per-card motion trails.
//!
//! The core only decides when a card moved enough to leave another trail
//! sample; drawing the trail belongs to the presenter.

use crate::constants::{TRAIL_MAX_POINTS, TRAIL_MIN_STEP};
use glam::Vec3;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_MAX_POINTS)
    }
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, p: Vec3) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn last(&self) -> Option<Vec3> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest first.
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }
}

/// Whether a card at `current` has moved far enough from its last trail
/// sample to emit a new one.
#[inline]
pub fn moved_enough(last: Option<Vec3>, current: Vec3, min_step: f32) -> bool {
    match last {
        None => true,
        Some(prev) => prev.distance_squared(current) >= min_step * min_step,
    }
}

/// Update one card's trail for this frame.
pub fn drive_trail(trail: &mut Trail, position: Vec3, enabled: bool) {
    if !enabled {
        if !trail.is_empty() {
            trail.clear();
        }
        return;
    }
    if position.is_finite() && moved_enough(trail.last(), position, TRAIL_MIN_STEP) {
        trail.push(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_is_bounded() {
        let mut t = Trail::with_capacity(3);
        for i in 0..10 {
            t.push(Vec3::splat(i as f32));
        }
        assert_eq!(t.len(), 3);
        assert_eq!(t.points().next(), Some(Vec3::splat(7.0)));
    }

    #[test]
    fn stationary_card_emits_once() {
        let mut t = Trail::default();
        for _ in 0..5 {
            drive_trail(&mut t, Vec3::ONE, true);
        }
        assert_eq!(t.len(), 1);
        drive_trail(&mut t, Vec3::new(1.0, 2.0, 1.0), true);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn disabling_clears() {
        let mut t = Trail::default();
        drive_trail(&mut t, Vec3::ONE, true);
        drive_trail(&mut t, Vec3::ONE, false);
        assert!(t.is_empty());
    }
}
