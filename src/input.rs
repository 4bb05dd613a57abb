// Pure input helpers: key mapping, press/drag/click tracking, coordinate
// conversion and deck parsing. No web-sys here so host tests can include it.

use crate::constants::{CLICK_SLOP_PX, POWER_STEP};
use cardswarm_core::constants::{POWER_MAX, POWER_MIN};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Reset,
    CycleShape,
    ToggleTrails,
    ToggleSpin,
    ReleaseFocus,
    PowerDown,
    PowerUp,
    ToggleHint,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Reset),
        "s" | "S" => Some(KeyAction::CycleShape),
        "p" | "P" => Some(KeyAction::ToggleTrails),
        "x" | "X" => Some(KeyAction::ToggleSpin),
        "Escape" => Some(KeyAction::ReleaseFocus),
        "[" => Some(KeyAction::PowerDown),
        "]" => Some(KeyAction::PowerUp),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}

/// Step launch power by `steps` increments, staying in the accepted range.
#[inline]
pub fn adjust_power(power: f32, steps: i32) -> f32 {
    let base = if power.is_finite() { power } else { 1.0 };
    (base + POWER_STEP * steps as f32).clamp(POWER_MIN, POWER_MAX)
}

/// Tells a click from an orbit drag on the same pointer.
#[derive(Default, Clone, Copy, Debug)]
pub struct Gesture {
    pressed_at: Option<Vec2>,
    last: Vec2,
    dragging: bool,
}

impl Gesture {
    pub fn press(&mut self, px: Vec2) {
        self.pressed_at = Some(px);
        self.last = px;
        self.dragging = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Pointer moved while pressed. Returns the orbit delta once the press
    /// has become a drag.
    pub fn drag(&mut self, px: Vec2) -> Option<Vec2> {
        let start = self.pressed_at?;
        if !self.dragging && px.distance(start) > CLICK_SLOP_PX {
            self.dragging = true;
        }
        if !self.dragging {
            return None;
        }
        let delta = px - self.last;
        self.last = px;
        Some(delta)
    }

    /// Pointer released. True when the whole press counts as a click.
    pub fn release(&mut self, px: Vec2) -> bool {
        let click = match self.pressed_at.take() {
            Some(start) => !self.dragging && px.distance(start) <= CLICK_SLOP_PX,
            None => false,
        };
        self.dragging = false;
        click
    }

    /// Pointer lost (cancel, capture lost); the press is dropped.
    pub fn cancel(&mut self) {
        self.pressed_at = None;
        self.dragging = false;
    }
}

/// Backing-store pixel (origin top-left) to normalized device coordinates.
#[inline]
pub fn pixel_to_ndc(px: Vec2, size: Vec2) -> Vec2 {
    let w = size.x.max(1.0);
    let h = size.y.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

#[inline]
pub fn ndc_to_pixel(ndc: Vec2, size: Vec2) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * size.x, (1.0 - ndc.y) * 0.5 * size.y)
}

/// Parse a comma-separated list of width/height ratios, skipping anything
/// that is not a positive finite number.
pub fn parse_aspects(raw: &str) -> Vec<f32> {
    raw.split(',')
        .filter_map(|s| s.trim().parse::<f32>().ok())
        .filter(|a| a.is_finite() && *a > 0.0)
        .collect()
}
