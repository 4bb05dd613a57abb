//! Runtime knobs for a [`Swarm`](crate::Swarm).
//!
//! Defaults mirror the values in [`constants`](crate::constants); hosts that
//! want a different look override individual fields.

use crate::constants::*;

/// How a card's image is fit into the viewport while focused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Fit both width and height (the smaller scale wins).
    #[default]
    Contain,
    /// Fit height only; wide cards may overflow horizontally.
    Height,
}

/// How quickly cards turn to face the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BillboardMode {
    Instant,
    Capped { max_deg_per_sec: f32 },
}

impl Default for BillboardMode {
    fn default() -> Self {
        Self::Capped {
            max_deg_per_sec: BILLBOARD_MAX_DEG_PER_SEC,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SwarmConfig {
    pub homing_speed: f32,
    pub billboard: BillboardMode,
    pub focus_distance: f32,
    pub focus_margin: f32,
    pub focus_fit: FitMode,
    pub focus_duration_sec: f32,
    pub morph_duration_sec: f32,
    /// Multiplies every span before sampling. 1.0 tiles cards edge to edge.
    pub perimeter_safety: f32,
    pub card_margin: f32,
    pub card_side_buffer: f32,
    pub seed: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            homing_speed: HOMING_SPEED,
            billboard: BillboardMode::default(),
            focus_distance: FOCUS_DISTANCE,
            focus_margin: FOCUS_MARGIN,
            focus_fit: FitMode::default(),
            focus_duration_sec: FOCUS_DURATION_SEC,
            morph_duration_sec: MORPH_DURATION_SEC,
            perimeter_safety: PERIMETER_SAFETY,
            card_margin: CARD_MARGIN,
            card_side_buffer: CARD_SIDE_BUFFER,
            seed: 42,
        }
    }
}

/// Per-frame values sourced from the host's UI controls.
#[derive(Clone, Copy, Debug)]
pub struct UiState {
    pub power: f32,
    pub show_paths: bool,
    pub spin: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            power: DEFAULT_POWER,
            show_paths: false,
            spin: true,
        }
    }
}
