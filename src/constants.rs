// Web-shell tuning: orbit controls, click detection, deck defaults and colours.
// Simulation constants live in `cardswarm_core::constants`.

// Orbit camera
pub const ORBIT_RADIUS: f32 = 12.0;
pub const ORBIT_RAD_PER_PX: f32 = 0.006; // yaw/pitch per dragged backing-store pixel
pub const ORBIT_PITCH_MIN: f32 = -1.2;
pub const ORBIT_PITCH_MAX: f32 = 1.2;

// A press that travels less than this is a click, not a drag.
pub const CLICK_SLOP_PX: f32 = 6.0;

// Launch power steps for the [ and ] keys
pub const POWER_STEP: f32 = 0.2;

// Deck used when the canvas carries no data-aspects attribute
pub const DEFAULT_DECK_ASPECTS: [f32; 14] = [
    0.71, 0.71, 0.75, 0.66, 1.33, 0.71, 0.8, 0.56, 0.71, 1.0, 0.75, 0.71, 0.62, 1.5,
];

// Presenter colours
pub const BACKGROUND: &str = "#0a0e18";
pub const CARD_STROKE: &str = "rgba(230, 240, 255, 0.55)";
pub const FOCUS_STROKE: &str = "#ffe9a8";
pub const TRAIL_STROKE: &str = "rgba(140, 190, 255, 0.35)";
pub const CARD_SATURATION: u32 = 55; // percent
pub const CARD_LIGHTNESS: u32 = 58; // percent
pub const HUE_STEP_DEG: u32 = 47; // hue rotation between neighbouring deck images
