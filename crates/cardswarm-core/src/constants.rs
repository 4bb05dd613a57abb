use glam::Vec3;

// Shared choreography tuning constants.

// Frame stepping
pub const MAX_DT_SEC: f32 = 1.0 / 30.0; // clamp per-step dt during frame hitches

// Emitter
pub const EMITTER_POSITION: Vec3 = Vec3::new(0.0, 0.2, 0.0);
pub const EMITTER_JITTER: f32 = 0.35; // horizontal +/- jitter around the emitter
pub const LAUNCH_HORIZONTAL_SPEED: f32 = 2.2; // per unit of power
pub const LAUNCH_VERTICAL_MIN: f32 = 5.0; // per unit of power
pub const LAUNCH_VERTICAL_MAX: f32 = 8.5; // per unit of power
pub const LAUNCH_ANGULAR_SPEED: f32 = 6.0; // rad/s, per axis
pub const HOMING_DELAY_MIN_SEC: f32 = 0.6;
pub const HOMING_DELAY_MAX_SEC: f32 = 1.6;
pub const DEFAULT_POWER: f32 = 1.0;
pub const POWER_MIN: f32 = 0.2;
pub const POWER_MAX: f32 = 3.0;

// Flight physics
pub const GRAVITY: f32 = 9.8;
pub const DRAG: f32 = 0.6; // opposes horizontal velocity
pub const VERTICAL_DRAG_FACTOR: f32 = 0.35; // extra damping applied to vertical velocity
pub const LOW_Y_THRESHOLD: f32 = 0.05; // dropping below this starts homing
pub const FLOOR_Y: f32 = -0.5; // hard floor, position is clamped here

// Homing
pub const HOMING_SPEED: f32 = 3.2; // exponential approach rate (1/s)
pub const RESIDUAL_DECAY: f32 = 0.85; // velocity multiplier per homing step

// Spawn fade-in
pub const FADE_IN_PER_SEC: f32 = 2.5;
pub const SPAWN_SCALE: f32 = 0.15;

// Cards
pub const CARD_HEIGHT: f32 = 1.0;
pub const MIN_ASPECT: f32 = 0.05;
pub const CARD_MARGIN: f32 = 0.08; // arc-length gap per card along the outline
pub const CARD_SIDE_BUFFER: f32 = 0.0;
pub const SPAN_EPSILON: f32 = 1e-4;
pub const PERIMETER_SAFETY: f32 = 1.0; // 1.0 = tight fit, raise if corners kiss

// Camera-facing frame
pub const FRAME_ANCHOR: Vec3 = Vec3::new(0.0, 4.0, 0.0);

// Billboard
pub const BILLBOARD_MAX_DEG_PER_SEC: f32 = 240.0;
pub const BILLBOARD_SNAP_EPSILON_RAD: f32 = 1e-4;

// Focus
pub const FOCUS_DISTANCE: f32 = 2.2; // in front of the camera
pub const FOCUS_MARGIN: f32 = 0.12; // fraction of the viewport left free
pub const FOCUS_DURATION_SEC: f32 = 0.9;
pub const FOCUS_BOW_PER_UNIT: f32 = 0.04; // pull toward anchor center per unit of travel
pub const FOCUS_BOW_MAX: f32 = 0.45;
pub const FOCUS_LIFT: f32 = 0.35;

// Morph
pub const MORPH_DURATION_SEC: f32 = 1.6;
pub const MORPH_LIFT_RATIO: f32 = 0.35;
pub const MORPH_LIFT_MIN: f32 = 0.6;
pub const MORPH_DROP_RATIO: f32 = 0.2;
pub const MORPH_DROP_MIN: f32 = 0.3;
pub const MORPH_SCALE_PULSE: f32 = 0.25; // peak extra scale mid-flight

// Trails
pub const TRAIL_MAX_POINTS: usize = 48;
pub const TRAIL_MIN_STEP: f32 = 0.04; // world units moved before another sample

// Outlines
pub const HEART_SEGMENTS: usize = 4096;
pub const STAR_OUTER_RADIUS: f32 = 1.0;
pub const STAR_INNER_RADIUS: f32 = 0.45;
