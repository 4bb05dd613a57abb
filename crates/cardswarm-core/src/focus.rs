//! Click-to-inspect: fly a card in front of the camera and back again.
//!
//! `normal -> focus_in -> focused -> focus_out -> normal(homing)`. While a
//! card is focused it lives in camera space and needs no per-frame work.

use crate::camera::Camera;
use crate::card::{detach_to_world, Card, CardId, FocusFlight, Mode, Motion, Space, Transform};
use crate::config::{FitMode, SwarmConfig};
use crate::constants::{FOCUS_BOW_MAX, FOCUS_BOW_PER_UNIT, FOCUS_LIFT};
use crate::facing::CameraFacingFrame;
use crate::math::{ease_in_out_cubic, CubicBezier};
use crate::swarm::SwarmEvent;
use fnv::FnvHashSet;
use glam::{Quat, Vec2, Vec3};

/// Uniform scale that fits a card of `size` into the viewport at `distance`.
pub fn fit_scale(size: Vec2, camera: &Camera, distance: f32, margin: f32, mode: FitMode) -> f32 {
    let avail = camera.visible_extent(distance) * (1.0 - margin).clamp(0.05, 1.0);
    let w = size.x.max(f32::EPSILON);
    let h = size.y.max(f32::EPSILON);
    match mode {
        FitMode::Contain => (avail.x / w).min(avail.y / h),
        FitMode::Height => avail.y / h,
    }
}

/// Bezier from `from` to `to` that bows toward `center` instead of dashing
/// in a straight line.
pub fn focus_curve(from: Vec3, to: Vec3, center: Vec3) -> CubicBezier {
    let dist = from.distance(to);
    let k = (dist * FOCUS_BOW_PER_UNIT).min(FOCUS_BOW_MAX);
    let a = from.lerp(to, 1.0 / 3.0);
    let b = from.lerp(to, 2.0 / 3.0);
    CubicBezier::new(
        from,
        a.lerp(center, k) + Vec3::Y * FOCUS_LIFT,
        b.lerp(center, k * 0.5) + Vec3::Y * (FOCUS_LIFT * 0.5),
        to,
    )
}

#[derive(Clone, Debug, Default)]
pub struct FocusController {
    focused: Option<CardId>,
    active: FnvHashSet<CardId>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Card currently focusing in or held in focus.
    pub fn focused(&self) -> Option<CardId> {
        self.focused
    }

    /// Whether any card is in a focus mode.
    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Resolve a click on `picked` (or on nothing).
    pub fn handle_click(
        &mut self,
        cards: &mut [Card],
        picked: Option<CardId>,
        camera: &Camera,
        frame: &CameraFacingFrame,
        config: &SwarmConfig,
    ) {
        let Some(id) = picked else {
            return;
        };
        if let Some(current) = self.focused {
            self.release(cards, current, camera, frame, config);
            if current == id {
                return;
            }
        }
        if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
            begin_focus_in(card, camera, frame.anchor(), config);
            self.active.insert(id);
            self.focused = Some(id);
            log::info!("[focus] focusing card {}", id.0);
        }
    }

    /// Start flying `id` back to its outline slot.
    pub fn release(
        &mut self,
        cards: &mut [Card],
        id: CardId,
        camera: &Camera,
        frame: &CameraFacingFrame,
        config: &SwarmConfig,
    ) {
        if self.focused == Some(id) {
            self.focused = None;
        }
        if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
            let target = frame.local_to_world(card.target);
            if begin_focus_out(card, camera, target, frame.anchor(), config) {
                log::info!("[focus] releasing card {}", id.0);
            }
        }
    }

    /// Advance focus flights. Finished transitions are reported as events.
    /// Cards flying in track the camera as it moves, so they always land
    /// straight in front of it.
    pub fn step(
        &mut self,
        cards: &mut [Card],
        camera: &Camera,
        config: &SwarmConfig,
        dt_sec: f32,
        events: &mut Vec<SwarmEvent>,
    ) {
        if self.active.is_empty() {
            return;
        }
        for card in cards.iter_mut().filter(|c| self.active.contains(&c.id)) {
            match card.mode {
                Mode::FocusIn(mut flight) => {
                    flight.curve.p3 = focus_point(camera, config.focus_distance);
                    flight.to_rotation = camera.orientation();
                    if advance(card, &mut flight, dt_sec) {
                        card.transform = Transform {
                            translation: Vec3::NEG_Z * config.focus_distance,
                            rotation: Quat::IDENTITY,
                            scale: flight.to_scale,
                        };
                        card.space = Space::Camera;
                        card.mode = Mode::Focused {
                            pre_focus_rotation: flight.pre_focus_rotation,
                        };
                        events.push(SwarmEvent::FocusEntered(card.id));
                    } else {
                        card.mode = Mode::FocusIn(flight);
                    }
                }
                Mode::FocusOut(mut flight) => {
                    if advance(card, &mut flight, dt_sec) {
                        card.mode = Mode::Normal(Motion::Homing);
                        card.velocity = Vec3::ZERO;
                        card.angular_velocity = Vec3::ZERO;
                        events.push(SwarmEvent::FocusReleased(card.id));
                    } else {
                        card.mode = Mode::FocusOut(flight);
                    }
                }
                _ => {}
            }
        }
        self.active
            .retain(|id| cards.iter().any(|c| c.id == *id && c.mode.is_focus()));
    }

    /// Re-fit a held card after the viewport changed. Animations are left alone.
    pub fn on_resize(&mut self, cards: &mut [Card], camera: &Camera, config: &SwarmConfig) {
        let Some(id) = self.focused else {
            return;
        };
        if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
            if matches!(card.mode, Mode::Focused { .. }) {
                card.transform.scale = fit_scale(
                    card.size(),
                    camera,
                    config.focus_distance,
                    config.focus_margin,
                    config.focus_fit,
                );
            }
        }
    }

    /// Drop every focus state at once, leaving cards where they are in world
    /// space and handing them back to homing. Safe to call repeatedly.
    pub fn clear(&mut self, cards: &mut [Card], camera: &Camera) {
        for card in cards.iter_mut().filter(|c| c.mode.is_focus()) {
            detach_to_world(card, camera);
            card.transform.scale = 1.0;
            card.velocity = Vec3::ZERO;
            card.angular_velocity = Vec3::ZERO;
            card.mode = Mode::Normal(Motion::Homing);
        }
        if self.is_active() {
            log::debug!("[focus] cleared {} card(s)", self.active.len());
        }
        self.active.clear();
        self.focused = None;
    }

    /// Stop tracking a card that is leaving the pool.
    pub fn forget(&mut self, id: CardId) {
        self.active.remove(&id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }
}

/// Where a focused card sits: `distance` straight ahead of the camera.
fn focus_point(camera: &Camera, distance: f32) -> Vec3 {
    camera.eye + camera.forward() * distance
}

fn begin_focus_in(card: &mut Card, camera: &Camera, center: Vec3, config: &SwarmConfig) {
    detach_to_world(card, camera);
    let pre_focus_rotation = match card.mode {
        Mode::FocusOut(f) | Mode::FocusIn(f) => f.pre_focus_rotation,
        Mode::Focused { pre_focus_rotation } => pre_focus_rotation,
        _ => card.transform.rotation,
    };
    let from = card.transform;
    let to = focus_point(camera, config.focus_distance);
    card.mode = Mode::FocusIn(FocusFlight {
        curve: focus_curve(from.translation, to, center),
        from_rotation: from.rotation,
        to_rotation: camera.orientation(),
        from_scale: from.scale,
        to_scale: fit_scale(
            card.size(),
            camera,
            config.focus_distance,
            config.focus_margin,
            config.focus_fit,
        ),
        elapsed: 0.0,
        duration: config.focus_duration_sec,
        pre_focus_rotation,
    });
    card.velocity = Vec3::ZERO;
    card.angular_velocity = Vec3::ZERO;
    card.opacity = 1.0;
}

/// Returns false if the card was not in a state that can be released.
fn begin_focus_out(
    card: &mut Card,
    camera: &Camera,
    target_world: Vec3,
    center: Vec3,
    config: &SwarmConfig,
) -> bool {
    let pre_focus_rotation: Quat = match card.mode {
        Mode::FocusIn(f) => f.pre_focus_rotation,
        Mode::Focused { pre_focus_rotation } => pre_focus_rotation,
        _ => return false,
    };
    detach_to_world(card, camera);
    let from = card.transform;
    card.mode = Mode::FocusOut(FocusFlight {
        curve: focus_curve(from.translation, target_world, center),
        from_rotation: from.rotation,
        to_rotation: pre_focus_rotation,
        from_scale: from.scale,
        to_scale: 1.0,
        elapsed: 0.0,
        duration: config.focus_duration_sec,
        pre_focus_rotation,
    });
    true
}

/// Move a card along its focus flight. Returns true once the flight is done,
/// with the card snapped exactly onto the end pose.
fn advance(card: &mut Card, flight: &mut FocusFlight, dt_sec: f32) -> bool {
    if dt_sec.is_finite() && dt_sec > 0.0 {
        flight.elapsed += dt_sec;
    }
    let p = flight.progress();
    let e = ease_in_out_cubic(p);
    card.transform.translation = flight.curve.eval(e);
    card.transform.rotation = flight.from_rotation.slerp(flight.to_rotation, e).normalize();
    card.transform.scale = flight.from_scale + (flight.to_scale - flight.from_scale) * e;
    if p >= 1.0 {
        card.transform.translation = flight.curve.p3;
        card.transform.rotation = flight.to_rotation;
        card.transform.scale = flight.to_scale;
        return true;
    }
    false
}
