use crate::billboard::turn_toward_camera;
use crate::camera::Camera;
use crate::card::{Card, CardId, Mode, MorphFlight, Motion};
use crate::config::SwarmConfig;
use crate::constants::*;
use crate::facing::CameraFacingFrame;
use crate::math::{ease_in_out_cubic, CubicBezier};
use crate::swarm::SwarmEvent;
use fnv::FnvHashSet;
use glam::{Quat, Vec3};
use std::f32::consts::{PI, TAU};

/// Arc that lifts above the straight-line midpoint, then dips under the
/// target before settling onto it.
pub fn morph_curve(from: Vec3, to: Vec3) -> CubicBezier {
    let dist = from.distance(to);
    let lift = (dist * MORPH_LIFT_RATIO).max(MORPH_LIFT_MIN);
    let drop = (dist * MORPH_DROP_RATIO).max(MORPH_DROP_MIN);
    let mid = from.lerp(to, 0.5);
    CubicBezier::new(
        from,
        mid + Vec3::Y * lift,
        to.lerp(mid, 0.35) - Vec3::Y * drop,
        to,
    )
}

/// Drives every card from the old outline onto a new one in one
/// synchronized flight.
#[derive(Clone, Debug, Default)]
pub struct MorphDirector {
    in_flight: FnvHashSet<CardId>,
}

impl MorphDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Start a morph toward each card's (already regenerated) target.
    /// Cards held by the focus controller are left alone.
    pub fn begin(&mut self, cards: &mut [Card], frame: &CameraFacingFrame, config: &SwarmConfig) {
        for card in cards.iter_mut().filter(|c| c.alive && !c.mode.is_focus()) {
            let to = frame.local_to_world(card.target);
            if let Mode::Morph(prev) = card.mode {
                card.transform.rotation *= Quat::from_rotation_y(-prev.prev_spin);
            }
            card.mode = Mode::Morph(MorphFlight {
                curve: morph_curve(card.transform.translation, to),
                elapsed: 0.0,
                duration: config.morph_duration_sec,
                prev_spin: 0.0,
            });
            card.velocity = Vec3::ZERO;
            card.angular_velocity = Vec3::ZERO;
            self.in_flight.insert(card.id);
        }
        log::info!("[morph] started for {} card(s)", self.in_flight.len());
    }

    pub fn step(
        &mut self,
        cards: &mut [Card],
        camera: &Camera,
        config: &SwarmConfig,
        dt_sec: f32,
        events: &mut Vec<SwarmEvent>,
    ) {
        if self.in_flight.is_empty() {
            return;
        }
        for card in cards.iter_mut() {
            let Mode::Morph(mut flight) = card.mode else {
                continue;
            };
            if dt_sec.is_finite() && dt_sec > 0.0 {
                flight.elapsed += dt_sec;
            }
            let p = if flight.duration > 0.0 {
                (flight.elapsed / flight.duration).min(1.0)
            } else {
                1.0
            };
            let e = ease_in_out_cubic(p);
            card.transform.translation = flight.curve.eval(e);

            // billboard the un-spun base, then put the spin back on top
            let base = card.transform.rotation * Quat::from_rotation_y(-flight.prev_spin);
            let base = turn_toward_camera(
                base,
                card.transform.translation,
                camera,
                config.billboard,
                dt_sec,
            );
            let spin = e * TAU;
            flight.prev_spin = spin;
            card.transform.rotation = (base * Quat::from_rotation_y(spin)).normalize();

            card.transform.scale = 1.0 + MORPH_SCALE_PULSE * (PI * e).sin();
            card.opacity = (card.opacity + FADE_IN_PER_SEC * dt_sec.max(0.0)).min(1.0);

            if p >= 1.0 {
                card.transform.translation = flight.curve.p3;
                card.transform.scale = 1.0;
                card.opacity = 1.0;
                card.mode = Mode::Normal(Motion::Homing);
            } else {
                card.mode = Mode::Morph(flight);
            }
        }

        self.in_flight
            .retain(|id| cards.iter().any(|c| c.id == *id && matches!(c.mode, Mode::Morph(_))));
        if self.in_flight.is_empty() {
            log::debug!("[morph] finished");
            events.push(SwarmEvent::MorphFinished);
        }
    }

    /// Stop tracking a card that is leaving the pool or was taken over.
    /// Dropping the last card still in flight finishes the morph.
    pub fn forget(&mut self, id: CardId, events: &mut Vec<SwarmEvent>) {
        if self.in_flight.remove(&id) && self.in_flight.is_empty() {
            log::debug!("[morph] finished, last card {} taken over", id.0);
            events.push(SwarmEvent::MorphFinished);
        }
    }

    pub fn clear(&mut self) {
        self.in_flight.clear();
    }
}
