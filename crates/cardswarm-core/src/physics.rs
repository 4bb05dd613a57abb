//! Flying and homing integration for `Normal` cards.
//!
//! Both steps treat `dt_sec <= 0` (or non-finite) as a no-op.

use crate::card::{Card, Mode, Motion};
use crate::constants::*;
use crate::math::damp_alpha;
use glam::{Quat, Vec3};

#[inline]
fn valid_dt(dt_sec: f32) -> bool {
    dt_sec.is_finite() && dt_sec > 0.0
}

/// Acceleration from gravity and linear drag.
#[inline]
pub fn flight_acceleration(velocity: Vec3) -> Vec3 {
    Vec3::new(
        -DRAG * velocity.x,
        -GRAVITY - DRAG * VERTICAL_DRAG_FACTOR * velocity.y,
        -DRAG * velocity.z,
    )
}

/// Whether a flying card should switch to homing now.
#[inline]
pub fn should_start_homing(age: f32, homing_delay: f32, position: Vec3, velocity: Vec3) -> bool {
    age > homing_delay || velocity.y < 0.0 || position.y < LOW_Y_THRESHOLD
}

/// Semi-implicit Euler step for a flying card. Returns true when the card
/// switched to homing during this step.
pub fn step_flying(card: &mut Card, dt_sec: f32, spin: bool) -> bool {
    let Mode::Normal(Motion::Flying { homing_delay }) = card.mode else {
        return false;
    };
    if !valid_dt(dt_sec) {
        return false;
    }

    card.age += dt_sec;
    card.velocity += flight_acceleration(card.velocity) * dt_sec;
    card.transform.translation += card.velocity * dt_sec;

    if spin {
        let delta = Quat::from_scaled_axis(card.angular_velocity * dt_sec);
        card.transform.rotation = (card.transform.rotation * delta).normalize();
    }

    let mut home = false;
    if card.transform.translation.y < FLOOR_Y {
        card.transform.translation.y = FLOOR_Y;
        card.velocity.y = card.velocity.y.max(0.0);
        home = true;
    }
    home |= should_start_homing(
        card.age,
        homing_delay,
        card.transform.translation,
        card.velocity,
    );

    if home {
        card.mode = Mode::Normal(Motion::Homing);
    }
    home
}

/// Exponential approach toward `target_world`; leftover velocity decays
/// instead of being zeroed.
pub fn step_homing(card: &mut Card, target_world: Vec3, dt_sec: f32, homing_speed: f32) {
    if !valid_dt(dt_sec) {
        return;
    }
    card.age += dt_sec;
    let alpha = damp_alpha(homing_speed, dt_sec);
    card.transform.translation = card.transform.translation.lerp(target_world, alpha);
    card.velocity *= RESIDUAL_DECAY;
    card.angular_velocity *= RESIDUAL_DECAY;
}

/// Fade a freshly spawned card in and grow it toward full size.
pub fn step_fade_in(card: &mut Card, dt_sec: f32) {
    if !valid_dt(dt_sec) || card.opacity >= 1.0 {
        return;
    }
    card.opacity = (card.opacity + FADE_IN_PER_SEC * dt_sec).min(1.0);
    card.transform.scale = SPAWN_SCALE + (1.0 - SPAWN_SCALE) * card.opacity;
}

/// A card whose kinematic state went non-finite cannot recover by itself.
pub fn is_corrupt(card: &Card) -> bool {
    !card.transform.translation.is_finite()
        || !card.velocity.is_finite()
        || !card.transform.rotation.is_finite()
}
