use crate::camera::Camera;
use crate::card::Card;
use crate::config::BillboardMode;
use crate::constants::BILLBOARD_SNAP_EPSILON_RAD;
use crate::math::{look_rotation, rotate_toward};
use glam::{Quat, Vec3};

/// Orientation that makes a card at `position` face the camera without roll.
pub fn facing_rotation(position: Vec3, camera: &Camera) -> Quat {
    look_rotation(camera.eye - position, Vec3::Y)
}

/// One billboard step for an orientation at `position`: snap when `Instant`,
/// otherwise turn no faster than the configured rate.
pub fn turn_toward_camera(
    rotation: Quat,
    position: Vec3,
    camera: &Camera,
    mode: BillboardMode,
    dt_sec: f32,
) -> Quat {
    let desired = facing_rotation(position, camera);
    match mode {
        BillboardMode::Instant => desired,
        BillboardMode::Capped { max_deg_per_sec } => rotate_toward(
            rotation,
            desired,
            max_deg_per_sec.to_radians() * dt_sec.max(0.0),
            BILLBOARD_SNAP_EPSILON_RAD,
        ),
    }
}

pub fn billboard_toward_camera(card: &mut Card, camera: &Camera, mode: BillboardMode, dt_sec: f32) {
    card.transform.rotation = turn_toward_camera(
        card.transform.rotation,
        card.transform.translation,
        camera,
        mode,
        dt_sec,
    );
}
