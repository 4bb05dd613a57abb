use crate::camera::Camera;
use crate::math::look_rotation;
use glam::{Quat, Vec3};

/// Virtual plane pinned at a world anchor that keeps turning toward the
/// camera. Shape-local outline points are placed in the world through it.
#[derive(Clone, Debug)]
pub struct CameraFacingFrame {
    anchor: Vec3,
    up: Vec3,
    orientation: Quat,
}

impl CameraFacingFrame {
    pub fn new(anchor: Vec3) -> Self {
        Self {
            anchor,
            up: Vec3::Y,
            orientation: Quat::IDENTITY,
        }
    }

    /// Must run every frame before any `local_to_world` call.
    pub fn update(&mut self, camera: &Camera) {
        self.orientation = look_rotation(camera.eye - self.anchor, self.up);
    }

    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.orientation * local + self.anchor
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }
}
