use crate::constants::{ORBIT_PITCH_MAX, ORBIT_PITCH_MIN, ORBIT_RADIUS, ORBIT_RAD_PER_PX};
use cardswarm_core::constants::FRAME_ANCHOR;
use cardswarm_core::Camera;
use glam::{Vec2, Vec3};

/// Drag-to-orbit camera around the outline anchor.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fovy_radians: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: FRAME_ANCHOR,
            radius: ORBIT_RADIUS,
            yaw: 0.0,
            pitch: 0.0,
            fovy_radians: Camera::default().fovy_radians,
        }
    }
}

impl OrbitCamera {
    /// Eye position; yaw 0 and pitch 0 look down -Z at the target.
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.radius
    }

    /// Apply a pointer drag measured in backing-store pixels.
    pub fn orbit(&mut self, delta_px: Vec2) {
        if !delta_px.is_finite() {
            return;
        }
        self.yaw -= delta_px.x * ORBIT_RAD_PER_PX;
        self.pitch = (self.pitch + delta_px.y * ORBIT_RAD_PER_PX).clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
    }

    /// Snapshot for the simulation at the given viewport aspect.
    pub fn to_camera(&self, aspect: f32) -> Camera {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fovy_radians,
            ..Camera::default()
        }
    }
}
