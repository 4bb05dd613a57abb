//! Camera description consumed by the choreography.
//!
//! The host owns the real camera (orbit controls, resize handling); each
//! frame it hands a snapshot of it to the swarm.

use crate::math::look_rotation;
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 4.0, 12.0),
            target: Vec3::new(0.0, 4.0, 0.0),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 200.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// World orientation of the camera: local -Z looks at the target.
    pub fn orientation(&self) -> Quat {
        look_rotation(self.eye - self.target, self.up)
    }

    /// World-space ray through a point in normalized device coordinates
    /// (x right, y up, both in -1..1).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = far.truncate() / far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize_or_zero(),
        }
    }

    /// Height and width of the view frustum at `distance` from the eye.
    pub fn visible_extent(&self, distance: f32) -> Vec2 {
        let h = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        Vec2::new(h * self.aspect, h)
    }
}
