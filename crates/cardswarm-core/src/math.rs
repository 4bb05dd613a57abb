use glam::{Mat3, Quat, Vec3};

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Blend factor for an exponential approach that is independent of frame rate.
#[inline]
pub fn damp_alpha(rate: f32, dt_sec: f32) -> f32 {
    1.0 - (-dt_sec * rate).exp()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

impl CubicBezier {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn eval(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }
}

/// Rotation whose local +Z points along `forward` with no roll about `up`.
///
/// Falls back to a different reference axis when `forward` is parallel to
/// `up`, and to identity when `forward` is degenerate.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let z = forward.normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut x = up.cross(z);
    if x.length_squared() < 1e-8 {
        x = Vec3::X.cross(z);
        if x.length_squared() < 1e-8 {
            x = Vec3::Z.cross(z);
        }
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

/// Angle in radians between two orientations, using the shorter arc.
#[inline]
pub fn angle_between(a: Quat, b: Quat) -> f32 {
    let d = a.dot(b).abs().min(1.0);
    2.0 * d.acos()
}

/// Turn `current` toward `desired` by at most `max_angle` radians.
pub fn rotate_toward(current: Quat, desired: Quat, max_angle: f32, snap_epsilon: f32) -> Quat {
    let angle = angle_between(current, desired);
    if angle < snap_epsilon {
        return desired;
    }
    let t = (max_angle / angle).min(1.0);
    current.slerp(desired, t).normalize()
}
